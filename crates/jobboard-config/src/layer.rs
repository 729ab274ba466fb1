// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{BackendConfigLayer, LoggingConfigLayer, SubmissionConfigLayer};

/// Every field is optional so layers can be stacked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobBoardConfigLayer {
	#[serde(default)]
	pub backend: Option<BackendConfigLayer>,
	#[serde(default)]
	pub submission: Option<SubmissionConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl JobBoardConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: JobBoardConfigLayer) {
		merge_option(&mut self.backend, other.backend, BackendConfigLayer::merge);
		merge_option(
			&mut self.submission,
			other.submission,
			SubmissionConfigLayer::merge,
		);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}
