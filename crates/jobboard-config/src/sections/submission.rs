// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Submission flow settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfigLayer {
	pub cleanup_orphaned_resumes: Option<bool>,
}

impl SubmissionConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.cleanup_orphaned_resumes.is_some() {
			self.cleanup_orphaned_resumes = other.cleanup_orphaned_resumes;
		}
	}

	pub fn finalize(self) -> SubmissionConfig {
		SubmissionConfig {
			cleanup_orphaned_resumes: self.cleanup_orphaned_resumes.unwrap_or(false),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
	/// Remove an uploaded resume when its application insert fails.
	pub cleanup_orphaned_resumes: bool,
}
