// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
	#[error("failed to read resume file {path}: {source}")]
	ResumeRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("resume path has no file name: {0}")]
	MissingFileName(PathBuf),
}

pub type Result<T> = std::result::Result<T, CoreError>;
