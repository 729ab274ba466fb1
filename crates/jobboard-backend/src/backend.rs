// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use async_trait::async_trait;
use jobboard_core::{Application, Job, ResumeFile, ResumePath};

use crate::error::Result;

/// Operations the job board needs from its hosted backend.
///
/// Implementations report transport and storage failures as
/// [`BackendError`](crate::BackendError); deciding what to do with them is
/// left to the caller.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait RemoteBackend: Send + Sync {
	/// Reads every row of the jobs table. Applicant counts are not part of
	/// the row and come back as zero.
	async fn select_jobs(&self) -> Result<Vec<Job>>;

	/// Inserts one row into the applications table.
	async fn insert_application(&self, application: &Application) -> Result<()>;

	/// Stores `file` under `path` in `bucket`.
	async fn upload_object(&self, bucket: &str, path: &ResumePath, file: &ResumeFile)
		-> Result<()>;

	/// Public URL of an object. Pure: no request is made.
	fn public_url(&self, bucket: &str, path: &ResumePath) -> String;

	/// Deletes the object at `path` from `bucket`.
	async fn remove_object(&self, bucket: &str, path: &ResumePath) -> Result<()>;
}

/// Shared handle to a backend implementation.
pub type SharedBackend = Arc<dyn RemoteBackend>;
