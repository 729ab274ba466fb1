// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The job board state store.
//!
//! [`JobStore`] is the only writer of the three state slots (job list,
//! selected job, submitted applications) and the only component that talks
//! to the backend. Every backend-facing operation collapses failures into a
//! `bool` or `Option` and one `error!` line; nothing is retried and nothing
//! is propagated.

use std::sync::Arc;

use jobboard_backend::SharedBackend;
use jobboard_core::{Application, Job, ResumeFile, ResumePath};
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::slot::{Observable, Slot};

/// Default bucket for uploaded resumes.
pub const DEFAULT_RESUMES_BUCKET: &str = "resumes";

/// Upper bound (exclusive) of the generated applicant count.
pub const APPLICANT_COUNT_LIMIT: u32 = 100;

type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Mediator between view-models and the remote backend.
pub struct JobStore {
	backend: SharedBackend,
	resumes_bucket: String,
	jobs: Slot<Vec<Job>>,
	selected_job: Slot<Option<Job>>,
	applications: Slot<Vec<Application>>,
	rng: Mutex<fastrand::Rng>,
	clock: Clock,
}

impl JobStore {
	pub fn new(backend: SharedBackend) -> Self {
		Self {
			backend,
			resumes_bucket: DEFAULT_RESUMES_BUCKET.to_string(),
			jobs: Slot::new(Vec::new()),
			selected_job: Slot::new(None),
			applications: Slot::new(Vec::new()),
			rng: Mutex::new(fastrand::Rng::new()),
			clock: Arc::new(|| chrono::Utc::now().timestamp_millis()),
		}
	}

	pub fn with_resumes_bucket(mut self, bucket: impl Into<String>) -> Self {
		self.resumes_bucket = bucket.into();
		self
	}

	/// Seeds the applicant count generator.
	pub fn with_seed(self, seed: u64) -> Self {
		*self.rng.lock() = fastrand::Rng::with_seed(seed);
		self
	}

	/// Replaces the millisecond clock used in resume paths.
	pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
		self.clock = Arc::new(clock);
		self
	}

	pub fn resumes_bucket(&self) -> &str {
		&self.resumes_bucket
	}

	pub fn jobs(&self) -> Observable<Vec<Job>> {
		self.jobs.observable()
	}

	pub fn selected_job(&self) -> Observable<Option<Job>> {
		self.selected_job.observable()
	}

	pub fn applications(&self) -> Observable<Vec<Application>> {
		self.applications.observable()
	}

	/// Fetches every job and publishes the list.
	///
	/// Each job gets a fresh random applicant count in
	/// `[0, APPLICANT_COUNT_LIMIT)`. On failure the previously published
	/// list stays in place.
	pub async fn load_jobs(&self) {
		let jobs = match self.backend.select_jobs().await {
			Ok(jobs) => jobs,
			Err(e) => {
				error!(error = %e, "Error fetching jobs");
				return;
			}
		};

		let jobs: Vec<Job> = {
			let mut rng = self.rng.lock();
			jobs
				.into_iter()
				.map(|job| job.with_applicants(rng.u32(0..APPLICANT_COUNT_LIMIT)))
				.collect()
		};

		info!(count = jobs.len(), "Jobs loaded");
		self.jobs.publish(jobs);
	}

	/// Publishes `job` as the selection. `None` clears it.
	///
	/// The job does not have to be in the current list.
	pub fn select_job(&self, job: Option<Job>) {
		debug!(job_id = ?job.as_ref().map(|j| j.id), "Job selected");
		self.selected_job.publish(job);
	}

	/// Storage key for `file` uploaded by `user_email` for `job_id`, stamped
	/// with the store clock.
	pub fn resume_path(&self, file: &ResumeFile, user_email: &str, job_id: &str) -> ResumePath {
		ResumePath::new(job_id, user_email, (self.clock)(), file.file_name())
	}

	/// Uploads `file` and returns its public URL, or `None` if the upload
	/// failed.
	pub async fn upload_resume(
		&self,
		file: &ResumeFile,
		user_email: &str,
		job_id: &str,
	) -> Option<String> {
		let path = self.resume_path(file, user_email, job_id);
		self.upload_resume_to(&path, file).await
	}

	/// Uploads `file` to an explicit storage key.
	pub async fn upload_resume_to(&self, path: &ResumePath, file: &ResumeFile) -> Option<String> {
		match self
			.backend
			.upload_object(&self.resumes_bucket, path, file)
			.await
		{
			Ok(()) => {
				let url = self.backend.public_url(&self.resumes_bucket, path);
				info!(path = %path, "Resume uploaded");
				Some(url)
			}
			Err(e) => {
				error!(error = %e, path = %path, "Resume upload failed");
				None
			}
		}
	}

	/// Removes a previously uploaded resume. Returns false if the backend
	/// refused.
	pub async fn discard_resume(&self, path: &ResumePath) -> bool {
		match self
			.backend
			.remove_object(&self.resumes_bucket, path)
			.await
		{
			Ok(()) => {
				info!(path = %path, "Orphaned resume removed");
				true
			}
			Err(e) => {
				error!(error = %e, path = %path, "Failed to remove orphaned resume");
				false
			}
		}
	}

	/// Persists `application`. On success it is appended to the
	/// applications slot.
	pub async fn submit_application(&self, application: Application) -> bool {
		if let Err(e) = self.backend.insert_application(&application).await {
			error!(error = %e, job_id = application.job_id, "Error submitting application");
			return false;
		}

		info!(job_id = application.job_id, "Application submitted");
		self.applications.modify(|apps| apps.push(application));
		true
	}
}
