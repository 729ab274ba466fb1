// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resume upload followed by application insert.

use jobboard_core::{Application, ApplicationForm, Job};
use thiserror::Error;
use tracing::{debug, warn};

use crate::store::JobStore;

/// The single notice shown for any failed submission.
pub const SUBMIT_FAILURE_NOTICE: &str = "Failed to submit application. Please try again.";

/// What to do with an uploaded resume whose application insert failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
	/// Leave the object in storage.
	#[default]
	Keep,
	/// Remove the object. Removal failures are only logged.
	Remove,
}

impl OrphanPolicy {
	pub fn from_cleanup_flag(cleanup: bool) -> Self {
		if cleanup {
			Self::Remove
		} else {
			Self::Keep
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// Invalid form or no selected job. Nothing was sent.
	Skipped,
	Submitted { job: Job, application: Application },
}

impl SubmitOutcome {
	/// "Application submitted successfully for {title}!" for a submitted
	/// outcome.
	pub fn success_message(&self) -> Option<String> {
		match self {
			Self::Skipped => None,
			Self::Submitted { job, .. } => Some(format!(
				"Application submitted successfully for {}!",
				job.title
			)),
		}
	}
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
	#[error("resume upload failed")]
	ResumeUpload,

	#[error("application insert failed")]
	Insert,
}

impl SubmissionError {
	pub fn user_message(&self) -> &'static str {
		SUBMIT_FAILURE_NOTICE
	}
}

/// Runs one submission for `selected` using the values in `form`.
///
/// The chosen resume is uploaded on every attempt, keyed by the selected job
/// and the current email. The form is reset only when the insert succeeds;
/// on any error it keeps what the applicant typed.
pub async fn submit(
	store: &JobStore,
	selected: Option<&Job>,
	form: &mut ApplicationForm,
	policy: OrphanPolicy,
) -> Result<SubmitOutcome, SubmissionError> {
	let job = match selected {
		Some(job) if form.is_valid() => job,
		_ => {
			debug!(has_job = selected.is_some(), "Submission skipped");
			return Ok(SubmitOutcome::Skipped);
		}
	};

	let mut uploaded = None;
	if let Some(file) = form.resume().cloned() {
		let path = store.resume_path(&file, &form.email, &job.id.to_string());
		let url = store
			.upload_resume_to(&path, &file)
			.await
			.ok_or(SubmissionError::ResumeUpload)?;
		form.mark_resume_uploaded(url);
		uploaded = Some(path);
	}

	let application = form.to_application(job.id);
	if !store.submit_application(application.clone()).await {
		if let (OrphanPolicy::Remove, Some(path)) = (policy, uploaded.as_ref()) {
			if !store.discard_resume(path).await {
				warn!(path = %path, "Orphaned resume left in storage");
			}
		}
		return Err(SubmissionError::Insert);
	}

	form.reset();
	Ok(SubmitOutcome::Submitted {
		job: job.clone(),
		application,
	})
}
