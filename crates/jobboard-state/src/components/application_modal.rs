// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use jobboard_core::{is_valid_email, ApplicationForm, Job, ResumeFile};
use parking_lot::Mutex;
use tracing::warn;

use super::EventEmitter;
use crate::slot::Subscription;
use crate::store::JobStore;
use crate::submission::{self, OrphanPolicy, SubmissionError, SubmitOutcome};

/// The application form dialog.
///
/// Closes itself (emits `close`) after a successful submission, on cancel,
/// and on an overlay click. A failed submission leaves it open with the
/// form intact and the failure notice set.
pub struct ApplicationModal {
	store: Arc<JobStore>,
	policy: OrphanPolicy,
	selected: Arc<Mutex<Option<Job>>>,
	form: ApplicationForm,
	notice: Option<String>,
	close: EventEmitter,
	_subscription: Subscription,
}

impl ApplicationModal {
	pub fn new(store: Arc<JobStore>, policy: OrphanPolicy) -> Self {
		let selected: Arc<Mutex<Option<Job>>> = Arc::default();
		let mirror = selected.clone();
		let subscription = store
			.selected_job()
			.subscribe(move |job| *mirror.lock() = job.clone());

		Self {
			store,
			policy,
			selected,
			form: ApplicationForm::default(),
			notice: None,
			close: EventEmitter::new(),
			_subscription: subscription,
		}
	}

	pub fn selected_job(&self) -> Option<Job> {
		self.selected.lock().clone()
	}

	pub fn form(&self) -> &ApplicationForm {
		&self.form
	}

	pub fn set_name(&mut self, name: impl Into<String>) {
		self.form.name = name.into();
	}

	pub fn set_email(&mut self, email: impl Into<String>) {
		self.form.email = email.into();
	}

	pub fn set_phone(&mut self, phone: impl Into<String>) {
		self.form.phone = phone.into();
	}

	pub fn choose_file(&mut self, file: Option<ResumeFile>) {
		self.form.choose_resume(file);
	}

	pub fn is_form_valid(&self) -> bool {
		self.form.is_valid()
	}

	pub fn is_valid_email(&self) -> bool {
		is_valid_email(&self.form.email)
	}

	/// Last message shown to the applicant, if any.
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	pub fn on_close(&self, listener: impl Fn() + Send + Sync + 'static) {
		self.close.subscribe(listener);
	}

	pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmissionError> {
		self.notice = None;
		let selected = self.selected_job();
		let result =
			submission::submit(&self.store, selected.as_ref(), &mut self.form, self.policy).await;

		match &result {
			Ok(outcome @ SubmitOutcome::Submitted { .. }) => {
				self.notice = outcome.success_message();
				self.close.emit();
			}
			Ok(SubmitOutcome::Skipped) => {}
			Err(e) => {
				warn!(error = %e, "Application submission failed");
				self.notice = Some(e.user_message().to_string());
			}
		}
		result
	}

	pub fn cancel(&mut self) {
		self.form.reset();
		self.notice = None;
		self.close.emit();
	}

	pub fn overlay_click(&mut self) {
		self.cancel();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use jobboard_backend::{BackendError, MockRemoteBackend};

	use crate::submission::SUBMIT_FAILURE_NOTICE;

	fn closes(modal: &ApplicationModal) -> Arc<AtomicUsize> {
		let count = Arc::new(AtomicUsize::new(0));
		let counter = count.clone();
		modal.on_close(move || {
			counter.fetch_add(1, Ordering::SeqCst);
		});
		count
	}

	fn fill(modal: &mut ApplicationModal) {
		modal.set_name("Alice");
		modal.set_email("alice@x.com");
		modal.set_phone("555");
		modal.choose_file(Some(ResumeFile::new("resume.pdf", b"%PDF".to_vec())));
	}

	fn accepting_backend() -> MockRemoteBackend {
		let mut backend = MockRemoteBackend::new();
		backend.expect_upload_object().returning(|_, _, _| Ok(()));
		backend
			.expect_public_url()
			.returning(|_, path| format!("https://cdn/{path}"));
		backend.expect_insert_application().returning(|_| Ok(()));
		backend
	}

	#[tokio::test]
	async fn test_successful_submit_closes_and_resets() {
		let store = Arc::new(JobStore::new(Arc::new(accepting_backend())));
		let mut modal = ApplicationModal::new(store.clone(), OrphanPolicy::Keep);
		let closed = closes(&modal);
		store.select_job(Some(Job::new(1, "Engineer", "Acme")));
		fill(&mut modal);

		let outcome = modal.submit().await.unwrap();

		assert!(matches!(outcome, SubmitOutcome::Submitted { .. }));
		assert_eq!(closed.load(Ordering::SeqCst), 1);
		assert_eq!(modal.form(), &ApplicationForm::default());
		assert_eq!(
			modal.notice(),
			Some("Application submitted successfully for Engineer!")
		);
		assert_eq!(store.applications().current().len(), 1);
	}

	#[tokio::test]
	async fn test_failed_submit_stays_open_with_notice() {
		let mut backend = MockRemoteBackend::new();
		backend.expect_upload_object().returning(|_, _, _| {
			Err(BackendError::ServerError {
				status: 413,
				message: "too large".to_string(),
			})
		});
		backend.expect_insert_application().times(0);
		let store = Arc::new(JobStore::new(Arc::new(backend)));
		let mut modal = ApplicationModal::new(store.clone(), OrphanPolicy::Keep);
		let closed = closes(&modal);
		store.select_job(Some(Job::new(1, "Engineer", "Acme")));
		fill(&mut modal);

		let err = modal.submit().await.unwrap_err();

		assert_eq!(err, SubmissionError::ResumeUpload);
		assert_eq!(closed.load(Ordering::SeqCst), 0);
		assert_eq!(modal.notice(), Some(SUBMIT_FAILURE_NOTICE));
		assert_eq!(modal.form().name, "Alice");
		assert!(modal.form().resume().is_some());
	}

	#[tokio::test]
	async fn test_submit_without_selection_is_silent() {
		let store = Arc::new(JobStore::new(Arc::new(MockRemoteBackend::new())));
		let mut modal = ApplicationModal::new(store, OrphanPolicy::Keep);
		let closed = closes(&modal);
		fill(&mut modal);

		let outcome = modal.submit().await.unwrap();

		assert_eq!(outcome, SubmitOutcome::Skipped);
		assert_eq!(closed.load(Ordering::SeqCst), 0);
		assert_eq!(modal.notice(), None);
	}

	#[test]
	fn test_validation_tracks_fields() {
		let store = Arc::new(JobStore::new(Arc::new(MockRemoteBackend::new())));
		let mut modal = ApplicationModal::new(store, OrphanPolicy::Keep);
		assert!(!modal.is_form_valid());

		fill(&mut modal);
		assert!(modal.is_form_valid());

		modal.set_email("alice@x");
		assert!(!modal.is_valid_email());
		assert!(!modal.is_form_valid());

		modal.set_email("alice@x.com");
		modal.choose_file(None);
		assert!(modal.form().resume_touched());
		assert!(!modal.is_form_valid());
	}

	#[test]
	fn test_cancel_and_overlay_click_reset_and_close() {
		let store = Arc::new(JobStore::new(Arc::new(MockRemoteBackend::new())));
		let mut modal = ApplicationModal::new(store, OrphanPolicy::Keep);
		let closed = closes(&modal);

		fill(&mut modal);
		modal.cancel();
		assert_eq!(modal.form(), &ApplicationForm::default());

		fill(&mut modal);
		modal.overlay_click();
		assert_eq!(modal.form(), &ApplicationForm::default());

		assert_eq!(closed.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn test_cancel_clears_failure_notice() {
		let mut backend = MockRemoteBackend::new();
		backend.expect_upload_object().returning(|_, _, _| Ok(()));
		backend
			.expect_public_url()
			.returning(|_, path| format!("https://cdn/{path}"));
		backend.expect_insert_application().returning(|_| {
			Err(BackendError::ServerError {
				status: 500,
				message: "down".to_string(),
			})
		});
		let store = Arc::new(JobStore::new(Arc::new(backend)));
		let mut modal = ApplicationModal::new(store.clone(), OrphanPolicy::Keep);
		store.select_job(Some(Job::new(1, "Engineer", "Acme")));
		fill(&mut modal);

		modal.submit().await.unwrap_err();
		assert_eq!(modal.notice(), Some(SUBMIT_FAILURE_NOTICE));

		modal.overlay_click();
		assert_eq!(modal.notice(), None);
	}

	#[tokio::test]
	async fn test_resubmit_clears_previous_notice() {
		let mut backend = MockRemoteBackend::new();
		backend.expect_upload_object().times(1).returning(|_, _, _| {
			Err(BackendError::ServerError {
				status: 413,
				message: "too large".to_string(),
			})
		});
		let store = Arc::new(JobStore::new(Arc::new(backend)));
		let mut modal = ApplicationModal::new(store.clone(), OrphanPolicy::Keep);
		store.select_job(Some(Job::new(1, "Engineer", "Acme")));
		fill(&mut modal);

		modal.submit().await.unwrap_err();
		assert!(modal.notice().is_some());

		modal.set_email("not-an-email");
		let outcome = modal.submit().await.unwrap();
		assert_eq!(outcome, SubmitOutcome::Skipped);
		assert_eq!(modal.notice(), None);
	}
}
