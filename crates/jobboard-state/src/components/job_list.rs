// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use jobboard_core::Job;
use parking_lot::Mutex;

use crate::slot::Subscription;
use crate::store::JobStore;

/// The job list pane.
pub struct JobList {
	store: Arc<JobStore>,
	jobs: Arc<Mutex<Vec<Job>>>,
	selected: Arc<Mutex<Option<Job>>>,
	subscriptions: Vec<Subscription>,
}

impl JobList {
	pub fn new(store: Arc<JobStore>) -> Self {
		Self {
			store,
			jobs: Arc::default(),
			selected: Arc::default(),
			subscriptions: Vec::new(),
		}
	}

	/// Loads jobs, then starts mirroring the job list and the selection.
	pub async fn mount(&mut self) {
		self.store.load_jobs().await;
		self.unmount();

		let jobs = self.jobs.clone();
		self
			.subscriptions
			.push(self.store.jobs().subscribe(move |list| *jobs.lock() = list.clone()));

		let selected = self.selected.clone();
		self
			.subscriptions
			.push(self.store.selected_job().subscribe(move |job| *selected.lock() = job.clone()));
	}

	pub fn unmount(&mut self) {
		self.subscriptions.clear();
	}

	pub fn is_mounted(&self) -> bool {
		!self.subscriptions.is_empty()
	}

	pub fn jobs(&self) -> Vec<Job> {
		self.jobs.lock().clone()
	}

	pub fn selected(&self) -> Option<Job> {
		self.selected.lock().clone()
	}

	pub fn select(&self, job: &Job) {
		self.store.select_job(Some(job.clone()));
	}

	/// True if `job` has the same id as the selected job.
	pub fn is_selected(&self, job: &Job) -> bool {
		self
			.selected
			.lock()
			.as_ref()
			.is_some_and(|selected| selected.same_posting(job))
	}
}
