// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use jobboard_core::Job;
use parking_lot::Mutex;

use super::EventEmitter;
use crate::slot::Subscription;
use crate::store::JobStore;

/// Detail pane for the selected job.
pub struct JobDetails {
	job: Arc<Mutex<Option<Job>>>,
	apply_click: EventEmitter,
	_subscription: Subscription,
}

impl JobDetails {
	pub fn new(store: &JobStore) -> Self {
		let job: Arc<Mutex<Option<Job>>> = Arc::default();
		let mirror = job.clone();
		let subscription = store
			.selected_job()
			.subscribe(move |selected| *mirror.lock() = selected.clone());

		Self {
			job,
			apply_click: EventEmitter::new(),
			_subscription: subscription,
		}
	}

	pub fn job(&self) -> Option<Job> {
		self.job.lock().clone()
	}

	pub fn on_apply(&self, listener: impl Fn() + Send + Sync + 'static) {
		self.apply_click.subscribe(listener);
	}

	/// Emits the apply intent. Nothing happens while no job is shown.
	pub fn apply(&self) -> bool {
		if self.job.lock().is_none() {
			return false;
		}
		self.apply_click.emit();
		true
	}
}
