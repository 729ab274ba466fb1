// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use parking_lot::Mutex;

use super::{ApplicationModal, JobDetails};

/// Which modals are currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
	pub show_application_modal: bool,
	pub show_job_details_modal: bool,
}

/// Top-level page state. Clones share the same flags.
#[derive(Debug, Clone, Default)]
pub struct AppShell {
	state: Arc<Mutex<ShellState>>,
}

impl AppShell {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> ShellState {
		*self.state.lock()
	}

	pub fn show_job_details(&self) {
		self.state.lock().show_job_details_modal = true;
	}

	pub fn close_job_details(&self) {
		self.state.lock().show_job_details_modal = false;
	}

	/// Swaps the job details modal for the application modal.
	pub fn on_apply_click(&self) {
		let mut state = self.state.lock();
		state.show_job_details_modal = false;
		state.show_application_modal = true;
	}

	pub fn close_application_modal(&self) {
		self.state.lock().show_application_modal = false;
	}

	/// Routes the apply intent of `details` and the close signal of `modal`
	/// to this shell.
	pub fn connect(&self, details: &JobDetails, modal: &ApplicationModal) {
		let shell = self.clone();
		details.on_apply(move || shell.on_apply_click());
		let shell = self.clone();
		modal.on_close(move || shell.close_application_modal());
	}
}
