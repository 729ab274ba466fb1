// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Headless view-models for the job board screens.
//!
//! Each view-model mirrors the store slots it cares about into local fields
//! through [`Subscription`](crate::Subscription) handles it owns. Dropping
//! or unmounting a view-model drops those handles, so values published
//! afterwards are never applied to it.

mod app_shell;
mod application_modal;
mod job_details;
mod job_list;

use std::sync::Arc;

use parking_lot::Mutex;

pub use app_shell::{AppShell, ShellState};
pub use application_modal::ApplicationModal;
pub use job_details::JobDetails;
pub use job_list::JobList;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Fire-and-forget notification from a view-model to its parent.
#[derive(Clone, Default)]
pub struct EventEmitter {
	listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventEmitter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) {
		self.listeners.lock().push(Arc::new(listener));
	}

	/// Calls every listener in registration order.
	pub fn emit(&self) {
		let listeners = self.listeners.lock().clone();
		for listener in listeners {
			listener();
		}
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.lock().len()
	}
}

impl std::fmt::Debug for EventEmitter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventEmitter")
			.field("listeners", &self.listener_count())
			.finish()
	}
}
