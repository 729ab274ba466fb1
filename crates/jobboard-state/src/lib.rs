// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Observable state and the submission flow for the job board.
//!
//! [`JobStore`] owns three [`Slot`]s (jobs, selected job, submitted
//! applications) and hands out read-only [`Observable`] views of them.
//! [`submit`] runs the resume-upload-then-insert sequence, and the
//! [`components`] module holds headless view-models wired to the store.
//!
//! ```ignore
//! let store = Arc::new(JobStore::new(backend));
//! let mut list = JobList::new(store.clone());
//! list.mount().await;
//! list.select(&list.jobs()[0]);
//! ```

pub mod components;
mod slot;
mod store;
mod submission;

pub use slot::{Observable, Slot, SlotReceiver, Subscription};
pub use store::{JobStore, APPLICANT_COUNT_LIMIT, DEFAULT_RESUMES_BUCKET};
pub use submission::{
	submit, OrphanPolicy, SubmissionError, SubmitOutcome, SUBMIT_FAILURE_NOTICE,
};
