// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the job board client.
//!
//! This crate provides the data contracts shared by the backend adapter
//! (`jobboard-backend`) and the state layer (`jobboard-state`):
//!
//! - [`Job`]: a posting as read from the `jobs` table
//! - [`Application`]: one submission row for the `applications` table
//! - [`ApplicationForm`]: transient form state plus validation
//! - [`ResumeFile`] and [`ResumePath`]: the uploaded file and its storage key
//!
//! # Example
//!
//! ```
//! use jobboard_core::{is_valid_email, ApplicationForm, ResumeFile};
//!
//! let mut form = ApplicationForm::default();
//! form.name = "Alice".to_string();
//! form.email = "alice@x.com".to_string();
//! form.phone = "555".to_string();
//! assert!(!form.is_valid());
//!
//! form.choose_resume(Some(ResumeFile::new("resume.pdf", b"%PDF".to_vec())));
//! assert!(form.is_valid());
//! assert!(is_valid_email("a@b.c"));
//! ```

pub mod application;
pub mod error;
pub mod job;
pub mod resume;

pub use application::{is_valid_email, Application, ApplicationForm};
pub use error::{CoreError, Result};
pub use job::{Job, JobId};
pub use resume::{ResumeFile, ResumePath};
