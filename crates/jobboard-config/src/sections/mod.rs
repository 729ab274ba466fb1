// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod backend;
mod logging;
mod submission;

pub use backend::{BackendConfig, BackendConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use submission::{SubmissionConfig, SubmissionConfigLayer};
