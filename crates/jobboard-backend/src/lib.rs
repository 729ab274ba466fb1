// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote backend client for the job board.
//!
//! The job board keeps its data in a hosted backend: a table store holding
//! `jobs` and `applications`, and a file store holding uploaded resumes.
//! This crate provides:
//!
//! - [`RemoteBackend`]: the contract the state layer consumes
//! - [`SupabaseBackend`]: an implementation over the hosted REST surface
//!   (table API under `/rest/v1`, storage API under `/storage/v1`)
//!
//! # Example
//!
//! ```ignore
//! use jobboard_backend::{RemoteBackend, SupabaseBackend};
//!
//! let backend = SupabaseBackend::builder()
//!     .base_url("https://project.supabase.co")
//!     .api_key("anon-key")
//!     .build()?;
//!
//! let jobs = backend.select_jobs().await?;
//! ```

mod backend;
mod error;
mod http;
mod supabase;

#[cfg(feature = "mock")]
pub use backend::MockRemoteBackend;
pub use backend::{RemoteBackend, SharedBackend};
pub use error::{BackendError, Result};
pub use http::{builder as http_builder, user_agent};
pub use supabase::{SupabaseBackend, SupabaseBackendBuilder};
