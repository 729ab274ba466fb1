// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote backend connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::secret::SecretString;

pub const DEFAULT_JOBS_TABLE: &str = "jobs";
pub const DEFAULT_APPLICATIONS_TABLE: &str = "applications";
pub const DEFAULT_RESUMES_BUCKET: &str = "resumes";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfigLayer {
	pub url: Option<String>,
	#[serde(skip_serializing)]
	pub api_key: Option<SecretString>,
	pub jobs_table: Option<String>,
	pub applications_table: Option<String>,
	pub resumes_bucket: Option<String>,
	pub request_timeout_secs: Option<u64>,
}

impl BackendConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.jobs_table.is_some() {
			self.jobs_table = other.jobs_table;
		}
		if other.applications_table.is_some() {
			self.applications_table = other.applications_table;
		}
		if other.resumes_bucket.is_some() {
			self.resumes_bucket = other.resumes_bucket;
		}
		if other.request_timeout_secs.is_some() {
			self.request_timeout_secs = other.request_timeout_secs;
		}
	}

	/// URL and API key have no defaults.
	pub fn finalize(self) -> Result<BackendConfig, ConfigError> {
		let url = self
			.url
			.filter(|u| !u.trim().is_empty())
			.ok_or_else(|| ConfigError::MissingField("backend.url".to_string()))?;
		let api_key = self
			.api_key
			.filter(|k| !k.expose().trim().is_empty())
			.ok_or_else(|| ConfigError::MissingField("backend.api_key".to_string()))?;

		Ok(BackendConfig {
			url,
			api_key,
			jobs_table: self
				.jobs_table
				.unwrap_or_else(|| DEFAULT_JOBS_TABLE.to_string()),
			applications_table: self
				.applications_table
				.unwrap_or_else(|| DEFAULT_APPLICATIONS_TABLE.to_string()),
			resumes_bucket: self
				.resumes_bucket
				.unwrap_or_else(|| DEFAULT_RESUMES_BUCKET.to_string()),
			request_timeout_secs: self
				.request_timeout_secs
				.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
		})
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
	pub url: String,
	pub api_key: SecretString,
	pub jobs_table: String,
	pub applications_table: String,
	pub resumes_bucket: String,
	pub request_timeout_secs: u64,
}

impl BackendConfig {
	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.request_timeout_secs)
	}
}
