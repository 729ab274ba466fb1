// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Backend implementation over the hosted table and storage REST APIs.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jobboard_config::SecretString;
use jobboard_core::{Application, Job, ResumeFile, ResumePath};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::backend::RemoteBackend;
use crate::error::{BackendError, Result};

const DEFAULT_JOBS_TABLE: &str = "jobs";
const DEFAULT_APPLICATIONS_TABLE: &str = "applications";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for constructing a [`SupabaseBackend`].
pub struct SupabaseBackendBuilder {
	base_url: Option<String>,
	api_key: Option<SecretString>,
	jobs_table: String,
	applications_table: String,
	request_timeout: Duration,
}

impl SupabaseBackendBuilder {
	pub fn new() -> Self {
		Self {
			base_url: None,
			api_key: None,
			jobs_table: DEFAULT_JOBS_TABLE.to_string(),
			applications_table: DEFAULT_APPLICATIONS_TABLE.to_string(),
			request_timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Sets the project URL.
	///
	/// Example: `https://abcdefgh.supabase.co`
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Sets the API key sent as both `apikey` and bearer token.
	pub fn api_key(mut self, key: impl Into<SecretString>) -> Self {
		self.api_key = Some(key.into());
		self
	}

	pub fn jobs_table(mut self, table: impl Into<String>) -> Self {
		self.jobs_table = table.into();
		self
	}

	pub fn applications_table(mut self, table: impl Into<String>) -> Self {
		self.applications_table = table.into();
		self
	}

	/// Sets the HTTP request timeout.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	pub fn build(self) -> Result<SupabaseBackend> {
		let api_key = self
			.api_key
			.filter(|k| !k.expose().trim().is_empty())
			.ok_or(BackendError::MissingApiKey)?;
		let base_url = self.base_url.ok_or(BackendError::InvalidBaseUrl)?;

		let base_url = base_url.trim_end_matches('/').to_string();
		if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
			return Err(BackendError::InvalidBaseUrl);
		}

		let http_client = crate::http::builder()
			.timeout(self.request_timeout)
			.build()
			.map_err(BackendError::RequestFailed)?;

		info!(
			base_url = %base_url,
			jobs_table = %self.jobs_table,
			applications_table = %self.applications_table,
			"Backend client initialized"
		);

		Ok(SupabaseBackend {
			inner: Arc::new(SupabaseBackendInner {
				base_url,
				api_key,
				jobs_table: self.jobs_table,
				applications_table: self.applications_table,
				http_client,
			}),
		})
	}
}

impl Default for SupabaseBackendBuilder {
	fn default() -> Self {
		Self::new()
	}
}

struct SupabaseBackendInner {
	base_url: String,
	api_key: SecretString,
	jobs_table: String,
	applications_table: String,
	http_client: Client,
}

/// Client for the hosted table store (`/rest/v1`) and file store
/// (`/storage/v1`).
#[derive(Clone)]
pub struct SupabaseBackend {
	inner: Arc<SupabaseBackendInner>,
}

impl fmt::Debug for SupabaseBackend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SupabaseBackend")
			.field("base_url", &self.inner.base_url)
			.field("api_key", &self.inner.api_key)
			.field("jobs_table", &self.inner.jobs_table)
			.field("applications_table", &self.inner.applications_table)
			.finish()
	}
}

impl SupabaseBackend {
	pub fn builder() -> SupabaseBackendBuilder {
		SupabaseBackendBuilder::new()
	}

	pub fn base_url(&self) -> &str {
		&self.inner.base_url
	}

	fn table_url(&self, table: &str) -> String {
		format!("{}/rest/v1/{}", self.inner.base_url, table)
	}

	fn object_url(&self, bucket: &str, path: &ResumePath) -> String {
		format!(
			"{}/storage/v1/object/{}/{}",
			self.inner.base_url,
			urlencoding::encode(bucket),
			encode_path(path)
		)
	}

	fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
		request
			.header("apikey", self.inner.api_key.expose().as_str())
			.header(
				"Authorization",
				format!("Bearer {}", self.inner.api_key.expose()),
			)
	}

	async fn check_status(response: Response, operation: &'static str) -> Result<Response> {
		if response.status().is_success() {
			return Ok(response);
		}

		let status = response.status().as_u16();
		let message = response.text().await.unwrap_or_default();
		error!(status, message = %message, operation, "Backend request failed");
		Err(BackendError::ServerError { status, message })
	}
}

#[async_trait]
impl RemoteBackend for SupabaseBackend {
	async fn select_jobs(&self) -> Result<Vec<Job>> {
		let url = self.table_url(&self.inner.jobs_table);

		debug!(url = %url, "Selecting jobs");

		let response = self
			.authorize(self.inner.http_client.get(&url))
			.query(&[("select", "*")])
			.send()
			.await?;
		let response = Self::check_status(response, "select_jobs").await?;

		let body = response.bytes().await?;
		let jobs: Vec<Job> = serde_json::from_slice(&body)?;

		debug!(count = jobs.len(), "Selected jobs");
		Ok(jobs)
	}

	async fn insert_application(&self, application: &Application) -> Result<()> {
		let url = self.table_url(&self.inner.applications_table);

		debug!(url = %url, job_id = application.job_id, "Inserting application");

		let response = self
			.authorize(self.inner.http_client.post(&url))
			.header("Prefer", "return=minimal")
			.json(&[application])
			.send()
			.await?;
		Self::check_status(response, "insert_application").await?;

		info!(job_id = application.job_id, "Application inserted");
		Ok(())
	}

	async fn upload_object(
		&self,
		bucket: &str,
		path: &ResumePath,
		file: &ResumeFile,
	) -> Result<()> {
		let url = self.object_url(bucket, path);

		debug!(
			url = %url,
			bucket,
			size = file.len(),
			content_type = file.content_type(),
			"Uploading object"
		);

		let response = self
			.authorize(self.inner.http_client.post(&url))
			.header("Content-Type", file.content_type())
			.header("x-upsert", "false")
			.body(file.bytes().clone())
			.send()
			.await?;
		Self::check_status(response, "upload_object").await?;

		info!(bucket, path = %path, "Object uploaded");
		Ok(())
	}

	fn public_url(&self, bucket: &str, path: &ResumePath) -> String {
		format!(
			"{}/storage/v1/object/public/{}/{}",
			self.inner.base_url,
			urlencoding::encode(bucket),
			encode_path(path)
		)
	}

	async fn remove_object(&self, bucket: &str, path: &ResumePath) -> Result<()> {
		let url = format!(
			"{}/storage/v1/object/{}",
			self.inner.base_url,
			urlencoding::encode(bucket)
		);

		debug!(url = %url, bucket, path = %path, "Removing object");

		let response = self
			.authorize(self.inner.http_client.delete(&url))
			.json(&RemoveObjectsRequest {
				prefixes: vec![path.as_str()],
			})
			.send()
			.await?;
		Self::check_status(response, "remove_object").await?;

		info!(bucket, path = %path, "Object removed");
		Ok(())
	}
}

/// Request payload for deleting objects.
#[derive(Debug, Serialize)]
struct RemoveObjectsRequest<'a> {
	prefixes: Vec<&'a str>,
}

fn encode_path(path: &ResumePath) -> String {
	path
		.segments()
		.map(|segment| urlencoding::encode(segment).into_owned())
		.collect::<Vec<_>>()
		.join("/")
}
