// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resume files and their storage keys.

use std::fmt;
use std::path::Path;

use bytes::Bytes;

use crate::error::{CoreError, Result};

const OCTET_STREAM: &str = "application/octet-stream";

/// An in-memory file chosen by the applicant.
#[derive(Clone, PartialEq)]
pub struct ResumeFile {
	file_name: String,
	content_type: String,
	bytes: Bytes,
}

impl ResumeFile {
	/// Creates a file, inferring the content type from the file extension.
	pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
		let file_name = file_name.into();
		let content_type = content_type_for(&file_name).to_string();
		Self {
			file_name,
			content_type,
			bytes: bytes.into(),
		}
	}

	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = content_type.into();
		self
	}

	/// Reads a file from disk. The original file name is the last path
	/// component.
	pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let file_name = path
			.file_name()
			.and_then(|n| n.to_str())
			.ok_or_else(|| CoreError::MissingFileName(path.to_path_buf()))?
			.to_string();

		let bytes = tokio::fs::read(path)
			.await
			.map_err(|source| CoreError::ResumeRead {
				path: path.to_path_buf(),
				source,
			})?;

		Ok(Self::new(file_name, bytes))
	}

	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	pub fn content_type(&self) -> &str {
		&self.content_type
	}

	pub fn bytes(&self) -> &Bytes {
		&self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

impl fmt::Debug for ResumeFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResumeFile")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("len", &self.bytes.len())
			.finish()
	}
}

fn content_type_for(file_name: &str) -> &'static str {
	let extension = match file_name.rsplit_once('.') {
		Some((_, ext)) => ext.to_ascii_lowercase(),
		None => return OCTET_STREAM,
	};

	match extension.as_str() {
		"pdf" => "application/pdf",
		"doc" => "application/msword",
		"docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
		"odt" => "application/vnd.oasis.opendocument.text",
		"rtf" => "application/rtf",
		"txt" => "text/plain",
		_ => OCTET_STREAM,
	}
}

/// Storage key of an uploaded resume inside the resumes bucket.
///
/// Format: `{job_id}/{email}-{millis}-{file_name}`. The millisecond
/// timestamp keeps two uploads from the same applicant for the same job
/// from colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResumePath(String);

impl ResumePath {
	pub fn new(job_id: &str, user_email: &str, timestamp_millis: i64, file_name: &str) -> Self {
		Self(format!(
			"{job_id}/{user_email}-{timestamp_millis}-{file_name}"
		))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Path segments, for per-segment URL encoding.
	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.0.split('/')
	}
}

impl fmt::Display for ResumePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for ResumePath {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
