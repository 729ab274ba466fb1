// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the backend client.

use thiserror::Error;

/// Backend client errors.
#[derive(Debug, Error)]
pub enum BackendError {
	/// Base URL is missing or not an http(s) URL.
	#[error("invalid base URL")]
	InvalidBaseUrl,

	/// API key is missing or empty.
	#[error("missing API key")]
	MissingApiKey,

	/// HTTP request failed before a response was received.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// Server answered with a non-success status.
	#[error("server error ({status}): {message}")]
	ServerError { status: u16, message: String },

	/// Response body did not match the expected shape.
	#[error("failed to decode response: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_server_error_message() {
		let err = BackendError::ServerError {
			status: 409,
			message: "duplicate key".to_string(),
		};
		assert_eq!(err.to_string(), "server error (409): duplicate key");
	}

	#[test]
	fn test_decode_error_from_serde() {
		let serde_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
		let err: BackendError = serde_err.into();
		assert!(matches!(err, BackendError::Decode(_)));
	}
}
