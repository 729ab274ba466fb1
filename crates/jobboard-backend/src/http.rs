// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::ClientBuilder;

const CLIENT_NAME: &str = "jobboard";

/// Creates an HTTP client builder with the job board User-Agent header.
///
/// # Example
/// ```ignore
/// let client = jobboard_backend::http_builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	reqwest::Client::builder().user_agent(user_agent())
}

/// Returns the User-Agent string.
///
/// Format: `jobboard/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"{CLIENT_NAME}/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("jobboard/"));
		assert!(ua.contains(env!("CARGO_PKG_VERSION")));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn builder_builds() {
		assert!(builder().build().is_ok());
	}
}
