// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"jobboard version: {}\n\
		 Platform:         {}-{}\n\
		 User-Agent:       {}",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH,
		jobboard_backend::user_agent(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_version_info_mentions_version() {
		let info = format_version_info();
		assert!(info.starts_with("jobboard version: "));
		assert!(info.contains(env!("CARGO_PKG_VERSION")));
	}
}
