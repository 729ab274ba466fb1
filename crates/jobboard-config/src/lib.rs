// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the job board client.
//!
//! Settings are layered from built-in defaults, a TOML file
//! (`./jobboard.toml` unless overridden) and `JOBBOARD_*` environment
//! variables, in increasing precedence.
//!
//! ```ignore
//! use jobboard_config::load_config;
//!
//! let config = load_config()?;
//! println!("Backend at {}", config.backend.url);
//! ```

pub mod error;
pub mod layer;
pub mod secret;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::JobBoardConfigLayer;
pub use secret::{Secret, SecretString};
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, DEFAULT_CONFIG_FILE,
};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct JobBoardConfig {
	pub backend: BackendConfig,
	pub submission: SubmissionConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`JOBBOARD_*`)
/// 2. Config file (`./jobboard.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<JobBoardConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::working_dir()),
		Box::new(EnvSource::new()),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<JobBoardConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::new()),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<JobBoardConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = JobBoardConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Resolve a merged layer, applying defaults and validation.
pub fn finalize(layer: JobBoardConfigLayer) -> Result<JobBoardConfig, ConfigError> {
	let backend = layer.backend.unwrap_or_default().finalize()?;
	let submission = layer.submission.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&backend)?;

	info!(
		backend = %backend.url,
		resumes_bucket = %backend.resumes_bucket,
		cleanup_orphaned_resumes = submission.cleanup_orphaned_resumes,
		"Configuration loaded"
	);

	Ok(JobBoardConfig {
		backend,
		submission,
		logging,
	})
}

fn validate_config(backend: &BackendConfig) -> Result<(), ConfigError> {
	if !(backend.url.starts_with("http://") || backend.url.starts_with("https://")) {
		return Err(ConfigError::Validation(format!(
			"backend.url must be an http(s) URL, got '{}'",
			backend.url
		)));
	}
	if backend.request_timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"backend.request_timeout_secs must be greater than zero".to_string(),
		));
	}
	Ok(())
}
