// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, a TOML file, and environment variables.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::JobBoardConfigLayer;
use crate::secret::SecretString;
use crate::sections::{BackendConfigLayer, LogFormat, LoggingConfigLayer, SubmissionConfigLayer};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "jobboard.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<JobBoardConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<JobBoardConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(JobBoardConfigLayer::default())
	}
}

/// TOML file source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn working_dir() -> Self {
		Self::new(DEFAULT_CONFIG_FILE)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<JobBoardConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(JobBoardConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: JobBoardConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Environment variable source.
///
/// Convention: JOBBOARD_<SECTION>_<FIELD>
pub struct EnvSource {
	lookup: Lookup,
}

impl EnvSource {
	/// Reads the process environment.
	pub fn new() -> Self {
		Self {
			lookup: Box::new(|name| std::env::var(name).ok()),
		}
	}

	/// Reads from a fixed map instead of the process environment.
	pub fn from_map(vars: HashMap<String, String>) -> Self {
		Self {
			lookup: Box::new(move |name| vars.get(name).cloned()),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn var_bool(&self, name: &str) -> Result<Option<bool>, ConfigError> {
		let Some(v) = self.var(name) else {
			return Ok(None);
		};
		match v.to_ascii_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Ok(Some(true)),
			"false" | "0" | "no" | "off" => Ok(Some(false)),
			_ => Err(ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid boolean value '{v}'"),
			}),
		}
	}

	fn var_u64(&self, name: &str) -> Result<Option<u64>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid u64 value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn load_backend(&self) -> Result<BackendConfigLayer, ConfigError> {
		Ok(BackendConfigLayer {
			url: self.var("JOBBOARD_BACKEND_URL"),
			api_key: self.var("JOBBOARD_BACKEND_API_KEY").map(SecretString::new),
			jobs_table: self.var("JOBBOARD_BACKEND_JOBS_TABLE"),
			applications_table: self.var("JOBBOARD_BACKEND_APPLICATIONS_TABLE"),
			resumes_bucket: self.var("JOBBOARD_BACKEND_RESUMES_BUCKET"),
			request_timeout_secs: self.var_u64("JOBBOARD_BACKEND_REQUEST_TIMEOUT_SECS")?,
		})
	}

	fn load_submission(&self) -> Result<SubmissionConfigLayer, ConfigError> {
		Ok(SubmissionConfigLayer {
			cleanup_orphaned_resumes: self.var_bool("JOBBOARD_SUBMISSION_CLEANUP_ORPHANED_RESUMES")?,
		})
	}

	fn load_logging(&self) -> Result<LoggingConfigLayer, ConfigError> {
		let format = self
			.var("JOBBOARD_LOGGING_FORMAT")
			.map(|v| LogFormat::from_str_value(&v))
			.transpose()?;

		Ok(LoggingConfigLayer {
			level: self.var("JOBBOARD_LOGGING_LEVEL"),
			format,
		})
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<JobBoardConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(JobBoardConfigLayer {
			backend: Some(self.load_backend()?),
			submission: Some(self.load_submission()?),
			logging: Some(self.load_logging()?),
		})
	}
}
