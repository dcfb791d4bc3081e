// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections. Each `*Layer` holds optional values from one
//! source; `finalize` fills the gaps with defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use goldshop_common_i18n::{Language, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_STORAGE_KEY: &str = "language";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	/// Language used when no valid preference is persisted.
	pub default_language: Language,
	/// Preference-store key holding the chosen language.
	pub storage_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct I18nConfigLayer {
	pub default_language: Option<Language>,
	pub storage_key: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_language.is_some() {
			self.default_language = other.default_language;
		}
		if other.storage_key.is_some() {
			self.storage_key = other.storage_key;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let storage_key = self
			.storage_key
			.unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
		if storage_key.trim().is_empty() {
			return Err(ConfigError::invalid_value("i18n.storage_key", "must not be empty"));
		}

		Ok(I18nConfig {
			default_language: self.default_language.unwrap_or(DEFAULT_LANGUAGE),
			storage_key,
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// Directory holding `preferences.json`.
	pub state_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfigLayer {
	pub state_dir: Option<PathBuf>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.state_dir.is_some() {
			self.state_dir = other.state_dir;
		}
	}

	pub fn finalize(self, default_state_dir: PathBuf) -> PathsConfig {
		PathsConfig {
			state_dir: self.state_dir.unwrap_or(default_state_dir),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
}

impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" | "text" => Ok(LogFormat::Pretty),
			"json" => Ok(LogFormat::Json),
			other => Err(ConfigError::invalid_value(
				"logging.format",
				format!("expected 'pretty' or 'json', got '{other}'"),
			)),
		}
	}
}

impl fmt::Display for LogFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LogFormat::Pretty => f.write_str("pretty"),
			LogFormat::Json => f.write_str("json"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
	/// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `goldshop=debug`.
	/// `None` when no config file, env var or flag set one.
	pub level: Option<String>,
	pub format: LogFormat,
}

impl LoggingConfig {
	/// Filter directive to install.
	///
	/// A configured level wins over `RUST_LOG`, which wins over the built-in
	/// default.
	pub fn filter_directive(&self, rust_log: Option<&str>) -> String {
		self.level
			.as_deref()
			.or(rust_log.filter(|v| !v.trim().is_empty()))
			.unwrap_or(DEFAULT_LOG_LEVEL)
			.to_string()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
	pub format: Option<LogFormat>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level,
			format: self.format.unwrap_or_default(),
		}
	}
}
