// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files, environment variables and
//! command-line overrides.

use std::path::PathBuf;

use goldshop_common_i18n::Language;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ShopConfigLayer;
use crate::sections::{I18nConfigLayer, LogFormat, LoggingConfigLayer, PathsConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ShopConfigLayer, ConfigError>;
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

	fn load(&self) -> Result<ShopConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ShopConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ShopConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ShopConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ShopConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: GOLDSHOP_<FIELD>
pub struct EnvSource;

impl EnvSource {
	/// Build a layer from an arbitrary variable lookup.
	pub fn load_with<F>(lookup: F) -> Result<ShopConfigLayer, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

		let default_language = match var("GOLDSHOP_DEFAULT_LANGUAGE") {
			Some(v) => Some(v.parse::<Language>().map_err(|e| {
				ConfigError::invalid_value("GOLDSHOP_DEFAULT_LANGUAGE", e.to_string())
			})?),
			None => None,
		};

		let format = match var("GOLDSHOP_LOG_FORMAT") {
			Some(v) => Some(v.parse::<LogFormat>()?),
			None => None,
		};

		Ok(ShopConfigLayer {
			i18n: Some(I18nConfigLayer {
				default_language,
				storage_key: var("GOLDSHOP_LANGUAGE_STORAGE_KEY"),
			}),
			paths: Some(PathsConfigLayer {
				state_dir: var("GOLDSHOP_STATE_DIR").map(PathBuf::from),
			}),
			logging: Some(LoggingConfigLayer {
				level: var("GOLDSHOP_LOG_LEVEL"),
				format,
			}),
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ShopConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Self::load_with(|name| std::env::var(name).ok())
	}
}

/// Values passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub default_language: Option<Language>,
	pub state_dir: Option<PathBuf>,
	pub log_level: Option<String>,
	pub log_format: Option<LogFormat>,
}

/// Command-line source; highest precedence.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ShopConfigLayer, ConfigError> {
		let o = self.overrides.clone();
		Ok(ShopConfigLayer {
			i18n: Some(I18nConfigLayer {
				default_language: o.default_language,
				storage_key: None,
			}),
			paths: Some(PathsConfigLayer {
				state_dir: o.state_dir,
			}),
			logging: Some(LoggingConfigLayer {
				level: o.log_level,
				format: o.log_format,
			}),
		})
	}
}
