// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the gold-shop manager CLI.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides (`GOLDSHOP_*`)
//!
//! Precedence (highest to lowest):
//! 1. Command-line overrides
//! 2. Environment variables
//! 3. Config file (`~/.config/goldshop/config.toml` or `--config`)
//! 4. Built-in defaults

pub mod error;
pub mod layer;
pub mod paths;
pub mod sections;
pub mod sources;

use std::path::PathBuf;

use tracing::{debug, info};

pub use error::ConfigError;
pub use layer::ShopConfigLayer;
pub use paths::{preferences_file, resolve_xdg_paths, XdgPaths, PREFERENCES_FILE};
pub use sections::{I18nConfig, LogFormat, LoggingConfig, PathsConfig};
pub use sources::{CliOverrides, CliSource, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
	pub i18n: I18nConfig,
	pub paths: PathsConfig,
	pub logging: LoggingConfig,
}

impl ShopConfig {
	/// Location of the persisted language preference.
	pub fn preferences_file(&self) -> PathBuf {
		paths::preferences_file(&self.paths.state_dir)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// `config_file` replaces the user config file when given.
pub fn load_config(config_file: Option<PathBuf>, cli: CliOverrides) -> Result<ShopConfig, ConfigError> {
	let xdg = resolve_xdg_paths()?;
	let file = config_file.unwrap_or_else(|| xdg.user_config_file.clone());

	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(file)),
		Box::new(EnvSource),
		Box::new(CliSource::new(cli)),
	];

	load_from_sources(sources, xdg.state_dir)
}

/// Merge `sources` in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
	default_state_dir: PathBuf,
) -> Result<ShopConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ShopConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged, default_state_dir)
}

fn finalize(layer: ShopConfigLayer, default_state_dir: PathBuf) -> Result<ShopConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize()?;
	let paths = layer.paths.unwrap_or_default().finalize(default_state_dir);
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		default_language = %i18n.default_language,
		storage_key = %i18n.storage_key,
		state_dir = %paths.state_dir.display(),
		log_level = ?logging.level,
		"configuration loaded"
	);

	Ok(ShopConfig { i18n, paths, logging })
}
