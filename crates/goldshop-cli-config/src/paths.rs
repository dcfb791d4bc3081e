// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// File name of the preference store inside the state directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Resolved XDG paths for the gold-shop manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdgPaths {
	/// User config file: ~/.config/goldshop/config.toml
	pub user_config_file: PathBuf,
	/// State directory: ~/.local/state/goldshop/
	pub state_dir: PathBuf,
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_STATE_HOME or ~/.local/state
pub fn resolve_xdg_paths() -> Result<XdgPaths, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let state_home = std::env::var_os("XDG_STATE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/state"));

	tracing::debug!(
		config_home = %config_home.display(),
		state_home = %state_home.display(),
		"resolved XDG paths"
	);

	Ok(XdgPaths {
		user_config_file: config_home.join("goldshop/config.toml"),
		state_dir: state_home.join("goldshop"),
	})
}

/// Preference file inside `state_dir`.
pub fn preferences_file(state_dir: &Path) -> PathBuf {
	state_dir.join(PREFERENCES_FILE)
}
