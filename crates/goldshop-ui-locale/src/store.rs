// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Durable client-local key/value storage for user preferences.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::StoreError;

/// A small string key/value store that survives restarts.
///
/// Writes run while the provider serializes language switches, so an
/// implementation must not switch language itself.
pub trait PreferenceStore: Send + Sync {
	fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
	fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
	fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store. Survives provider re-initialization, not the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	values: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with `key` already set, e.g. to simulate a stale or corrupted value.
	pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
		let store = Self::new();
		store.values.write().insert(key.into(), value.into());
		store
	}
}

impl PreferenceStore for MemoryPreferenceStore {
	fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.values.read().get(key).cloned())
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
		self.values.write().insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StoreError> {
		self.values.write().remove(key);
		Ok(())
	}
}

/// JSON-object file store, e.g. `~/.local/state/goldshop/preferences.json`.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FilePreferenceStore {
	path: PathBuf,
	lock: RwLock<()>,
}

impl FilePreferenceStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: RwLock::new(()),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "preference file not found");
			return Ok(BTreeMap::new());
		}

		let contents = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
			path: self.path.clone(),
			source,
		})?;
		if contents.trim().is_empty() {
			return Ok(BTreeMap::new());
		}

		serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
			path: self.path.clone(),
			source,
		})
	}

	fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
		let io_err = |source| StoreError::Io {
			path: self.path.clone(),
			source,
		};

		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).map_err(io_err)?;
		}

		let json = serde_json::to_string_pretty(values).map_err(|source| StoreError::Malformed {
			path: self.path.clone(),
			source,
		})?;

		let tmp_path = self.path.with_extension("json.tmp");
		std::fs::write(&tmp_path, json).map_err(io_err)?;

		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			let perms = std::fs::Permissions::from_mode(0o600);
			std::fs::set_permissions(&tmp_path, perms).map_err(io_err)?;
		}

		std::fs::rename(&tmp_path, &self.path).map_err(io_err)?;

		debug!(path = %self.path.display(), entries = values.len(), "saved preference file");
		Ok(())
	}

	/// Existing contents for a read-modify-write. A corrupt file is replaced
	/// rather than blocking every future save.
	fn read_for_update(&self) -> Result<BTreeMap<String, String>, StoreError> {
		match self.read_all() {
			Ok(values) => Ok(values),
			Err(StoreError::Malformed { path, source }) => {
				warn!(path = %path.display(), error = %source, "discarding malformed preference file");
				Ok(BTreeMap::new())
			}
			Err(e) => Err(e),
		}
	}
}

impl PreferenceStore for FilePreferenceStore {
	fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
		let _guard = self.lock.read();
		Ok(self.read_all()?.remove(key))
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
		let _guard = self.lock.write();
		let mut values = self.read_for_update()?;
		values.insert(key.to_string(), value.to_string());
		self.write_all(&values)
	}

	fn remove(&self, key: &str) -> Result<(), StoreError> {
		let _guard = self.lock.write();
		let mut values = self.read_for_update()?;
		if values.remove(key).is_none() {
			return Ok(());
		}
		self.write_all(&values)
	}
}
