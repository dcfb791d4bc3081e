// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A partial configuration as read from one source.

use serde::{Deserialize, Serialize};

use crate::sections::{I18nConfigLayer, LoggingConfigLayer, PathsConfigLayer};

/// Mirrors the TOML file layout:
///
/// ```toml
/// [i18n]
/// default_language = "fa"
/// storage_key = "language"
///
/// [paths]
/// state_dir = "/var/lib/goldshop"
///
/// [logging]
/// level = "info"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShopConfigLayer {
	pub i18n: Option<I18nConfigLayer>,
	pub paths: Option<PathsConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl ShopConfigLayer {
	/// Overlay `other` on top of `self`; set values in `other` win.
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
		merge_section(&mut self.paths, other.paths, PathsConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T: Default>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	if let Some(other) = other {
		merge(base.get_or_insert_with(T::default), other);
	}
}
