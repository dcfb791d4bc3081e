// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for preference storage and the language provider.

use std::path::PathBuf;

/// Errors from a [`crate::PreferenceStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	/// I/O error reading or writing the preference file
	#[error("I/O error on {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The preference file is not a JSON object of strings
	#[error("malformed preference file {path}: {source}")]
	Malformed {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// Store could not be used at all (e.g. poisoned backend)
	#[error("preference store unavailable: {0}")]
	Unavailable(String),
}

/// Errors surfaced by [`crate::LanguageProvider`].
///
/// Lookups and typed language changes never fail; only string input from
/// outside the type system can.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
	#[error(transparent)]
	UnsupportedLanguage(#[from] goldshop_common_i18n::UnsupportedLanguage),
}
