// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language resolution logic.

use crate::language::Language;

/// Resolve the effective language from a persisted preference and a default.
///
/// Resolution order (highest to lowest priority):
/// 1. Persisted preference, if it names a supported language
/// 2. `default`
///
/// The persisted value is trimmed and lowercased, and a region suffix is
/// ignored (`fa-IR` and `fa_IR` both resolve to Persian). Anything else,
/// including an empty string, silently resolves to `default`.
///
/// # Example
///
/// ```
/// use goldshop_common_i18n::{resolve_language, Language};
///
/// assert_eq!(resolve_language(Some("en"), Language::Fa), Language::En);
/// assert_eq!(resolve_language(Some("ar-SA"), Language::Fa), Language::Ar);
/// assert_eq!(resolve_language(None, Language::Fa), Language::Fa);
/// assert_eq!(resolve_language(Some("klingon"), Language::Fa), Language::Fa);
/// ```
pub fn resolve_language(persisted: Option<&str>, default: Language) -> Language {
	let Some(raw) = persisted else {
		return default;
	};

	match parse_lenient(raw) {
		Some(language) => language,
		None => {
			tracing::debug!(value = %raw, default = %default, "ignoring unrecognized language value");
			default
		}
	}
}

fn parse_lenient(raw: &str) -> Option<Language> {
	let primary = raw.trim().split(['-', '_']).next()?.to_ascii_lowercase();
	Language::from_code(&primary)
}
