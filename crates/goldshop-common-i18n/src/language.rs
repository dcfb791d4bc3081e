// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported languages and their text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language used when nothing else has been chosen.
pub const DEFAULT_LANGUAGE: Language = Language::Fa;

/// A language the UI is localized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	En,
	Fa,
	Ar,
}

/// Text-flow orientation. Obtained from a [`Language`], never set on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

/// Display metadata for a language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
	pub language: Language,
	pub code: &'static str,
	/// Name in the language itself, e.g. "فارسی"
	pub native_name: &'static str,
	pub english_name: &'static str,
	pub direction: Direction,
}

/// Error returned when parsing a language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl Language {
	/// Every supported language, in selector order.
	pub const ALL: [Language; 3] = [Language::En, Language::Fa, Language::Ar];

	/// ISO 639-1 code.
	pub const fn code(self) -> &'static str {
		match self {
			Language::En => "en",
			Language::Fa => "fa",
			Language::Ar => "ar",
		}
	}

	/// Exact match on a lowercase code. Use [`crate::resolve_language`] for
	/// lenient parsing of persisted or user-supplied values.
	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"en" => Some(Language::En),
			"fa" => Some(Language::Fa),
			"ar" => Some(Language::Ar),
			_ => None,
		}
	}

	pub const fn direction(self) -> Direction {
		match self {
			Language::En => Direction::Ltr,
			Language::Fa | Language::Ar => Direction::Rtl,
		}
	}

	pub const fn is_rtl(self) -> bool {
		matches!(self.direction(), Direction::Rtl)
	}

	pub const fn info(self) -> LanguageInfo {
		let (native_name, english_name) = match self {
			Language::En => ("English", "English"),
			Language::Fa => ("فارسی", "Persian"),
			Language::Ar => ("العربية", "Arabic"),
		};
		LanguageInfo {
			language: self,
			code: self.code(),
			native_name,
			english_name,
			direction: self.direction(),
		}
	}
}

impl Default for Language {
	fn default() -> Self {
		DEFAULT_LANGUAGE
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.code())
	}
}

impl FromStr for Language {
	type Err = UnsupportedLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Language::from_code(&s.trim().to_ascii_lowercase())
			.ok_or_else(|| UnsupportedLanguage(s.to_string()))
	}
}

impl Direction {
	pub const fn of(language: Language) -> Self {
		language.direction()
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	pub const fn is_rtl(self) -> bool {
		matches!(self, Direction::Rtl)
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

/// Metadata for every supported language.
pub fn available_languages() -> Vec<LanguageInfo> {
	Language::ALL.iter().map(|l| l.info()).collect()
}

/// Whether `code` names a supported language exactly.
pub fn is_supported(code: &str) -> bool {
	Language::from_code(code).is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_direction_follows_language() {
		assert_eq!(Language::En.direction(), Direction::Ltr);
		assert_eq!(Language::Fa.direction(), Direction::Rtl);
		assert_eq!(Language::Ar.direction(), Direction::Rtl);
	}

	#[test]
	fn test_code_roundtrip() {
		for lang in Language::ALL {
			assert_eq!(Language::from_code(lang.code()), Some(lang));
			assert_eq!(lang.code().parse::<Language>(), Ok(lang));
		}
	}

	#[test]
	fn test_from_str_is_lenient_on_case_and_whitespace() {
		assert_eq!(" FA ".parse::<Language>(), Ok(Language::Fa));
		assert_eq!("En".parse::<Language>(), Ok(Language::En));
	}

	#[test]
	fn test_from_str_rejects_unknown() {
		let err = "fr".parse::<Language>().unwrap_err();
		assert_eq!(err, UnsupportedLanguage("fr".to_string()));
		assert_eq!(err.to_string(), "unsupported language code 'fr'");
	}

	#[test]
	fn test_default_is_persian() {
		assert_eq!(Language::default(), Language::Fa);
		assert!(Language::default().is_rtl());
	}

	#[test]
	fn test_serde_uses_codes() {
		assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
		assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
		let lang: Language = serde_json::from_str("\"en\"").unwrap();
		assert_eq!(lang, Language::En);
		assert!(serde_json::from_str::<Language>("\"de\"").is_err());
	}

	#[test]
	fn test_available_languages() {
		let infos = available_languages();
		assert_eq!(infos.len(), 3);
		let fa = infos.iter().find(|i| i.code == "fa").unwrap();
		assert_eq!(fa.native_name, "فارسی");
		assert_eq!(fa.direction, Direction::Rtl);
	}

	#[test]
	fn test_is_supported() {
		assert!(is_supported("en"));
		assert!(is_supported("ar"));
		assert!(!is_supported("EN"));
		assert!(!is_supported(""));
	}
}
