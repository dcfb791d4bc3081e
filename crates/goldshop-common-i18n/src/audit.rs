// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Completeness checks over a [`Catalog`].
//!
//! A key present in one language and absent in another would show up at
//! runtime as the raw key, so these checks belong in tests and CI rather than
//! in the lookup path.

use serde::Serialize;

use crate::catalog::{namespace_of, Catalog};
use crate::language::Language;

/// Marker that must never reach rendered text.
pub const MISSING_SENTINEL: &str = "MISSING";

/// A key that exists for some languages but not for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
	pub key: &'static str,
	pub missing_from: Vec<Language>,
	pub present_in: Vec<Language>,
}

/// A single `(language, key)` entry flagged by the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryRef {
	pub language: Language,
	pub key: &'static str,
}

/// Result of [`Catalog::audit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
	pub missing: Vec<MissingKey>,
	pub empty: Vec<EntryRef>,
	pub sentinel: Vec<EntryRef>,
	pub duplicates: Vec<EntryRef>,
	pub malformed_keys: Vec<&'static str>,
}

/// Catalog defects, one variant per check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	#[error("{count} key(s) missing from at least one language, first: {first}")]
	MissingKeys { count: usize, first: &'static str },

	#[error("{count} empty translation(s), first: {first}")]
	EmptyValues { count: usize, first: &'static str },

	#[error("{count} translation(s) contain the 'MISSING' marker, first: {first}")]
	SentinelValues { count: usize, first: &'static str },

	#[error("{count} duplicate key(s), first: {first}")]
	DuplicateKeys { count: usize, first: &'static str },

	#[error("{count} key(s) not in '<namespace>.<name>' form, first: {first}")]
	MalformedKeys { count: usize, first: &'static str },
}

impl CatalogReport {
	pub fn is_clean(&self) -> bool {
		self.missing.is_empty()
			&& self.empty.is_empty()
			&& self.sentinel.is_empty()
			&& self.duplicates.is_empty()
			&& self.malformed_keys.is_empty()
	}

	/// Total number of findings.
	pub fn defect_count(&self) -> usize {
		self.missing.len()
			+ self.empty.len()
			+ self.sentinel.len()
			+ self.duplicates.len()
			+ self.malformed_keys.len()
	}

	/// First defect found, checks in the order they are declared.
	pub fn into_result(self) -> Result<(), CatalogError> {
		if let Some(first) = self.missing.first() {
			return Err(CatalogError::MissingKeys {
				count: self.missing.len(),
				first: first.key,
			});
		}
		if let Some(first) = self.empty.first() {
			return Err(CatalogError::EmptyValues {
				count: self.empty.len(),
				first: first.key,
			});
		}
		if let Some(first) = self.sentinel.first() {
			return Err(CatalogError::SentinelValues {
				count: self.sentinel.len(),
				first: first.key,
			});
		}
		if let Some(first) = self.duplicates.first() {
			return Err(CatalogError::DuplicateKeys {
				count: self.duplicates.len(),
				first: first.key,
			});
		}
		if let Some(&first) = self.malformed_keys.first() {
			return Err(CatalogError::MalformedKeys {
				count: self.malformed_keys.len(),
				first,
			});
		}
		Ok(())
	}
}

impl Catalog {
	/// Check every language against the union of all keys.
	///
	/// Audits against [`Language::ALL`], so a language with no table at all is
	/// reported as missing every key.
	pub fn audit(&self) -> CatalogReport {
		let mut report = CatalogReport::default();
		let all_keys = self.all_keys();

		for &key in &all_keys {
			let (present_in, missing_from): (Vec<Language>, Vec<Language>) =
				Language::ALL.iter().copied().partition(|lang| self.contains(*lang, key));
			if !missing_from.is_empty() {
				report.missing.push(MissingKey {
					key,
					missing_from,
					present_in,
				});
			}
			if namespace_of(key).is_none() {
				report.malformed_keys.push(key);
			}
		}

		for language in Language::ALL {
			for (key, text) in self.entries(language) {
				if text.trim().is_empty() {
					report.empty.push(EntryRef { language, key });
				} else if text.contains(MISSING_SENTINEL) {
					report.sentinel.push(EntryRef { language, key });
				}
			}
		}

		report.duplicates = self
			.duplicates
			.iter()
			.map(|&(language, key)| EntryRef { language, key })
			.collect();

		if report.is_clean() {
			tracing::debug!(keys = all_keys.len(), "catalog audit clean");
		} else {
			tracing::warn!(
				missing = report.missing.len(),
				empty = report.empty.len(),
				sentinel = report.sentinel.len(),
				duplicates = report.duplicates.len(),
				malformed = report.malformed_keys.len(),
				"catalog audit found defects"
			);
		}

		report
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	static EN: &[(&str, &str)] = &[("nav.home", "Home"), ("nav.back", "Back")];
	static FA: &[(&str, &str)] = &[("nav.home", "خانه")];
	static AR: &[(&str, &str)] = &[("nav.home", "الرئيسية"), ("nav.back", "رجوع")];

	#[test]
	fn test_builtin_catalog_is_clean() {
		let report = Catalog::builtin().audit();
		assert!(report.is_clean(), "{report:#?}");
		assert_eq!(Catalog::builtin().audit().into_result(), Ok(()));
	}

	#[test]
	fn test_reports_missing_key() {
		let catalog = Catalog::from_tables(&[(Language::En, EN), (Language::Fa, FA), (Language::Ar, AR)]);
		let report = catalog.audit();
		assert_eq!(
			report.missing,
			vec![MissingKey {
				key: "nav.back",
				missing_from: vec![Language::Fa],
				present_in: vec![Language::En, Language::Ar],
			}]
		);
		assert_eq!(
			report.into_result(),
			Err(CatalogError::MissingKeys {
				count: 1,
				first: "nav.back"
			})
		);
	}

	#[test]
	fn test_key_only_in_non_english_language_is_reported() {
		static FA_EXTRA: &[(&str, &str)] = &[("nav.home", "خانه"), ("nav.back", "بازگشت"), ("nav.extra", "اضافه")];
		let catalog = Catalog::from_tables(&[(Language::En, EN), (Language::Fa, FA_EXTRA), (Language::Ar, AR)]);
		let report = catalog.audit();
		assert_eq!(report.missing.len(), 1);
		assert_eq!(report.missing[0].key, "nav.extra");
		assert_eq!(report.missing[0].missing_from, vec![Language::En, Language::Ar]);
	}

	#[test]
	fn test_absent_language_table_misses_everything() {
		let catalog = Catalog::from_tables(&[(Language::En, EN), (Language::Ar, AR)]);
		let report = catalog.audit();
		assert_eq!(report.missing.len(), 2);
		assert!(report.missing.iter().all(|m| m.missing_from == vec![Language::Fa]));
	}

	#[test]
	fn test_reports_empty_and_sentinel_values() {
		static BAD: &[(&str, &str)] = &[("nav.home", "  "), ("nav.back", "MISSING: nav.back")];
		let catalog = Catalog::from_tables(&[(Language::En, EN), (Language::Fa, BAD), (Language::Ar, AR)]);
		let report = catalog.audit();
		assert_eq!(
			report.empty,
			vec![EntryRef {
				language: Language::Fa,
				key: "nav.home"
			}]
		);
		assert_eq!(
			report.sentinel,
			vec![EntryRef {
				language: Language::Fa,
				key: "nav.back"
			}]
		);
		assert!(matches!(report.into_result(), Err(CatalogError::EmptyValues { count: 1, .. })));
	}

	#[test]
	fn test_reports_malformed_and_duplicate_keys() {
		static ODD: &[(&str, &str)] = &[("title", "Title"), ("title", "Title again")];
		let catalog = Catalog::from_tables(&[(Language::En, ODD), (Language::Fa, ODD), (Language::Ar, ODD)]);
		let report = catalog.audit();
		assert_eq!(report.malformed_keys, vec!["title"]);
		assert_eq!(report.duplicates.len(), 3);
		assert_eq!(report.defect_count(), 4);
	}

	#[test]
	fn test_error_messages() {
		let err = CatalogError::MissingKeys {
			count: 3,
			first: "sms.title",
		};
		assert_eq!(
			err.to_string(),
			"3 key(s) missing from at least one language, first: sms.title"
		);
	}
}
