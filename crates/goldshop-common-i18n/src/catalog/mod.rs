// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Compiled-in translation catalog and key lookup.

mod ar;
mod en;
mod fa;

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use crate::language::Language;

/// A flat table of `(key, text)` pairs for one language.
pub type Table = &'static [(&'static str, &'static str)];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
	let catalog = Catalog::from_tables(&[
		(Language::En, en::ENTRIES),
		(Language::Fa, fa::ENTRIES),
		(Language::Ar, ar::ENTRIES),
	]);
	tracing::debug!(
		languages = catalog.languages().count(),
		keys = catalog.len(Language::En),
		"assembled built-in translation catalog"
	);
	catalog
});

/// Immutable mapping of language → (key → localized text).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	tables: BTreeMap<Language, BTreeMap<&'static str, &'static str>>,
	/// Keys that appeared more than once in a source table; the last one wins.
	pub(crate) duplicates: Vec<(Language, &'static str)>,
}

impl Catalog {
	/// The catalog shipped with the application.
	pub fn builtin() -> &'static Catalog {
		&BUILTIN
	}

	/// Assemble a catalog from per-language tables.
	pub fn from_tables(tables: &[(Language, Table)]) -> Self {
		let mut catalog = Catalog::default();
		for (language, entries) in tables {
			let map = catalog.tables.entry(*language).or_default();
			for (key, text) in entries.iter() {
				if map.insert(*key, *text).is_some() {
					catalog.duplicates.push((*language, *key));
				}
			}
		}
		catalog
	}

	pub fn get(&self, language: Language, key: &str) -> Option<&'static str> {
		self.tables.get(&language)?.get(key).copied()
	}

	pub fn contains(&self, language: Language, key: &str) -> bool {
		self.get(language, key).is_some()
	}

	/// Look up `key`, falling back to the key itself when it is absent.
	pub fn translate<'a>(&self, language: Language, key: &'a str) -> &'a str {
		match self.get(language, key) {
			Some(text) => text,
			None => {
				tracing::debug!(language = %language, key = %key, "translation key not found");
				key
			}
		}
	}

	/// Like [`Catalog::translate`] and then substitutes `{name}` placeholders.
	///
	/// Placeholders without a matching argument are left as-is.
	pub fn translate_fmt(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
		interpolate(self.translate(language, key), args)
	}

	/// Languages that have a table, in declaration order.
	pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
		self.tables.keys().copied()
	}

	/// Sorted keys of one language.
	pub fn keys(&self, language: Language) -> impl Iterator<Item = &'static str> + '_ {
		self.tables.get(&language).into_iter().flat_map(|m| m.keys().copied())
	}

	/// `(key, text)` pairs of one language, sorted by key.
	pub fn entries(&self, language: Language) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
		self
			.tables
			.get(&language)
			.into_iter()
			.flat_map(|m| m.iter().map(|(k, v)| (*k, *v)))
	}

	pub fn len(&self, language: Language) -> usize {
		self.tables.get(&language).map_or(0, |m| m.len())
	}

	pub fn is_empty(&self) -> bool {
		self.tables.values().all(|m| m.is_empty())
	}

	/// Union of all keys across every language.
	pub fn all_keys(&self) -> BTreeSet<&'static str> {
		self.tables.values().flat_map(|m| m.keys().copied()).collect()
	}

	/// Distinct namespace prefixes (`nav`, `sms`, ...) across all keys.
	pub fn namespaces(&self) -> BTreeSet<&'static str> {
		self.all_keys().into_iter().filter_map(namespace_of).collect()
	}

	/// Keys of `language` whose namespace is `namespace`.
	pub fn keys_in_namespace<'a>(
		&'a self,
		language: Language,
		namespace: &'a str,
	) -> impl Iterator<Item = &'static str> + 'a {
		self
			.keys(language)
			.filter(move |key| namespace_of(key) == Some(namespace))
	}
}

/// The part of a key before its first dot, if the key is namespaced.
pub fn namespace_of(key: &str) -> Option<&str> {
	let (ns, rest) = key.split_once('.')?;
	if ns.is_empty() || rest.is_empty() {
		return None;
	}
	Some(ns)
}

/// Single pass over `template`: substituted values are never rescanned, and
/// placeholders without a matching argument are kept verbatim.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		let Some(close) = after.find('}') else {
			out.push_str(&rest[open..]);
			return out;
		};

		let name = &after[..close];
		if name.contains('{') {
			out.push('{');
			rest = after;
			continue;
		}

		match args.iter().find(|(arg, _)| *arg == name) {
			Some((_, value)) => out.push_str(value),
			None => out.push_str(&rest[open..open + close + 2]),
		}
		rest = &after[close + 1..];
	}

	out.push_str(rest);
	out
}

/// Translate `key` with the built-in catalog.
///
/// Returns the key itself when it has no entry for `language`.
pub fn t(language: Language, key: &str) -> &str {
	Catalog::builtin().translate(language, key)
}

/// Translate `key` with the built-in catalog and substitute placeholders.
pub fn t_fmt(language: Language, key: &str, args: &[(&str, &str)]) -> String {
	Catalog::builtin().translate_fmt(language, key, args)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_dashboard_is_language_dependent() {
		assert_eq!(t(Language::En, "nav.dashboard"), "Dashboard");
		assert_eq!(t(Language::Fa, "nav.dashboard"), "داشبورد");
		assert_eq!(t(Language::Ar, "nav.dashboard"), "لوحة التحكم");
	}

	#[test]
	fn test_missing_key_returns_key() {
		assert_eq!(t(Language::En, "this.key.does.not.exist"), "this.key.does.not.exist");
		assert_eq!(t(Language::Fa, "this.key.does.not.exist"), "this.key.does.not.exist");
	}

	#[test]
	fn test_t_fmt_substitutes_placeholders() {
		let s = t_fmt(Language::En, "common.page_of", &[("page", "2"), ("pages", "9")]);
		assert_eq!(s, "Page 2 of 9");

		let s = t_fmt(Language::Fa, "invoices.created", &[("number", "1402")]);
		assert_eq!(s, "فاکتور 1402 ایجاد شد");
	}

	#[test]
	fn test_t_fmt_leaves_unknown_placeholders() {
		let s = t_fmt(Language::En, "common.page_of", &[("page", "2")]);
		assert_eq!(s, "Page 2 of {pages}");
	}

	#[test]
	fn test_t_fmt_does_not_rewrite_argument_values() {
		let s = t_fmt(Language::En, "common.page_of", &[("page", "{pages}"), ("pages", "9")]);
		assert_eq!(s, "Page {pages} of 9");

		let s = t_fmt(Language::En, "common.page_of", &[("pages", "9"), ("page", "{pages}")]);
		assert_eq!(s, "Page {pages} of 9");
	}

	#[test]
	fn test_interpolate_handles_stray_braces() {
		assert_eq!(interpolate("{{a}", &[("a", "1")]), "{1");
		assert_eq!(interpolate("a } b {", &[("a", "1")]), "a } b {");
		assert_eq!(interpolate("{} {x}", &[("", "e"), ("x", "{x}")]), "e {x}");
		assert_eq!(interpolate("{name}!", &[("name", "طلا")]), "طلا!");
	}

	#[test]
	fn test_t_fmt_on_missing_key_returns_key() {
		assert_eq!(t_fmt(Language::Ar, "no.such.key", &[("x", "y")]), "no.such.key");
	}

	#[test]
	fn test_builtin_has_all_languages() {
		let langs: Vec<_> = Catalog::builtin().languages().collect();
		assert_eq!(langs, vec![Language::En, Language::Fa, Language::Ar]);
		assert!(Catalog::builtin().len(Language::En) >= 200);
	}

	#[test]
	fn test_namespaces() {
		let ns = Catalog::builtin().namespaces();
		for expected in ["nav", "common", "settings", "reports", "sms", "accounting", "rbac"] {
			assert!(ns.contains(expected), "missing namespace {expected}");
		}
	}

	#[test]
	fn test_keys_in_namespace() {
		let nav: Vec<_> = Catalog::builtin().keys_in_namespace(Language::En, "nav").collect();
		assert!(nav.contains(&"nav.dashboard"));
		assert!(nav.iter().all(|k| k.starts_with("nav.")));
	}

	#[test]
	fn test_namespace_of() {
		assert_eq!(namespace_of("sms.title"), Some("sms"));
		assert_eq!(namespace_of("inventory.categories.rings"), Some("inventory"));
		assert_eq!(namespace_of("title"), None);
		assert_eq!(namespace_of(".title"), None);
		assert_eq!(namespace_of("sms."), None);
	}

	#[test]
	fn test_from_tables_records_duplicates() {
		static TABLE: &[(&str, &str)] = &[("a.b", "one"), ("a.b", "two")];
		let catalog = Catalog::from_tables(&[(Language::En, TABLE)]);
		assert_eq!(catalog.get(Language::En, "a.b"), Some("two"));
		assert_eq!(catalog.duplicates, vec![(Language::En, "a.b")]);
	}

	#[test]
	fn test_empty_catalog() {
		let catalog = Catalog::default();
		assert!(catalog.is_empty());
		assert_eq!(catalog.translate(Language::Fa, "nav.dashboard"), "nav.dashboard");
		assert_eq!(catalog.keys(Language::Fa).count(), 0);
	}

	proptest! {
		#[test]
		fn unknown_keys_fall_back_to_themselves(key in "zz\\.[a-z_]{1,20}(\\.[a-z_]{1,10})?") {
			for lang in Language::ALL {
				prop_assert_eq!(t(lang, &key), key.as_str());
			}
		}

		#[test]
		fn known_keys_never_fall_back(idx in 0usize..200) {
			let catalog = Catalog::builtin();
			let key = catalog.keys(Language::En).nth(idx).unwrap();
			prop_assert_ne!(catalog.translate(Language::En, key), key);
		}
	}
}
