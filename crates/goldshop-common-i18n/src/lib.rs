// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the gold-shop manager.
//!
//! This crate holds the compiled-in translation catalog for English, Persian
//! and Arabic, the lookup functions over it, and the language → text
//! direction mapping. Persian and Arabic are right-to-left.
//!
//! # Key Naming Convention
//!
//! Keys are flat, dot-namespaced identifiers grouped by feature module:
//! `nav.*`, `common.*`, `inventory.*`, `invoices.*`, `accounting.*`, `sms.*`,
//! `rbac.*`, `reports.*`, `settings.*` and so on. There is no nesting: the
//! whole key is looked up as one string.
//!
//! Example: `sms.title`
//!
//! # Example
//!
//! ```
//! use goldshop_common_i18n::{t, t_fmt, resolve_language, Direction, Language};
//!
//! // Simple translation
//! assert_eq!(t(Language::En, "nav.dashboard"), "Dashboard");
//!
//! // Missing keys fall back to the key itself
//! assert_eq!(t(Language::Fa, "no.such.key"), "no.such.key");
//!
//! // Translation with variables
//! let page = t_fmt(Language::En, "common.page_of", &[("page", "1"), ("pages", "4")]);
//! assert_eq!(page, "Page 1 of 4");
//!
//! // Direction comes from the language
//! assert_eq!(Language::Fa.direction(), Direction::Rtl);
//!
//! // Resolve a persisted preference
//! let lang = resolve_language(Some("ar"), Language::Fa);
//! assert_eq!(lang, Language::Ar);
//! ```

mod audit;
mod catalog;
mod digits;
mod language;
mod resolve;

pub use audit::{CatalogError, CatalogReport, EntryRef, MissingKey, MISSING_SENTINEL};
pub use catalog::{namespace_of, t, t_fmt, Catalog, Table};
pub use digits::{localize_digits, normalize_digits};
pub use language::{
	available_languages, is_supported, Direction, Language, LanguageInfo, UnsupportedLanguage,
};
pub use resolve::resolve_language;

pub use language::DEFAULT_LANGUAGE;
