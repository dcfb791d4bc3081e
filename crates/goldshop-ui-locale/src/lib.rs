// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Active-language state for the gold-shop UI.
//!
//! This crate provides:
//! - [`LanguageProvider`]: the session-wide owner of the active language, with
//!   `translate`, `set_language` and change subscriptions
//! - [`PreferenceStore`]: durable storage for the chosen language, with
//!   in-memory and JSON-file implementations
//! - [`DocumentRoot`]: the one sink for the root `lang`/`dir` attributes that
//!   drive RTL/LTR mirroring
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use goldshop_common_i18n::{Direction, Language};
//! use goldshop_ui_locale::{LanguageProvider, MemoryPreferenceStore, RecordingRoot};
//!
//! let store = Arc::new(MemoryPreferenceStore::new());
//! let root = Arc::new(RecordingRoot::new());
//! let provider = LanguageProvider::initialize(store.clone(), root.clone());
//!
//! assert_eq!(provider.current_language(), Language::Fa);
//! assert_eq!(provider.direction(), Direction::Rtl);
//!
//! provider.set_language(Language::En);
//! assert_eq!(provider.translate("nav.dashboard"), "Dashboard");
//! assert_eq!(root.current().unwrap().html_attributes(), "lang=\"en\" dir=\"ltr\"");
//!
//! // A restarted session picks up the persisted choice.
//! let restarted = LanguageProvider::initialize(store, root);
//! assert_eq!(restarted.current_language(), Language::En);
//! ```

pub mod error;
pub mod provider;
pub mod root;
pub mod store;

pub use error::{ProviderError, StoreError};
pub use provider::{
	LanguageChange, LanguageProvider, LanguageProviderBuilder, SubscriptionId, DEFAULT_STORAGE_KEY,
};
pub use root::{DocumentRoot, HtmlRoot, NoopRoot, RecordingRoot, RootAttributes};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
