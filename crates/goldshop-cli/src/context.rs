// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-invocation state shared by all commands.

use std::sync::Arc;

use goldshop_cli_config::ShopConfig;
use goldshop_common_i18n::Language;
use goldshop_ui_locale::{
	FilePreferenceStore, LanguageProvider, MemoryPreferenceStore, PreferenceStore, RecordingRoot,
};

pub struct CliContext {
	pub config: ShopConfig,
	pub provider: Arc<LanguageProvider>,
	pub root: Arc<RecordingRoot>,
	/// Emit JSON instead of human-readable text.
	pub json: bool,
}

impl CliContext {
	/// Build the session provider.
	///
	/// With `one_shot` set the provider runs on an in-memory store seeded with
	/// that language, so nothing the command does is persisted.
	pub fn new(config: ShopConfig, one_shot: Option<Language>, json: bool) -> Self {
		let store: Arc<dyn PreferenceStore> = match one_shot {
			Some(lang) => {
				tracing::debug!(language = %lang, "using one-shot language, preference file untouched");
				Arc::new(MemoryPreferenceStore::with_value(&config.i18n.storage_key, lang.code()))
			}
			None => Arc::new(FilePreferenceStore::new(config.preferences_file())),
		};
		let root = Arc::new(RecordingRoot::new());

		let provider = LanguageProvider::builder()
			.store(store)
			.root(root.clone())
			.default_language(config.i18n.default_language)
			.storage_key(config.i18n.storage_key.clone())
			.initialize();

		Self {
			config,
			provider: Arc::new(provider),
			root,
			json,
		}
	}
}
