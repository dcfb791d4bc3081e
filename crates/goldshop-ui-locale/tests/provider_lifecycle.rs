// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use goldshop_common_i18n::{Direction, Language};
use goldshop_ui_locale::{
	DocumentRoot, FilePreferenceStore, LanguageProvider, MemoryPreferenceStore, PreferenceStore,
	RecordingRoot, RootAttributes,
};
use proptest::prelude::*;

fn file_session(path: &std::path::Path) -> (LanguageProvider, Arc<RecordingRoot>) {
	let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::new(path));
	let root = Arc::new(RecordingRoot::new());
	let provider = LanguageProvider::initialize(store, root.clone() as Arc<dyn DocumentRoot>);
	(provider, root)
}

fn language_strategy() -> impl Strategy<Value = Language> {
	prop_oneof![Just(Language::En), Just(Language::Fa), Just(Language::Ar)]
}

#[test]
fn test_fresh_install_defaults_to_persian_rtl() {
	let temp_dir = tempfile::tempdir().unwrap();
	let (provider, root) = file_session(&temp_dir.path().join("preferences.json"));

	assert_eq!(provider.current_language(), Language::Fa);
	assert_eq!(provider.direction(), Direction::Rtl);
	assert_eq!(root.current().unwrap().html_attributes(), "lang=\"fa\" dir=\"rtl\"");
}

#[test]
fn test_same_key_different_language() {
	let temp_dir = tempfile::tempdir().unwrap();
	let (provider, _) = file_session(&temp_dir.path().join("preferences.json"));

	provider.set_language(Language::En);
	assert_eq!(provider.translate("nav.dashboard"), "Dashboard");

	provider.set_language(Language::Fa);
	assert_eq!(provider.translate("nav.dashboard"), "داشبورد");
}

#[test]
fn test_persistence_survives_restart() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("state/preferences.json");

	{
		let (provider, _) = file_session(&path);
		assert_eq!(provider.current_language(), Language::Fa);
		provider.set_language(Language::Ar);
		provider.set_language(Language::En);
	}

	let (restarted, root) = file_session(&path);
	assert_eq!(restarted.current_language(), Language::En);
	assert_eq!(restarted.direction(), Direction::Ltr);
	assert_eq!(root.current(), Some(RootAttributes::for_language(Language::En)));
}

#[test]
fn test_corrupt_preference_file_falls_back_to_default() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("preferences.json");
	std::fs::write(&path, "{\"language\": 42").unwrap();

	let (provider, _) = file_session(&path);
	assert_eq!(provider.current_language(), Language::Fa);

	provider.set_language(Language::Ar);
	let (restarted, _) = file_session(&path);
	assert_eq!(restarted.current_language(), Language::Ar);
}

#[test]
fn test_unrecognized_persisted_value_falls_back_to_default() {
	let store = Arc::new(MemoryPreferenceStore::with_value("language", "english"));
	let provider = LanguageProvider::initialize(store, Arc::new(RecordingRoot::new()));
	assert_eq!(provider.current_language(), Language::Fa);
}

#[test]
fn test_set_language_twice_is_idempotent() {
	let once_store = Arc::new(MemoryPreferenceStore::new());
	let once_root = Arc::new(RecordingRoot::new());
	let once = LanguageProvider::initialize(once_store.clone(), once_root.clone());
	once.set_language(Language::En);

	let twice_store = Arc::new(MemoryPreferenceStore::new());
	let twice_root = Arc::new(RecordingRoot::new());
	let twice = LanguageProvider::initialize(twice_store.clone(), twice_root.clone());
	twice.set_language(Language::En);
	twice.set_language(Language::En);

	assert_eq!(once.current_language(), twice.current_language());
	assert_eq!(once.direction(), twice.direction());
	assert_eq!(once_root.current(), twice_root.current());
	assert_eq!(
		once_store.load("language").unwrap(),
		twice_store.load("language").unwrap()
	);
	assert_eq!(once.translate("nav.reports"), twice.translate("nav.reports"));
}

#[test]
fn test_missing_key_is_shown_raw() {
	let provider = LanguageProvider::builder().initialize();
	for lang in Language::ALL {
		provider.set_language(lang);
		let shown = provider.translate("this.key.does.not.exist");
		assert_eq!(shown, "this.key.does.not.exist");
		assert!(!shown.contains("MISSING"));
	}
}

proptest! {
	#[test]
	fn direction_and_root_always_match_language(steps in prop::collection::vec(language_strategy(), 0..20)) {
		let root = Arc::new(RecordingRoot::new());
		let provider = LanguageProvider::initialize(Arc::new(MemoryPreferenceStore::new()), root.clone());

		for lang in steps {
			provider.set_language(lang);
			let current = provider.current_language();
			let expected = match current {
				Language::Fa | Language::Ar => Direction::Rtl,
				Language::En => Direction::Ltr,
			};
			prop_assert_eq!(current, lang);
			prop_assert_eq!(provider.direction(), expected);
			prop_assert_eq!(root.current(), Some(RootAttributes::for_language(current)));
		}
	}

	#[test]
	fn last_choice_wins_after_restart(steps in prop::collection::vec(language_strategy(), 1..10)) {
		let store = Arc::new(MemoryPreferenceStore::new());
		let provider = LanguageProvider::initialize(store.clone(), Arc::new(RecordingRoot::new()));
		for lang in &steps {
			provider.set_language(*lang);
		}

		let restarted = LanguageProvider::initialize(store, Arc::new(RecordingRoot::new()));
		prop_assert_eq!(restarted.current_language(), *steps.last().unwrap());
	}
}
