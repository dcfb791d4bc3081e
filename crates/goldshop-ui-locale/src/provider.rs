// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The session-wide owner of the active language.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use goldshop_common_i18n::{resolve_language, Catalog, Direction, Language, DEFAULT_LANGUAGE};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::root::{DocumentRoot, NoopRoot, RootAttributes};
use crate::store::{MemoryPreferenceStore, PreferenceStore};

/// Preference key holding the language code.
pub const DEFAULT_STORAGE_KEY: &str = "language";

/// Emitted to subscribers after the active language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChange {
	pub previous: Language,
	pub current: Language,
}

impl LanguageChange {
	pub fn direction(&self) -> Direction {
		self.current.direction()
	}

	/// True when layout has to be mirrored, e.g. `en` → `fa`.
	pub fn direction_changed(&self) -> bool {
		self.previous.direction() != self.current.direction()
	}
}

/// Handle returned by [`LanguageProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&LanguageChange) + Send + Sync>;

/// Builder for [`LanguageProvider`]. Every field has a default.
pub struct LanguageProviderBuilder {
	store: Arc<dyn PreferenceStore>,
	root: Arc<dyn DocumentRoot>,
	catalog: &'static Catalog,
	default_language: Language,
	storage_key: String,
}

impl Default for LanguageProviderBuilder {
	fn default() -> Self {
		Self {
			store: Arc::new(MemoryPreferenceStore::new()),
			root: Arc::new(NoopRoot),
			catalog: Catalog::builtin(),
			default_language: DEFAULT_LANGUAGE,
			storage_key: DEFAULT_STORAGE_KEY.to_string(),
		}
	}
}

impl LanguageProviderBuilder {
	pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
		self.store = store;
		self
	}

	pub fn root(mut self, root: Arc<dyn DocumentRoot>) -> Self {
		self.root = root;
		self
	}

	pub fn catalog(mut self, catalog: &'static Catalog) -> Self {
		self.catalog = catalog;
		self
	}

	/// Language used when nothing valid is persisted.
	pub fn default_language(mut self, language: Language) -> Self {
		self.default_language = language;
		self
	}

	pub fn storage_key(mut self, key: impl Into<String>) -> Self {
		self.storage_key = key.into();
		self
	}

	/// Read the persisted preference, apply it to the root and return the
	/// provider.
	///
	/// This is the only way to obtain a provider, so nothing can translate
	/// before the persisted language is in effect.
	pub fn initialize(self) -> LanguageProvider {
		let persisted = match self.store.load(&self.storage_key) {
			Ok(value) => value,
			Err(e) => {
				warn!(key = %self.storage_key, error = %e, "failed to read language preference, using default");
				None
			}
		};
		let language = resolve_language(persisted.as_deref(), self.default_language);

		self.root.apply(RootAttributes::for_language(language));

		info!(
			language = %language,
			direction = %language.direction(),
			persisted = persisted.is_some(),
			"language provider initialized"
		);

		LanguageProvider {
			language: RwLock::new(language),
			commit: Mutex::new(()),
			default_language: self.default_language,
			storage_key: self.storage_key,
			store: self.store,
			root: self.root,
			catalog: self.catalog,
			listeners: RwLock::new(Vec::new()),
			next_subscription: AtomicU64::new(1),
		}
	}
}

/// Single source of truth for the active language of a session.
///
/// Share it as `Arc<LanguageProvider>`. Direction is never stored: it is
/// derived from the language on every read.
///
/// The language lock is only held to read or swap the value. Writes to the
/// store and the root happen under a separate commit lock that serializes
/// `set_language` and `reset`, so the store and root may read the provider
/// but must not switch language themselves.
pub struct LanguageProvider {
	language: RwLock<Language>,
	commit: Mutex<()>,
	default_language: Language,
	storage_key: String,
	store: Arc<dyn PreferenceStore>,
	root: Arc<dyn DocumentRoot>,
	catalog: &'static Catalog,
	listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
	next_subscription: AtomicU64,
}

impl fmt::Debug for LanguageProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LanguageProvider")
			.field("language", &*self.language.read())
			.field("default_language", &self.default_language)
			.field("storage_key", &self.storage_key)
			.field("listeners", &self.listeners.read().len())
			.finish_non_exhaustive()
	}
}

impl LanguageProvider {
	pub fn builder() -> LanguageProviderBuilder {
		LanguageProviderBuilder::default()
	}

	/// Initialize with the built-in catalog and default language.
	pub fn initialize(store: Arc<dyn PreferenceStore>, root: Arc<dyn DocumentRoot>) -> Self {
		Self::builder().store(store).root(root).initialize()
	}

	pub fn current_language(&self) -> Language {
		*self.language.read()
	}

	pub fn direction(&self) -> Direction {
		self.current_language().direction()
	}

	pub fn root_attributes(&self) -> RootAttributes {
		RootAttributes::for_language(self.current_language())
	}

	pub fn default_language(&self) -> Language {
		self.default_language
	}

	pub fn storage_key(&self) -> &str {
		&self.storage_key
	}

	pub fn catalog(&self) -> &'static Catalog {
		self.catalog
	}

	/// Switch the active language.
	///
	/// Persists the choice, applies `lang`/`dir` to the root and, if the
	/// language actually changed, notifies subscribers. A failed write is
	/// logged and does not undo the switch.
	pub fn set_language(&self, language: Language) {
		let previous = {
			let _commit = self.commit.lock();
			let previous = std::mem::replace(&mut *self.language.write(), language);

			if let Err(e) = self.store.save(&self.storage_key, language.code()) {
				warn!(language = %language, error = %e, "failed to persist language preference");
			}
			self.root.apply(RootAttributes::for_language(language));
			previous
		};

		if previous == language {
			debug!(language = %language, "language unchanged");
			return;
		}

		info!(from = %previous, to = %language, direction = %language.direction(), "language changed");
		self.notify(&LanguageChange {
			previous,
			current: language,
		});
	}

	/// Switch language from a user- or caller-supplied code.
	///
	/// An unsupported code is rejected and the current state is left
	/// untouched.
	pub fn set_language_code(&self, code: &str) -> Result<Language, ProviderError> {
		let language: Language = code.parse()?;
		self.set_language(language);
		Ok(language)
	}

	/// Forget the persisted preference and return to the default language.
	pub fn reset(&self) {
		let previous = {
			let _commit = self.commit.lock();
			let previous = std::mem::replace(&mut *self.language.write(), self.default_language);

			if let Err(e) = self.store.remove(&self.storage_key) {
				warn!(error = %e, "failed to clear language preference");
			}
			self.root.apply(RootAttributes::for_language(self.default_language));
			previous
		};

		if previous != self.default_language {
			self.notify(&LanguageChange {
				previous,
				current: self.default_language,
			});
		}
	}

	/// Look up `key` in the active language, falling back to the key itself.
	pub fn translate<'a>(&self, key: &'a str) -> &'a str {
		self.catalog.translate(self.current_language(), key)
	}

	/// Look up `key` and substitute `{name}` placeholders.
	pub fn translate_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		self.catalog.translate_fmt(self.current_language(), key, args)
	}

	/// Shape ASCII digits for the active language.
	pub fn localize_digits(&self, text: &str) -> String {
		goldshop_common_i18n::localize_digits(self.current_language(), text)
	}

	/// Register a callback run after every language change.
	///
	/// Callbacks run on the thread that called `set_language`, after the new
	/// state is visible, so they may call back into the provider.
	pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
	where
		F: Fn(&LanguageChange) + Send + Sync + 'static,
	{
		let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
		self.listeners.write().push((id, Arc::new(listener)));
		id
	}

	/// Remove a callback. Returns false if `id` was not registered.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut listeners = self.listeners.write();
		let before = listeners.len();
		listeners.retain(|(existing, _)| *existing != id);
		listeners.len() != before
	}

	fn notify(&self, change: &LanguageChange) {
		let listeners: Vec<Listener> = self.listeners.read().iter().map(|(_, l)| Arc::clone(l)).collect();
		for listener in listeners {
			listener(change);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::sync::{Mutex, Weak};
	use std::thread;
	use std::time::Duration;

	use once_cell::sync::OnceCell;

	use super::*;
	use crate::error::StoreError;
	use crate::root::RecordingRoot;

	struct FailingStore;

	impl PreferenceStore for FailingStore {
		fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
			Err(StoreError::Unavailable("disk on fire".to_string()))
		}

		fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
			Err(StoreError::Unavailable("disk on fire".to_string()))
		}

		fn remove(&self, _key: &str) -> Result<(), StoreError> {
			Err(StoreError::Unavailable("disk on fire".to_string()))
		}
	}

	fn provider_with(store: Arc<dyn PreferenceStore>) -> (LanguageProvider, Arc<RecordingRoot>) {
		let root = Arc::new(RecordingRoot::new());
		let provider = LanguageProvider::initialize(store, root.clone());
		(provider, root)
	}

	#[test]
	fn test_default_is_persian_rtl() {
		let (provider, root) = provider_with(Arc::new(MemoryPreferenceStore::new()));
		assert_eq!(provider.current_language(), Language::Fa);
		assert_eq!(provider.direction(), Direction::Rtl);
		assert_eq!(root.current(), Some(RootAttributes::for_language(Language::Fa)));
		assert_eq!(root.apply_count(), 1);
	}

	#[test]
	fn test_configured_default() {
		let provider = LanguageProvider::builder().default_language(Language::En).initialize();
		assert_eq!(provider.current_language(), Language::En);
		assert_eq!(provider.direction(), Direction::Ltr);
	}

	#[test]
	fn test_persisted_value_is_adopted() {
		let (provider, _) = provider_with(Arc::new(MemoryPreferenceStore::with_value("language", "ar")));
		assert_eq!(provider.current_language(), Language::Ar);
	}

	#[test]
	fn test_invalid_persisted_value_falls_back() {
		let (provider, _) = provider_with(Arc::new(MemoryPreferenceStore::with_value("language", "de")));
		assert_eq!(provider.current_language(), Language::Fa);
	}

	#[test]
	fn test_store_errors_degrade_silently() {
		let (provider, root) = provider_with(Arc::new(FailingStore));
		assert_eq!(provider.current_language(), Language::Fa);

		provider.set_language(Language::En);
		assert_eq!(provider.current_language(), Language::En);
		assert_eq!(root.current(), Some(RootAttributes::for_language(Language::En)));

		provider.reset();
		assert_eq!(provider.current_language(), Language::Fa);
	}

	#[test]
	fn test_custom_storage_key() {
		let store = Arc::new(MemoryPreferenceStore::with_value("ui.lang", "en"));
		let provider = LanguageProvider::builder()
			.store(store.clone())
			.storage_key("ui.lang")
			.initialize();
		assert_eq!(provider.current_language(), Language::En);

		provider.set_language(Language::Ar);
		assert_eq!(store.load("ui.lang").unwrap().as_deref(), Some("ar"));
		assert_eq!(store.load("language").unwrap(), None);
	}

	#[test]
	fn test_set_language_persists_and_applies_root() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let (provider, root) = provider_with(store.clone());

		provider.set_language(Language::En);

		assert_eq!(store.load("language").unwrap().as_deref(), Some("en"));
		assert_eq!(root.current(), Some(RootAttributes::for_language(Language::En)));
		assert_eq!(provider.direction(), Direction::Ltr);
	}

	#[test]
	fn test_set_language_code_rejects_unknown() {
		let (provider, root) = provider_with(Arc::new(MemoryPreferenceStore::new()));
		let err = provider.set_language_code("tlh").unwrap_err();
		assert!(matches!(err, ProviderError::UnsupportedLanguage(_)));
		assert_eq!(provider.current_language(), Language::Fa);
		assert_eq!(root.apply_count(), 1);

		assert_eq!(provider.set_language_code("AR").unwrap(), Language::Ar);
		assert_eq!(provider.current_language(), Language::Ar);
	}

	#[test]
	fn test_translate_follows_language() {
		let (provider, _) = provider_with(Arc::new(MemoryPreferenceStore::new()));
		provider.set_language(Language::En);
		assert_eq!(provider.translate("nav.dashboard"), "Dashboard");
		provider.set_language(Language::Fa);
		assert_eq!(provider.translate("nav.dashboard"), "داشبورد");
		assert_eq!(provider.translate("this.key.does.not.exist"), "this.key.does.not.exist");
	}

	#[test]
	fn test_translate_fmt_and_digits() {
		let (provider, _) = provider_with(Arc::new(MemoryPreferenceStore::new()));
		let text = provider.translate_fmt("common.weight_grams", &[("weight", "12.5")]);
		assert_eq!(provider.localize_digits(&text), "۱۲.۵ گرم");
	}

	#[test]
	fn test_subscribers_see_changes_once() {
		let (provider, _) = provider_with(Arc::new(MemoryPreferenceStore::new()));
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = seen.clone();
		provider.subscribe(move |change| sink.lock().unwrap().push(*change));

		provider.set_language(Language::En);
		provider.set_language(Language::En);
		provider.set_language(Language::Ar);

		let seen = seen.lock().unwrap();
		assert_eq!(
			*seen,
			vec![
				LanguageChange {
					previous: Language::Fa,
					current: Language::En
				},
				LanguageChange {
					previous: Language::En,
					current: Language::Ar
				},
			]
		);
		assert!(seen[0].direction_changed());
		assert!(seen[1].direction_changed());
	}

	#[test]
	fn test_subscriber_can_read_provider() {
		let provider = Arc::new(LanguageProvider::builder().initialize());
		let rendered = Arc::new(Mutex::new(String::new()));

		let weak = Arc::downgrade(&provider);
		let out = rendered.clone();
		provider.subscribe(move |_| {
			if let Some(p) = weak.upgrade() {
				*out.lock().unwrap() = p.translate("nav.settings").to_string();
			}
		});

		provider.set_language(Language::En);
		assert_eq!(*rendered.lock().unwrap(), "Settings");
	}

	#[test]
	fn test_unsubscribe() {
		let (provider, _) = provider_with(Arc::new(MemoryPreferenceStore::new()));
		let count = Arc::new(AtomicU64::new(0));
		let c = count.clone();
		let id = provider.subscribe(move |_| {
			c.fetch_add(1, Ordering::SeqCst);
		});

		provider.set_language(Language::En);
		assert!(provider.unsubscribe(id));
		assert!(!provider.unsubscribe(id));
		provider.set_language(Language::Ar);

		assert_eq!(count.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_reset_clears_preference() {
		let store = Arc::new(MemoryPreferenceStore::with_value("language", "en"));
		let (provider, root) = provider_with(store.clone());
		assert_eq!(provider.current_language(), Language::En);

		provider.reset();

		assert_eq!(provider.current_language(), Language::Fa);
		assert_eq!(store.load("language").unwrap(), None);
		assert_eq!(root.current(), Some(RootAttributes::for_language(Language::Fa)));
	}

	#[test]
	fn test_custom_catalog() {
		static TABLE: &[(&str, &str)] = &[("nav.dashboard", "Board")];
		static CATALOG: OnceCell<Catalog> = OnceCell::new();
		let catalog = CATALOG.get_or_init(|| Catalog::from_tables(&[(Language::En, TABLE)]));

		let provider = LanguageProvider::builder()
			.catalog(catalog)
			.default_language(Language::En)
			.initialize();
		assert_eq!(provider.translate("nav.dashboard"), "Board");
		assert_eq!(provider.translate("nav.settings"), "nav.settings");
	}

	/// Renders a translated title from inside `apply`, like a page shell would.
	#[derive(Default)]
	struct TitleRoot {
		provider: OnceCell<Weak<LanguageProvider>>,
		title: Mutex<Option<String>>,
	}

	impl DocumentRoot for TitleRoot {
		fn apply(&self, _attrs: RootAttributes) {
			if let Some(provider) = self.provider.get().and_then(Weak::upgrade) {
				*self.title.lock().unwrap() = Some(provider.translate("app.name").to_string());
			}
		}
	}

	#[test]
	fn test_root_may_read_provider_while_applying() {
		let root = Arc::new(TitleRoot::default());
		let provider = Arc::new(LanguageProvider::initialize(Arc::new(MemoryPreferenceStore::new()), root.clone()));
		let _ = root.provider.set(Arc::downgrade(&provider));

		let (tx, rx) = mpsc::channel();
		let worker = {
			let provider = provider.clone();
			thread::spawn(move || {
				provider.set_language(Language::En);
				let _ = tx.send(());
			})
		};

		rx.recv_timeout(Duration::from_secs(5))
			.expect("set_language blocked on a root that reads the provider");
		worker.join().unwrap();
		assert_eq!(root.title.lock().unwrap().as_deref(), Some("Gold Shop Manager"));
	}

	#[test]
	fn test_store_and_language_agree_after_concurrent_switches() {
		let store = Arc::new(MemoryPreferenceStore::new());
		let provider = Arc::new(LanguageProvider::initialize(store.clone(), Arc::new(NoopRoot)));

		let workers: Vec<_> = (0..8)
			.map(|i| {
				let provider = provider.clone();
				thread::spawn(move || {
					for n in 0..50 {
						match (i + n) % 3 {
							0 => provider.reset(),
							1 => provider.set_language(Language::En),
							_ => provider.set_language(Language::Ar),
						}
					}
				})
			})
			.collect();
		for worker in workers {
			worker.join().unwrap();
		}

		let persisted = store.load("language").unwrap();
		let expected = persisted
			.as_deref()
			.and_then(Language::from_code)
			.unwrap_or(provider.default_language());
		assert_eq!(provider.current_language(), expected);
	}
}
