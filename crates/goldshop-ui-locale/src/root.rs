// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The document root: the single place where `lang` and `dir` are applied.
//!
//! Descendant layout inherits direction from the root, so no component
//! re-derives it from a language code on its own.

use std::fmt;

use goldshop_common_i18n::{Direction, Language};
use parking_lot::RwLock;
use serde::Serialize;

/// The `lang`/`dir` pair applied to the document root.
///
/// Only constructible from a [`Language`], so `dir` always matches `lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootAttributes {
	lang: Language,
	dir: Direction,
}

impl RootAttributes {
	pub const fn for_language(lang: Language) -> Self {
		Self {
			lang,
			dir: lang.direction(),
		}
	}

	pub const fn lang(&self) -> Language {
		self.lang
	}

	pub const fn dir(&self) -> Direction {
		self.dir
	}

	/// `lang="fa" dir="rtl"`
	pub fn html_attributes(&self) -> String {
		format!("lang=\"{}\" dir=\"{}\"", self.lang.code(), self.dir.as_str())
	}
}

impl fmt::Display for RootAttributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.html_attributes())
	}
}

/// Sink for root-level language and direction attributes.
///
/// `apply` may read the provider (e.g. to render a translated title) but
/// must not call `set_language` or `reset`.
pub trait DocumentRoot: Send + Sync {
	fn apply(&self, attrs: RootAttributes);
}

/// Keeps the most recently applied attributes in memory.
#[derive(Debug, Default)]
pub struct RecordingRoot {
	state: RwLock<RecordingState>,
}

#[derive(Debug, Default)]
struct RecordingState {
	current: Option<RootAttributes>,
	applied: usize,
}

impl RecordingRoot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attributes currently on the root, `None` before the first apply.
	pub fn current(&self) -> Option<RootAttributes> {
		self.state.read().current
	}

	/// How many times attributes have been applied.
	pub fn apply_count(&self) -> usize {
		self.state.read().applied
	}
}

impl DocumentRoot for RecordingRoot {
	fn apply(&self, attrs: RootAttributes) {
		let mut state = self.state.write();
		state.current = Some(attrs);
		state.applied += 1;
	}
}

/// Renders the `<html>` opening tag of a server-rendered shell.
#[derive(Debug)]
pub struct HtmlRoot {
	attrs: RwLock<RootAttributes>,
	extra_class: Option<String>,
}

impl HtmlRoot {
	pub fn new(initial: Language) -> Self {
		Self {
			attrs: RwLock::new(RootAttributes::for_language(initial)),
			extra_class: None,
		}
	}

	/// Add a class to the tag. `rtl`/`ltr` is always appended so stylesheets
	/// without `:dir()` support can still mirror layout.
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.extra_class = Some(class.into());
		self
	}

	pub fn open_tag(&self) -> String {
		let attrs = *self.attrs.read();
		let class = match &self.extra_class {
			Some(extra) => format!("{extra} {}", attrs.dir()),
			None => attrs.dir().to_string(),
		};
		format!("<html {} class=\"{class}\">", attrs.html_attributes())
	}
}

impl DocumentRoot for HtmlRoot {
	fn apply(&self, attrs: RootAttributes) {
		*self.attrs.write() = attrs;
	}
}

/// Discards every apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRoot;

impl DocumentRoot for NoopRoot {
	fn apply(&self, _attrs: RootAttributes) {}
}
