// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod catalog;
pub mod language;
pub mod translate;

pub use catalog::CatalogCommands;
pub use language::LanguageCommands;
pub use translate::TranslateArgs;
