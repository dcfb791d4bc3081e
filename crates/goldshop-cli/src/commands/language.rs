// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;

use clap::Subcommand;
use colored::Colorize;
use goldshop_common_i18n::{available_languages, Direction, Language};
use serde::Serialize;

use crate::context::CliContext;

#[derive(Debug, Clone, Subcommand)]
pub enum LanguageCommands {
	/// Show the active language and the root attributes it produces
	Show,
	/// Switch and persist the active language
	Set {
		/// Language code: en, fa or ar
		code: String,
	},
	/// List supported languages
	List,
	/// Forget the persisted choice and return to the default language
	Reset,
}

#[derive(Debug, Serialize)]
struct LanguageStatus {
	language: Language,
	direction: Direction,
	native_name: &'static str,
	default_language: Language,
	root: String,
}

/// Catalog key holding the display name of `language`.
pub fn name_key(language: Language) -> &'static str {
	match language {
		Language::En => "language.english",
		Language::Fa => "language.persian",
		Language::Ar => "language.arabic",
	}
}

pub fn run(cmd: LanguageCommands, ctx: &CliContext, out: &mut impl Write) -> anyhow::Result<()> {
	match cmd {
		LanguageCommands::Show => show(ctx, out),
		LanguageCommands::Set { code } => {
			let language = ctx.provider.set_language_code(&code)?;
			announce(ctx, language, out)
		}
		LanguageCommands::List => list(ctx, out),
		LanguageCommands::Reset => {
			ctx.provider.reset();
			announce(ctx, ctx.provider.current_language(), out)
		}
	}
}

fn show(ctx: &CliContext, out: &mut impl Write) -> anyhow::Result<()> {
	let provider = &ctx.provider;
	let language = provider.current_language();
	let status = LanguageStatus {
		language,
		direction: provider.direction(),
		native_name: language.info().native_name,
		default_language: provider.default_language(),
		root: provider.root_attributes().html_attributes(),
	};

	if ctx.json {
		writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
		return Ok(());
	}

	writeln!(
		out,
		"{}: {} ({})",
		provider.translate("settings.language").bold(),
		status.language.to_string().yellow(),
		status.native_name
	)?;
	writeln!(out, "direction: {}", status.direction)?;
	writeln!(out, "default: {}", status.default_language)?;
	writeln!(out, "root: {}", status.root.dimmed())?;
	Ok(())
}

fn announce(ctx: &CliContext, language: Language, out: &mut impl Write) -> anyhow::Result<()> {
	if ctx.json {
		writeln!(out, "{}", serde_json::json!({ "language": language, "direction": language.direction() }))?;
		return Ok(());
	}

	let name = ctx.provider.translate(name_key(language));
	writeln!(
		out,
		"{}",
		ctx.provider.translate_fmt("language.changed", &[("language", name)])
	)?;
	Ok(())
}

fn list(ctx: &CliContext, out: &mut impl Write) -> anyhow::Result<()> {
	let current = ctx.provider.current_language();
	let languages = available_languages();

	if ctx.json {
		writeln!(out, "{}", serde_json::to_string_pretty(&languages)?)?;
		return Ok(());
	}

	for info in languages {
		let marker = if info.language == current { "*" } else { " " };
		writeln!(
			out,
			"{marker} {}  {:<8} {:<8} {}",
			info.code,
			info.english_name,
			info.direction.as_str(),
			info.native_name
		)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::test_support;

	fn output(cmd: LanguageCommands, ctx: &CliContext) -> String {
		colored::control::set_override(false);
		let mut buf = Vec::new();
		run(cmd, ctx, &mut buf).unwrap();
		String::from_utf8(buf).unwrap()
	}

	#[test]
	fn test_set_announces_in_new_language() {
		let temp_dir = tempfile::tempdir().unwrap();
		let ctx = CliContext::new(test_support::config(temp_dir.path()), None, false);

		let out = output(LanguageCommands::Set { code: "en".to_string() }, &ctx);
		assert_eq!(out, "Language changed to English\n");
		assert_eq!(ctx.root.current().unwrap().html_attributes(), "lang=\"en\" dir=\"ltr\"");

		let out = output(LanguageCommands::Set { code: "fa".to_string() }, &ctx);
		assert_eq!(out, "زبان به فارسی تغییر کرد\n");
	}

	#[test]
	fn test_set_rejects_unknown_code() {
		let temp_dir = tempfile::tempdir().unwrap();
		let ctx = CliContext::new(test_support::config(temp_dir.path()), None, false);
		let mut buf = Vec::new();
		let err = run(LanguageCommands::Set { code: "xx".to_string() }, &ctx, &mut buf).unwrap_err();
		assert_eq!(err.to_string(), "unsupported language code 'xx'");
		assert_eq!(ctx.provider.current_language(), Language::Fa);
	}

	#[test]
	fn test_show_json() {
		let temp_dir = tempfile::tempdir().unwrap();
		let ctx = CliContext::new(test_support::config(temp_dir.path()), Some(Language::Ar), true);
		let out = output(LanguageCommands::Show, &ctx);
		let value: serde_json::Value = serde_json::from_str(&out).unwrap();
		assert_eq!(value["language"], "ar");
		assert_eq!(value["direction"], "rtl");
		assert_eq!(value["root"], "lang=\"ar\" dir=\"rtl\"");
	}

	#[test]
	fn test_list_marks_current() {
		let temp_dir = tempfile::tempdir().unwrap();
		let ctx = CliContext::new(test_support::config(temp_dir.path()), Some(Language::En), false);
		let out = output(LanguageCommands::List, &ctx);
		let lines: Vec<_> = out.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[0].starts_with("* en"));
		assert!(lines[1].starts_with("  fa"));
	}

	#[test]
	fn test_reset_returns_to_default() {
		let temp_dir = tempfile::tempdir().unwrap();
		let ctx = CliContext::new(test_support::config(temp_dir.path()), None, false);
		ctx.provider.set_language(Language::En);

		let out = output(LanguageCommands::Reset, &ctx);
		assert_eq!(ctx.provider.current_language(), Language::Fa);
		assert_eq!(out, "زبان به فارسی تغییر کرد\n");
	}
}
