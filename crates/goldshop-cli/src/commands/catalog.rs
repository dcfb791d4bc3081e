// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;

use clap::Subcommand;
use colored::Colorize;
use goldshop_common_i18n::{namespace_of, Catalog, CatalogReport};

use crate::context::CliContext;

#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommands {
	/// Verify every language has every key and no empty values; exits non-zero on defects
	Check,
	/// List keys with their text in the active language
	Keys {
		/// Only keys in this namespace, e.g. nav
		#[arg(long)]
		namespace: Option<String>,
	},
	/// Key count per namespace
	Namespaces,
}

pub fn run(cmd: CatalogCommands, ctx: &CliContext, out: &mut impl Write) -> anyhow::Result<()> {
	let catalog = ctx.provider.catalog();
	match cmd {
		CatalogCommands::Check => check(catalog, ctx.json, out),
		CatalogCommands::Keys { namespace } => keys(ctx, namespace.as_deref(), out),
		CatalogCommands::Namespaces => namespaces(catalog, ctx.json, out),
	}
}

fn check(catalog: &Catalog, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
	let report = catalog.audit();

	if json {
		writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
	} else {
		print_report(catalog, &report, out)?;
	}

	report.into_result()?;
	Ok(())
}

fn print_report(catalog: &Catalog, report: &CatalogReport, out: &mut impl Write) -> anyhow::Result<()> {
	for missing in &report.missing {
		let langs: Vec<_> = missing.missing_from.iter().map(|l| l.code()).collect();
		writeln!(out, "{} {} (missing from {})", "missing".red(), missing.key, langs.join(", "))?;
	}
	for entry in &report.empty {
		writeln!(out, "{} {}/{}", "empty".red(), entry.language, entry.key)?;
	}
	for entry in &report.sentinel {
		writeln!(out, "{} {}/{}", "sentinel".red(), entry.language, entry.key)?;
	}
	for entry in &report.duplicates {
		writeln!(out, "{} {}/{}", "duplicate".yellow(), entry.language, entry.key)?;
	}
	for key in &report.malformed_keys {
		writeln!(out, "{} {}", "malformed".yellow(), key)?;
	}

	if report.is_clean() {
		let counts: Vec<String> = catalog
			.languages()
			.map(|l| format!("{l}={}", catalog.len(l)))
			.collect();
		writeln!(out, "{} {}", "ok".green(), counts.join(" "))?;
	} else {
		writeln!(out, "{} defect(s)", report.defect_count())?;
	}
	Ok(())
}

fn keys(ctx: &CliContext, namespace: Option<&str>, out: &mut impl Write) -> anyhow::Result<()> {
	let provider = &ctx.provider;
	let language = provider.current_language();
	let catalog = provider.catalog();

	let entries: Vec<(&str, &str)> = catalog
		.entries(language)
		.filter(|(key, _)| namespace.is_none() || namespace_of(key) == namespace)
		.collect();

	if ctx.json {
		let map: std::collections::BTreeMap<_, _> = entries.into_iter().collect();
		writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
		return Ok(());
	}

	for (key, text) in entries {
		writeln!(out, "{key}\t{text}")?;
	}
	Ok(())
}

fn namespaces(catalog: &Catalog, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
	let mut counts = std::collections::BTreeMap::new();
	for key in catalog.all_keys() {
		if let Some(ns) = namespace_of(key) {
			*counts.entry(ns).or_insert(0usize) += 1;
		}
	}

	if json {
		writeln!(out, "{}", serde_json::to_string_pretty(&counts)?)?;
		return Ok(());
	}

	for (ns, count) in counts {
		writeln!(out, "{ns:<12} {count}")?;
	}
	Ok(())
}
