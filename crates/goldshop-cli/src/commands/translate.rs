// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;
use std::io::Write;

use clap::Args;

use crate::context::CliContext;

#[derive(Debug, Clone, Args)]
pub struct TranslateArgs {
	/// One or more catalog keys, e.g. nav.dashboard
	#[arg(required = true)]
	pub keys: Vec<String>,

	/// Placeholder value as name=value; may be repeated
	#[arg(long = "arg", value_parser = parse_placeholder)]
	pub args: Vec<(String, String)>,

	/// Render ASCII digits in the active language's digit set
	#[arg(long)]
	pub native_digits: bool,
}

fn parse_placeholder(s: &str) -> Result<(String, String), String> {
	let (name, value) = s
		.split_once('=')
		.ok_or_else(|| format!("expected name=value, got '{s}'"))?;
	if name.is_empty() {
		return Err(format!("placeholder name is empty in '{s}'"));
	}
	Ok((name.to_string(), value.to_string()))
}

pub fn run(args: TranslateArgs, ctx: &CliContext, out: &mut impl Write) -> anyhow::Result<()> {
	let provider = &ctx.provider;
	let placeholders: Vec<(&str, &str)> = args
		.args
		.iter()
		.map(|(k, v)| (k.as_str(), v.as_str()))
		.collect();

	let rendered: Vec<(&str, String)> = args
		.keys
		.iter()
		.map(|key| {
			let text = provider.translate_fmt(key, &placeholders);
			let text = if args.native_digits {
				provider.localize_digits(&text)
			} else {
				text
			};
			(key.as_str(), text)
		})
		.collect();

	if ctx.json {
		let map: BTreeMap<&str, &str> = rendered.iter().map(|(k, v)| (*k, v.as_str())).collect();
		writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
		return Ok(());
	}

	for (_, text) in rendered {
		writeln!(out, "{text}")?;
	}
	Ok(())
}
