// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `goldshop` command-line front end for the localization core.

mod commands;
mod context;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use goldshop_cli_config::{CliOverrides, LogFormat, LoggingConfig};
use goldshop_common_i18n::Language;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{CatalogCommands, LanguageCommands, TranslateArgs};
use context::CliContext;

/// Gold-shop manager: language and translation catalog tools.
#[derive(Parser, Debug)]
#[command(name = "goldshop", about = "Gold-shop manager localization tools", version)]
struct Cli {
	/// Config file to use instead of ~/.config/goldshop/config.toml
	#[arg(long, global = true, env = "GOLDSHOP_CONFIG")]
	config: Option<PathBuf>,

	/// Use this language for this invocation only, without persisting it
	#[arg(long, global = true)]
	lang: Option<Language>,

	/// Language used when no preference has been saved
	#[arg(long, global = true)]
	default_language: Option<Language>,

	/// Directory holding preferences.json
	#[arg(long, global = true)]
	state_dir: Option<PathBuf>,

	/// Log filter, e.g. info or goldshop_ui_locale=debug
	#[arg(long, global = true)]
	log_level: Option<String>,

	/// Log output format
	#[arg(long, global = true)]
	log_format: Option<LogFormat>,

	/// Print JSON instead of text
	#[arg(long, global = true)]
	json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show, switch or list the active language
	#[command(subcommand)]
	Language(LanguageCommands),
	/// Look up catalog keys in the active language
	Translate(TranslateArgs),
	/// Inspect and verify the translation catalog
	#[command(subcommand)]
	Catalog(CatalogCommands),
	/// Show version information
	Version,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	if let Command::Version = cli.command {
		println!("goldshop {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	let config = goldshop_cli_config::load_config(
		cli.config,
		CliOverrides {
			default_language: cli.default_language,
			state_dir: cli.state_dir,
			log_level: cli.log_level,
			log_format: cli.log_format,
		},
	)?;

	init_tracing(&config.logging);

	tracing::debug!(
		preferences = %config.preferences_file().display(),
		one_shot = ?cli.lang,
		"starting goldshop"
	);

	let ctx = CliContext::new(config, cli.lang, cli.json);
	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	match cli.command {
		Command::Language(cmd) => commands::language::run(cmd, &ctx, &mut out)?,
		Command::Translate(args) => commands::translate::run(args, &ctx, &mut out)?,
		Command::Catalog(cmd) => commands::catalog::run(cmd, &ctx, &mut out)?,
		Command::Version => {}
	}

	out.flush()?;
	Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
	let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
	let filter = tracing_subscriber::EnvFilter::new(logging.filter_directive(rust_log.as_deref()));
	let registry = tracing_subscriber::registry().with(filter);

	match logging.format {
		LogFormat::Json => registry
			.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
			.init(),
		LogFormat::Pretty => registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.init(),
	}
}
