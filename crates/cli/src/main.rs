//! `reckon TYPE`: prints every instance of a record type as JSON.

mod cli;
mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use cli::{Cli, LOG_ENV, USAGE_ERROR};
// Force linking of reckon-builtins so its inventory registrations are collected
#[allow(unused_imports, reason = "ensures reckon-builtins registrations are linked")]
use reckon_builtins as _;
use reckon_registry::TypeRegistry;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			err.exit()
		}
		Err(_) => {
			eprintln!("{USAGE_ERROR}");
			return ExitCode::FAILURE;
		}
	};

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("reckon: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	init_tracing(cli)?;

	let registry = TypeRegistry::from_inventory().context("failed to assemble record types")?;
	debug!(
		types = ?registry.type_names().collect::<Vec<_>>(),
		"record types ready"
	);

	let count = output::print_instances(&registry, &cli.type_name, &mut io::stdout().lock())
		.context("failed to write records")?;
	debug!(type_name = %cli.type_name, count, "listed instances");
	Ok(())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(cli.default_filter()));

	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.finish();

	tracing::subscriber::set_global_default(subscriber).context("failed to install logger")?;
	Ok(())
}
