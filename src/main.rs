use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use inicopy::IniCopyError;
use inicopy::config::{Config, load_config_file};

#[derive(Parser)]
#[command(name = "inicopy")]
#[command(
	author,
	version,
	about = "Copy INI file sections based on TOML configuration"
)]
struct Cli {
	/// Path to TOML configuration file
	#[arg(long, value_name = "PATH", default_value = "conf.toml")]
	config: PathBuf,

	/// Log parsing and copy details to stderr
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let config = match load_config_file(&cli.config) {
		Ok(config) => config,
		Err(IniCopyError::ConfigNotFound { path }) => {
			eprintln!("Error: Configuration file {} not found.", path.display());
			return ExitCode::from(1);
		}
		Err(e) => {
			let e = anyhow::Error::new(e).context("Failed to load configuration");
			return report_error(e);
		}
	};

	match run(&config) {
		Ok(code) => code,
		Err(e) => report_error(e),
	}
}

fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn report_error(e: anyhow::Error) -> ExitCode {
	eprintln!("error: {e:?}");
	ExitCode::FAILURE
}

fn run(config: &Config) -> Result<ExitCode> {
	let report = inicopy::copy::run(config).with_context(|| {
		format!(
			"Failed to copy sections from {} into {}",
			config.files.input.display(),
			config.files.target.display()
		)
	})?;

	// Missing sections are a warning only
	if !report.is_complete() {
		eprintln!(
			"Warning: Sections not found in input file: {}",
			report.missing.join(", ")
		);
	}

	println!(
		"Successfully processed {} and updated {}",
		config.files.input.display(),
		config.files.target.display()
	);
	Ok(ExitCode::SUCCESS)
}
