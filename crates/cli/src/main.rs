//! `artisan` command runner.
//!
//! Loads `artisan.toml` (or the file named by `ARTISAN_CONFIG`), registers the built-in
//! and bundled commands, and runs the process arguments against them.

mod commands;
mod prompt;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use artisan_registry::{Application, ArtisanConfig, BuiltinCommands, DispatchError, RegistryBuilder};
use prompt::PromptChooser;
use tracing::{debug, info};

const CONFIG_ENV: &str = "ARTISAN_CONFIG";
const CONFIG_FILE: &str = "artisan.toml";

fn main() -> anyhow::Result<ExitCode> {
	let args: Vec<String> = std::env::args().skip(1).collect();
	setup_tracing(args.iter().any(|a| matches!(a.as_str(), "-v" | "--verbose")));

	let config = load_config()?;
	let mut app = build_application(config)?;
	if io::stdin().is_terminal() {
		app = app.with_chooser(PromptChooser);
	}

	let mut stdout = io::stdout().lock();
	match app.run(args.as_slice(), &mut stdout) {
		Ok(()) => Ok(ExitCode::SUCCESS),
		Err(err) => {
			debug!(error = ?err, "command failed");
			stdout.flush()?;
			report(&err, &mut io::stderr().lock())?;
			Ok(ExitCode::FAILURE)
		}
	}
}

fn config_path() -> Option<PathBuf> {
	if let Some(path) = std::env::var_os(CONFIG_ENV) {
		return Some(PathBuf::from(path));
	}
	let local = PathBuf::from(CONFIG_FILE);
	local.is_file().then_some(local)
}

fn load_config() -> anyhow::Result<ArtisanConfig> {
	let Some(path) = config_path() else {
		return Ok(ArtisanConfig::default());
	};
	info!(path = %path.display(), "loading config");
	ArtisanConfig::load(&path).with_context(|| format!("loading config from {}", path.display()))
}

fn build_application(config: ArtisanConfig) -> anyhow::Result<Application> {
	let mut builder = RegistryBuilder::new();
	builder.load(&BuiltinCommands)?;
	builder.register(commands::Greet).register(commands::Sum);
	Ok(Application::build(config, builder)?)
}

/// Writes `err` with its suggestions and hint.
fn report(err: &DispatchError, out: &mut dyn Write) -> io::Result<()> {
	writeln!(out, "{err}")?;
	if let DispatchError::CommandNotFound { suggestions, .. } = err
		&& !suggestions.is_empty()
	{
		writeln!(out)?;
		writeln!(out, "Did you mean one of these?")?;
		for base in suggestions {
			writeln!(out, "  {base}")?;
		}
	}
	if let Some(hint) = err.hint() {
		writeln!(out)?;
		writeln!(out, "{hint}")?;
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;

	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("artisan=debug,artisan_registry=debug")
			} else {
				EnvFilter::new("artisan=warn,artisan_registry=warn")
			}
		})
	};

	// ARTISAN_LOG_DIR keeps stderr clean for scripted runs
	if let Some(log_dir) = std::env::var_os("ARTISAN_LOG_DIR").map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("artisan.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			tracing_subscriber::fmt()
				.with_env_filter(filter())
				.with_writer(file)
				.with_ansi(false)
				.init();
			debug!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
