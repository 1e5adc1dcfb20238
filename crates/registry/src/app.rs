//! Dispatching command-line invocations against a frozen registry.

use std::io::Write;

use artisan_signature::{bind_with, is_help_flag};
use tracing::debug;

use crate::command::CommandContext;
use crate::config::ArtisanConfig;
use crate::error::{DispatchError, RegistryError};
use crate::help::{HelpRenderer, PlainHelp};
use crate::registry::{CommandEntry, CommandRegistry, RegistryBuilder};
use crate::resolve::{Chooser, NoChoice};

#[cfg(test)]
mod tests;

/// Base of the command run after the root screen.
pub const LIST_COMMAND: &str = "list";

const NO_TOKENS: &[&str] = &[];

/// A registry plus the policies used to run its commands.
pub struct Application {
	config: ArtisanConfig,
	registry: CommandRegistry,
	chooser: Box<dyn Chooser>,
	help: Box<dyn HelpRenderer>,
}

impl Application {
	pub fn new(config: ArtisanConfig, registry: CommandRegistry) -> Self {
		Self {
			config,
			registry,
			chooser: Box::new(NoChoice),
			help: Box::new(PlainHelp),
		}
	}

	/// Freezes `builder` with the configured global options.
	pub fn build(config: ArtisanConfig, builder: RegistryBuilder) -> Result<Self, RegistryError> {
		let registry = builder.build(&config.global_options)?;
		Ok(Self::new(config, registry))
	}

	pub fn with_chooser(mut self, chooser: impl Chooser + 'static) -> Self {
		self.chooser = Box::new(chooser);
		self
	}

	pub fn with_help_renderer(mut self, help: impl HelpRenderer + 'static) -> Self {
		self.help = Box::new(help);
		self
	}

	pub fn config(&self) -> &ArtisanConfig {
		&self.config
	}

	pub fn registry(&self) -> &CommandRegistry {
		&self.registry
	}

	/// Runs `entry` with `tokens`.
	///
	/// A literal `--help` or `-h` anywhere in `tokens` renders the command's help instead
	/// and skips binding.
	pub fn dispatch<S: AsRef<str>>(&self, entry: &CommandEntry, tokens: &[S], out: &mut dyn Write) -> Result<(), DispatchError> {
		if tokens.iter().any(|t| is_help_flag(t.as_ref())) {
			debug!(command = entry.base(), "rendering command help");
			let help = entry.help(self.registry.global_descriptions())?;
			self.help.command(&help, out)?;
			return Ok(());
		}

		let input = bind_with(entry.definition(), tokens, self.config.option_values)?;
		debug!(command = entry.base(), tokens = tokens.len(), "dispatching command");

		let mut ctx = CommandContext::new(input, &self.registry, out);
		entry.command().handle(&mut ctx)?;
		Ok(())
	}

	/// Resolves `base` and dispatches it.
	pub fn call<S: AsRef<str>>(&self, base: &str, tokens: &[S], out: &mut dyn Write) -> Result<(), DispatchError> {
		let entry = self.registry.resolve(base, self.config.suggestions, self.chooser.as_ref())?;
		self.dispatch(entry, tokens, out)
	}

	/// Runs a raw argument list, program name excluded.
	///
	/// An empty list or a lone help flag shows the root screen followed by `list`.
	pub fn run<S: AsRef<str>>(&self, args: &[S], out: &mut dyn Write) -> Result<(), DispatchError> {
		match args.split_first() {
			Some((base, rest)) if !is_help_flag(base.as_ref()) => self.call(base.as_ref(), rest, out),
			_ => {
				self.help.root(&self.config.name, self.registry.global_descriptions(), out)?;
				self.call(LIST_COMMAND, NO_TOKENS, out)
			}
		}
	}
}
