use std::fmt::Display;
use std::io::Write;

use artisan_signature::{ArgumentValue, Input, OptionValue};

use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// A command declared by its signature.
///
/// The registry splits the signature into base and pattern, parses it once, and binds
/// runtime tokens before calling [`Command::handle`].
pub trait Command: Send + Sync {
	/// Signature text, e.g. `"greet {name} {--y|yell}"`.
	fn signature(&self) -> &str;

	/// One-line description shown by `list` and in help.
	fn description(&self) -> &str {
		""
	}

	/// Performs the command with bound arguments and options.
	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError>;
}

/// Per-invocation state handed to [`Command::handle`].
pub struct CommandContext<'a> {
	input: Input,
	registry: &'a CommandRegistry,
	out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
	pub fn new(input: Input, registry: &'a CommandRegistry, out: &'a mut dyn Write) -> Self {
		Self { input, registry, out }
	}

	/// All bound arguments and options.
	pub fn input(&self) -> &Input {
		&self.input
	}

	/// Bound value of a declared argument.
	///
	/// # Errors
	///
	/// [`CommandError::InvalidArgument`] if `name` is not declared by the signature.
	pub fn argument(&self, name: &str) -> Result<&ArgumentValue, CommandError> {
		self.input
			.argument(name)
			.ok_or_else(|| CommandError::InvalidArgument(format!("argument \"{name}\" is not registered on signature")))
	}

	/// Bound value of a declared option, including global options.
	///
	/// # Errors
	///
	/// [`CommandError::InvalidArgument`] if `name` is not declared by the signature.
	pub fn option(&self, name: &str) -> Result<&OptionValue, CommandError> {
		self.input
			.option(name)
			.ok_or_else(|| CommandError::InvalidArgument(format!("option \"{name}\" is not registered on signature")))
	}

	pub fn flag(&self, name: &str) -> Result<bool, CommandError> {
		self.option(name).map(OptionValue::is_set)
	}

	/// The frozen registry this command was dispatched from.
	pub fn registry(&self) -> &'a CommandRegistry {
		self.registry
	}

	pub fn out(&mut self) -> &mut (dyn Write + 'a) {
		&mut *self.out
	}

	/// Writes `text` followed by a newline.
	pub fn line(&mut self, text: impl Display) -> Result<(), CommandError> {
		writeln!(self.out, "{text}")?;
		Ok(())
	}
}
