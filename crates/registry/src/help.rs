//! Help screens.
//!
//! Rows are `  key` padded to a fixed column followed by the description. Keys longer
//! than the column keep at least one space before their text.

use std::io::{self, Write};

use artisan_signature::Descriptions;

#[cfg(test)]
mod tests;

/// Column at which descriptions start in help rows.
pub const HELP_KEY_WIDTH: usize = 20;

/// Everything needed to render help for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHelp<'a> {
	pub base: &'a str,
	pub description: &'a str,
	/// Global descriptions followed by the command's own.
	pub descriptions: Descriptions,
}

/// Renders help output. Swappable for styled terminals.
pub trait HelpRenderer: Send + Sync {
	/// Help for a single command, shown for `<base> --help`.
	fn command(&self, help: &CommandHelp<'_>, out: &mut dyn Write) -> io::Result<()>;

	/// Screen shown before `list` when no command was requested.
	fn root(&self, name: &str, globals: &Descriptions, out: &mut dyn Write) -> io::Result<()>;
}

/// Uncoloured help with fixed-width key columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHelp;

impl HelpRenderer for PlainHelp {
	fn command(&self, help: &CommandHelp<'_>, out: &mut dyn Write) -> io::Result<()> {
		if !help.description.is_empty() {
			writeln!(out, "Description:")?;
			writeln!(out, "  {}", help.description)?;
			writeln!(out)?;
		}

		if help.descriptions.has_argument_text() {
			writeln!(out, "Arguments:")?;
			for (name, text) in &help.descriptions.arguments {
				write_row(out, name, text.as_deref().unwrap_or(""), HELP_KEY_WIDTH)?;
			}
			writeln!(out)?;
		}

		write_options(out, &help.descriptions)
	}

	fn root(&self, name: &str, globals: &Descriptions, out: &mut dyn Write) -> io::Result<()> {
		if !name.is_empty() {
			writeln!(out, "{name}")?;
			writeln!(out)?;
		}
		write_options(out, globals)
	}
}

fn write_options(out: &mut dyn Write, descriptions: &Descriptions) -> io::Result<()> {
	writeln!(out, "Options:")?;
	for (key, text) in &descriptions.options {
		write_row(out, key, text.as_deref().unwrap_or(""), HELP_KEY_WIDTH)?;
	}
	writeln!(out)
}

/// Writes `  key<padding>text`, trimming trailing whitespace.
pub fn write_row(out: &mut dyn Write, key: &str, text: &str, width: usize) -> io::Result<()> {
	let pad = width.saturating_sub(key.chars().count()).max(1);
	let row = format!("  {key}{:pad$}{text}", "");
	writeln!(out, "{}", row.trim_end())
}
