use crate::command::{Command, CommandContext};
use crate::error::CommandError;
use crate::help::write_row;

#[cfg(test)]
mod tests;

/// Column at which descriptions start in `list` output.
pub const LIST_KEY_WIDTH: usize = 30;

/// `list`: prints every registered command with its description.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommands;

impl Command for ListCommands {
	fn signature(&self) -> &str {
		"list"
	}

	fn description(&self) -> &str {
		"Print all available commands"
	}

	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
		let registry = ctx.registry();
		ctx.line("Available Commands:")?;
		for entry in registry.iter() {
			write_row(ctx.out(), entry.base(), entry.description(), LIST_KEY_WIDTH)?;
		}
		Ok(())
	}
}
