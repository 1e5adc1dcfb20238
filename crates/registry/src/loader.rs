use std::sync::Arc;

use crate::builtins::ListCommands;
use crate::command::Command;
use crate::error::LoadError;

/// A source of commands consulted while the registry is being built.
///
/// Directory discovery and module loading live behind this trait.
pub trait CommandLoader {
	/// Name used in logs.
	fn name(&self) -> &str;

	/// Produces every command of this source.
	fn load(&self) -> Result<Vec<Arc<dyn Command>>, LoadError>;
}

/// Commands shipped with the framework (`list`).
pub struct BuiltinCommands;

impl CommandLoader for BuiltinCommands {
	fn name(&self) -> &str {
		"builtin"
	}

	fn load(&self) -> Result<Vec<Arc<dyn Command>>, LoadError> {
		Ok(vec![Arc::new(ListCommands)])
	}
}
