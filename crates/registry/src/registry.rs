//! Command registry.
//!
//! Commands are pushed into a [`RegistryBuilder`] and frozen by [`RegistryBuilder::build`],
//! which validates every signature up front. Lookups on the resulting [`CommandRegistry`]
//! never fail for structural reasons.

use std::sync::Arc;

use artisan_matcher::Suggestion;
use artisan_signature::{Descriptions, Signature, SignatureDefinition, SignatureError, parse_descriptions, parse_pattern};
use indexmap::IndexMap;
use tracing::debug;

use crate::command::Command;
use crate::config::SuggestionLimits;
use crate::error::RegistryError;
use crate::help::CommandHelp;
use crate::loader::CommandLoader;


/// A registered command with its parsed signature.
pub struct CommandEntry {
	signature: Signature,
	description: String,
	definition: SignatureDefinition,
	command: Arc<dyn Command>,
}

impl CommandEntry {
	pub fn base(&self) -> &str {
		self.signature.base()
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	/// Definition used for binding: global options followed by the command's own.
	pub fn definition(&self) -> &SignatureDefinition {
		&self.definition
	}

	pub fn command(&self) -> &dyn Command {
		self.command.as_ref()
	}

	/// Help data with `globals` listed before the command's own entries.
	pub fn help(&self, globals: &Descriptions) -> Result<CommandHelp<'_>, SignatureError> {
		let mut descriptions = globals.clone();
		descriptions.extend(self.signature.descriptions()?);
		Ok(CommandHelp {
			base: self.base(),
			description: &self.description,
			descriptions,
		})
	}
}

impl std::fmt::Debug for CommandEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CommandEntry")
			.field("signature", &self.signature.text())
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

/// Collects commands before freezing them into a [`CommandRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
	commands: Vec<Arc<dyn Command>>,
}

impl std::fmt::Debug for RegistryBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegistryBuilder").field("commands", &self.commands.len()).finish()
	}
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, command: impl Command + 'static) -> &mut Self {
		self.commands.push(Arc::new(command));
		self
	}

	pub fn register_shared(&mut self, command: Arc<dyn Command>) -> &mut Self {
		self.commands.push(command);
		self
	}

	/// Registers every command produced by `loader`.
	///
	/// # Errors
	///
	/// Propagates the loader's [`crate::LoadError`].
	pub fn load(&mut self, loader: &dyn CommandLoader) -> Result<&mut Self, RegistryError> {
		let commands = loader.load()?;
		debug!(loader = loader.name(), count = commands.len(), "loaded commands");
		self.commands.extend(commands);
		Ok(self)
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Validates all signatures and freezes the registry.
	///
	/// `global_options` is a bare pattern whose options are prepended to every command.
	///
	/// # Errors
	///
	/// - [`RegistryError::GlobalOptions`] if `global_options` does not parse.
	/// - [`RegistryError::DuplicateSignature`] if two commands share a base.
	/// - [`RegistryError::InvalidSignature`] if a signature does not parse or redeclares a
	///   global option.
	pub fn build(self, global_options: &str) -> Result<CommandRegistry, RegistryError> {
		let globals = parse_pattern(global_options).map_err(RegistryError::GlobalOptions)?;
		let global_descriptions = parse_descriptions(global_options).map_err(RegistryError::GlobalOptions)?;

		let mut entries: IndexMap<String, CommandEntry> = IndexMap::with_capacity(self.commands.len());
		for command in self.commands {
			let signature = Signature::new(command.signature());
			let base = signature.base().to_string();

			if entries.contains_key(&base) {
				return Err(RegistryError::DuplicateSignature { base });
			}

			let definition = signature
				.definition()
				.and_then(|own| own.with_globals(&globals))
				.map_err(|source| RegistryError::InvalidSignature {
					base: base.clone(),
					source,
				})?;

			debug!(command = base.as_str(), "registered command");
			let description = command.description().to_string();
			entries.insert(
				base,
				CommandEntry {
					signature,
					description,
					definition,
					command,
				},
			);
		}

		debug!(commands = entries.len(), "command registry built");
		Ok(CommandRegistry {
			entries,
			globals,
			global_descriptions,
		})
	}
}

/// Immutable base -> command map, in registration order.
#[derive(Debug)]
pub struct CommandRegistry {
	entries: IndexMap<String, CommandEntry>,
	globals: SignatureDefinition,
	global_descriptions: Descriptions,
}

impl CommandRegistry {
	/// Exact lookup by base.
	pub fn get(&self, base: &str) -> Option<&CommandEntry> {
		self.entries.get(base)
	}

	pub fn contains(&self, base: &str) -> bool {
		self.entries.contains_key(base)
	}

	/// Entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
		self.entries.values()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Options shared by every command.
	pub fn globals(&self) -> &SignatureDefinition {
		&self.globals
	}

	pub fn global_descriptions(&self) -> &Descriptions {
		&self.global_descriptions
	}

	/// Bases similar to `requested`, closest first.
	pub fn suggest(&self, requested: &str, limits: SuggestionLimits) -> Vec<Suggestion> {
		artisan_matcher::suggest(requested, self.entries.keys().map(String::as_str), limits.threshold, limits.max)
	}
}
