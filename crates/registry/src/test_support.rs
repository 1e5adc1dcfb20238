use std::sync::{Arc, Mutex};

use crate::command::{Command, CommandContext};
use crate::config::DEFAULT_GLOBAL_OPTIONS;
use crate::error::{CommandError, LoadError};
use crate::loader::CommandLoader;
use crate::registry::{CommandRegistry, RegistryBuilder};
use crate::{ArgumentValue, Input};

/// Command that records every input it is handed.
pub(crate) struct Recorder {
	pub signature: &'static str,
	pub description: &'static str,
	pub seen: Arc<Mutex<Vec<Input>>>,
}

impl Recorder {
	pub fn new(signature: &'static str) -> Self {
		Self {
			signature,
			description: "",
			seen: Arc::default(),
		}
	}

	pub fn described(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	pub fn inputs(&self) -> Arc<Mutex<Vec<Input>>> {
		Arc::clone(&self.seen)
	}
}

impl Command for Recorder {
	fn signature(&self) -> &str {
		self.signature
	}

	fn description(&self) -> &str {
		self.description
	}

	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
		self.seen.lock().unwrap().push(ctx.input().clone());
		ctx.line(format!("ran {}", self.signature.split_whitespace().next().unwrap_or("")))
	}
}

/// Command that fails with its first argument as the message.
pub(crate) struct Fails;

impl Command for Fails {
	fn signature(&self) -> &str {
		"fail {message?}"
	}

	fn handle(&self, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
		let message = match ctx.argument("message")? {
			ArgumentValue::Single(text) => text.clone(),
			_ => "failed".to_string(),
		};
		Err(CommandError::Failed(message))
	}
}

pub(crate) struct StaticLoader(pub Result<Vec<&'static str>, LoadError>);

impl CommandLoader for StaticLoader {
	fn name(&self) -> &str {
		"static"
	}

	fn load(&self) -> Result<Vec<Arc<dyn Command>>, LoadError> {
		let signatures = self.0.clone()?;
		Ok(signatures
			.into_iter()
			.map(|s| Arc::new(Recorder::new(s)) as Arc<dyn Command>)
			.collect())
	}
}

/// Builds a registry of [`Recorder`]s with the default global options.
pub(crate) fn registry_of(signatures: &[&'static str]) -> CommandRegistry {
	let mut builder = RegistryBuilder::new();
	for &signature in signatures {
		builder.register(Recorder::new(signature));
	}
	builder.build(DEFAULT_GLOBAL_OPTIONS).unwrap()
}
