use std::io;

use artisan_signature::{BindError, HELP_HINT, SignatureError};
use thiserror::Error;

/// Hint shown when a requested command cannot be resolved.
pub const LIST_HINT: &str = "(use \"list\" to display available commands)";

/// Errors returned by command handlers.
#[derive(Error, Debug)]
pub enum CommandError {
	/// General command failure with message.
	#[error("{0}")]
	Failed(String),
	/// An argument was missing from the signature or held an unusable value.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Writing output failed.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

/// Errors produced by a [`crate::CommandLoader`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
	/// The loaded value is not a command.
	#[error("no command class found from path: \"{path}\"")]
	CommandClassNotFound { path: String },
	#[error("{0}")]
	Other(String),
}

/// Configuration errors raised while building the registry.
///
/// These abort startup; no command runs after one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Two commands share a base name.
	#[error("signature \"{base}\" used in multiple commands")]
	DuplicateSignature { base: String },
	/// A command signature does not parse, or collides with the global options.
	#[error("invalid signature for \"{base}\": {source}")]
	InvalidSignature {
		base: String,
		#[source]
		source: SignatureError,
	},
	/// The global options declaration does not parse.
	#[error("invalid global options: {0}")]
	GlobalOptions(#[source] SignatureError),
	#[error(transparent)]
	Load(#[from] LoadError),
}

/// Errors that end a single command invocation.
#[derive(Error, Debug)]
pub enum DispatchError {
	/// No exact match and no accepted suggestion.
	#[error("no command found: \"{base}\"")]
	CommandNotFound {
		base: String,
		/// Similar bases, closest first. Empty when nothing was close enough.
		suggestions: Vec<String>,
	},
	#[error(transparent)]
	Bind(#[from] BindError),
	#[error(transparent)]
	Signature(#[from] SignatureError),
	#[error(transparent)]
	Command(#[from] CommandError),
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl DispatchError {
	/// Follow-up hint for the presentation layer, if any.
	pub fn hint(&self) -> Option<&'static str> {
		match self {
			Self::CommandNotFound { .. } => Some(LIST_HINT),
			Self::Bind(_) => Some(HELP_HINT),
			_ => None,
		}
	}
}
