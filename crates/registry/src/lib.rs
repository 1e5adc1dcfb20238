//! Command registry and dispatcher.
//!
//! Commands declare themselves through a signature string. A [`RegistryBuilder`] collects
//! them (directly or from [`CommandLoader`]s) and freezes them into a [`CommandRegistry`];
//! an [`Application`] resolves invocation names against it, binds tokens, and runs the
//! matching [`Command`].
//!
//! # Modules
//!
//! - [`app`] - Dispatch, `call`, and the root screen
//! - [`registry`] - Registration and lookup
//! - [`resolve`] - Exact lookup with "did you mean" fallback
//! - [`help`] - Help rendering
//! - [`config`] - TOML configuration

pub mod app;
mod builtins;
mod command;
pub mod config;
mod error;
pub mod help;
mod loader;
pub mod registry;
pub mod resolve;

pub use app::{Application, LIST_COMMAND};
pub use artisan_matcher::Suggestion;
pub use artisan_signature::{
	ArgumentValue, BindError, HELP_HINT, Input, OptionValue, OptionValueSource, Signature, SignatureDefinition, SignatureError,
};
pub use builtins::ListCommands;
pub use command::{Command, CommandContext};
pub use config::{ArtisanConfig, ConfigError, SuggestionLimits};
pub use error::{CommandError, DispatchError, LIST_HINT, LoadError, RegistryError};
pub use help::{CommandHelp, HelpRenderer, PlainHelp};
pub use loader::{BuiltinCommands, CommandLoader};
pub use registry::{CommandEntry, CommandRegistry, RegistryBuilder};
pub use resolve::{Chooser, ClosestChoice, NoChoice};

#[cfg(test)]
pub(crate) mod test_support;
