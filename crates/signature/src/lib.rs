//! Signature micro-language for declaring command-line commands.
//!
//! A signature is a base name followed by `{...}` blocks:
//!
//! ```text
//! make:command {name: Name} {--dir=: Target dir} {--f|force: Overwrite}
//! ```
//!
//! - [`parse_signature`] produces the structural [`SignatureDefinition`].
//! - [`parse_descriptions`] extracts help text per argument and option.
//! - [`bind`] matches a runtime token list against a definition.
//!
//! [`Signature`] wraps the text and caches its parsed definition.

mod binder;
mod definition;
mod descriptions;
mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod test_support;

pub use binder::{
	ArgumentValue, BoundArguments, BoundOptions, Input, OptionValue, OptionValueSource, bind, bind_with,
};
pub use definition::{ArgumentSpec, OptionSpec, Signature, SignatureDefinition};
pub use descriptions::{Descriptions, parse_descriptions};
pub use error::{BindError, HELP_HINT, SignatureError};
pub use parser::{parse_pattern, parse_signature};

/// Returns `true` for the literal help flags `--help` and `-h`.
pub fn is_help_flag(token: &str) -> bool {
	matches!(token, "--help" | "-h")
}
