//! Binds runtime tokens to a [`SignatureDefinition`].
//!
//! Tokens starting with `-` are flags; everything else is positional, regardless of where
//! it appears. Arguments are bound first, in declaration order, then options. Binding is
//! all-or-nothing: any violation returns a [`BindError`] and no partial result.

use std::collections::VecDeque;

use crate::definition::{OptionSpec, SignatureDefinition};
use crate::error::BindError;

mod values;

pub use values::{ArgumentValue, BoundArguments, BoundOptions, Input, OptionValue};


/// Where a value option without an inline `=value` may take its value from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OptionValueSource {
	/// `--dir src` takes `src` from the leftover positional tokens.
	///
	/// Extra positional tokens are only reported after options had a chance to consume them.
	#[default]
	InlineOrPositional,
	/// Only `--dir=src` and `-dsrc` carry values.
	InlineOnly,
}

/// Binds `tokens` using the default [`OptionValueSource`].
///
/// # Examples
///
/// ```
/// use artisan_signature::{ArgumentValue, OptionValue, bind, parse_signature};
///
/// let def = parse_signature("copy {from} {to*} {--f|force}").unwrap();
/// let input = bind(&def, &["a", "b", "c", "-f"]).unwrap();
/// assert_eq!(input.arguments["from"], ArgumentValue::Single("a".into()));
/// assert_eq!(input.options["force"], OptionValue::Flag(true));
/// ```
pub fn bind<S: AsRef<str>>(definition: &SignatureDefinition, tokens: &[S]) -> Result<Input, BindError> {
	bind_with(definition, tokens, OptionValueSource::default())
}

/// Binds `tokens` to `definition`.
///
/// # Errors
///
/// - [`BindError::TooFewArguments`] when a required argument has no token, or a variadic
///   argument captures nothing.
/// - [`BindError::TooManyArguments`] when positional tokens remain.
/// - [`BindError::UnknownOption`] when a flag token matches no option.
pub fn bind_with<S: AsRef<str>>(
	definition: &SignatureDefinition,
	tokens: &[S],
	source: OptionValueSource,
) -> Result<Input, BindError> {
	let (mut flags, mut positional): (VecDeque<String>, VecDeque<String>) =
		tokens.iter().map(|t| t.as_ref().to_string()).partition(|t| t.starts_with('-'));

	let mut input = Input::default();

	for spec in &definition.arguments {
		let value = if spec.variadic {
			if positional.is_empty() {
				return Err(BindError::TooFewArguments { argument: spec.name.clone() });
			}
			ArgumentValue::List(positional.drain(..).collect())
		} else if let Some(token) = positional.pop_front() {
			ArgumentValue::Single(token)
		} else if spec.optional {
			spec.default.clone().map_or(ArgumentValue::Missing, ArgumentValue::Single)
		} else {
			return Err(BindError::TooFewArguments { argument: spec.name.clone() });
		};
		input.arguments.insert(spec.name.clone(), value);
	}

	if source == OptionValueSource::InlineOnly {
		ensure_consumed(&positional)?;
	}

	for spec in definition.options.values() {
		let value = match take_flag(&mut flags, spec) {
			None => spec.default_value(),
			Some(FlagMatch::Inline(value)) => OptionValue::Value(value),
			Some(FlagMatch::Bare) if !spec.requires_value => OptionValue::Flag(true),
			Some(FlagMatch::Bare) => match source {
				OptionValueSource::InlineOrPositional => positional
					.pop_front()
					.map_or_else(|| spec.default_value(), OptionValue::Value),
				OptionValueSource::InlineOnly => spec.default_value(),
			},
		};
		input.options.insert(spec.long.clone(), value);
	}

	ensure_consumed(&positional)?;

	if let Some(option) = flags.pop_front() {
		return Err(BindError::UnknownOption { option });
	}

	Ok(input)
}

fn ensure_consumed(positional: &VecDeque<String>) -> Result<(), BindError> {
	if positional.is_empty() {
		Ok(())
	} else {
		Err(BindError::TooManyArguments {
			extra: positional.iter().cloned().collect(),
		})
	}
}

/// How a flag token matched an option.
#[derive(Debug, PartialEq, Eq)]
enum FlagMatch {
	/// `--long`, `-s`, or an empty inline value such as `--long=`.
	Bare,
	/// `--long=value` or `-svalue`.
	Inline(String),
}

/// Removes and returns the first flag token matching `spec`.
fn take_flag(flags: &mut VecDeque<String>, spec: &OptionSpec) -> Option<FlagMatch> {
	let (idx, found) = flags
		.iter()
		.enumerate()
		.find_map(|(idx, token)| match_flag(token, spec).map(|m| (idx, m)))?;
	flags.remove(idx);
	Some(found)
}

/// Matches `--long[=value]` or `-s[value]`; boolean flags ignore any inline value.
fn match_flag(token: &str, spec: &OptionSpec) -> Option<FlagMatch> {
	let value = if let Some(rest) = token.strip_prefix("--") {
		let (key, value) = rest.split_once('=').unwrap_or((rest, ""));
		if key != spec.long {
			return None;
		}
		value
	} else {
		let short = spec.short.as_deref()?;
		token.strip_prefix('-')?.strip_prefix(short)?
	};

	Some(if spec.requires_value { inline(value) } else { FlagMatch::Bare })
}

fn inline(value: &str) -> FlagMatch {
	if value.is_empty() {
		FlagMatch::Bare
	} else {
		FlagMatch::Inline(value.to_string())
	}
}
