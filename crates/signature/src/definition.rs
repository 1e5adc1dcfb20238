use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::binder::OptionValue;
use crate::descriptions::{Descriptions, parse_descriptions_at};
use crate::error::SignatureError;
use crate::parser::parse_signature;

/// A positional argument declared by a `{name}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
	pub name: String,
	/// Set by `?` or `=`.
	pub optional: bool,
	/// Set by `*`; captures every remaining positional token.
	pub variadic: bool,
	/// Value used when an optional argument receives no token.
	pub default: Option<String>,
}

impl ArgumentSpec {
	/// A plain required argument.
	pub fn required(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			optional: false,
			variadic: false,
			default: None,
		}
	}
}

/// An option declared by a `{--long}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
	pub long: String,
	pub short: Option<String>,
	/// Set by `=`. Without it the option is a boolean flag.
	pub requires_value: bool,
	/// Default for value options; flags always default to `false`.
	pub default: Option<String>,
}

impl OptionSpec {
	/// A boolean flag without a short key.
	pub fn flag(long: impl Into<String>) -> Self {
		Self {
			long: long.into(),
			short: None,
			requires_value: false,
			default: None,
		}
	}

	/// Value bound when no token matches this option.
	pub fn default_value(&self) -> OptionValue {
		match (&self.default, self.requires_value) {
			(_, false) => OptionValue::Flag(false),
			(Some(value), true) => OptionValue::Value(value.clone()),
			(None, true) => OptionValue::Missing,
		}
	}

	/// Help key: `-s, --long` or `--long`.
	pub fn display_key(&self) -> String {
		display_option_key(self.short.as_deref(), &self.long)
	}
}

pub(crate) fn display_option_key(short: Option<&str>, long: &str) -> String {
	match short {
		Some(short) => format!("-{short}, --{long}"),
		None => format!("--{long}"),
	}
}

/// Structural result of parsing a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureDefinition {
	/// Invocation name; empty for bare patterns such as global options.
	pub base: String,
	/// Positional arguments in declaration order.
	pub arguments: Vec<ArgumentSpec>,
	/// Options keyed by long key, in declaration order.
	pub options: IndexMap<String, OptionSpec>,
}

impl SignatureDefinition {
	pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
		self.arguments.iter().find(|arg| arg.name == name)
	}

	pub fn option(&self, long: &str) -> Option<&OptionSpec> {
		self.options.get(long)
	}

	pub fn option_by_short(&self, short: &str) -> Option<&OptionSpec> {
		self.options.values().find(|opt| opt.short.as_deref() == Some(short))
	}

	/// Appends an argument, enforcing unique names and a trailing variadic.
	pub(crate) fn push_argument(&mut self, spec: ArgumentSpec) -> Result<(), SignatureError> {
		if let Some(last) = self.arguments.last()
			&& last.variadic
		{
			return Err(SignatureError::VariadicNotLast { argument: last.name.clone() });
		}
		if self.argument(&spec.name).is_some() {
			return Err(SignatureError::DuplicateKey { key: spec.name });
		}
		self.arguments.push(spec);
		Ok(())
	}

	/// Inserts an option, enforcing unique long and short keys.
	pub(crate) fn push_option(&mut self, spec: OptionSpec) -> Result<(), SignatureError> {
		if self.options.contains_key(&spec.long) {
			return Err(SignatureError::DuplicateKey {
				key: format!("--{}", spec.long),
			});
		}
		if let Some(short) = &spec.short
			&& self.option_by_short(short).is_some()
		{
			return Err(SignatureError::DuplicateKey { key: format!("-{short}") });
		}
		self.options.insert(spec.long.clone(), spec);
		Ok(())
	}

	/// Returns a copy whose options are `globals` followed by this definition's own.
	///
	/// Arguments of `globals` are prepended as well. Key collisions are errors.
	pub fn with_globals(&self, globals: &SignatureDefinition) -> Result<SignatureDefinition, SignatureError> {
		let mut merged = SignatureDefinition {
			base: self.base.clone(),
			..globals.clone()
		};
		for argument in &self.arguments {
			merged.push_argument(argument.clone())?;
		}
		for option in self.options.values() {
			merged.push_option(option.clone())?;
		}
		Ok(merged)
	}
}

/// A command signature whose definition is parsed on first use and cached.
///
/// The text before the first whitespace character is the base; the rest is the pattern.
#[derive(Debug)]
pub struct Signature {
	text: String,
	base_end: usize,
	pattern_start: usize,
	definition: OnceLock<Result<SignatureDefinition, SignatureError>>,
}

impl Signature {
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let (base_end, pattern_start) = split_base(&text);
		Self {
			text,
			base_end,
			pattern_start,
			definition: OnceLock::new(),
		}
	}

	/// The full signature text.
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn base(&self) -> &str {
		&self.text[..self.base_end]
	}

	pub fn pattern(&self) -> &str {
		&self.text[self.pattern_start..]
	}

	/// Parses the signature on first call; later calls return the cached result.
	pub fn definition(&self) -> Result<&SignatureDefinition, SignatureError> {
		self.definition
			.get_or_init(|| parse_signature(&self.text))
			.as_ref()
			.map_err(Clone::clone)
	}

	/// Extracts help text for the pattern's arguments and options.
	pub fn descriptions(&self) -> Result<Descriptions, SignatureError> {
		parse_descriptions_at(self.pattern(), self.pattern_start)
	}
}

/// Returns `(end of base, start of pattern)` byte offsets.
pub(crate) fn split_base(text: &str) -> (usize, usize) {
	match text.char_indices().find(|(_, ch)| ch.is_whitespace()) {
		Some((idx, ch)) => (idx, idx + ch.len_utf8()),
		None => (text.len(), text.len()),
	}
}
