use thiserror::Error;

/// Hint shown next to argument binding failures.
pub const HELP_HINT: &str = "(use -h for help)";

/// Errors raised while parsing a signature.
///
/// Positions are byte offsets into the full signature text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
	/// The command base is empty or contains block delimiters.
	#[error("invalid command base {base:?}")]
	InvalidBase { base: String },
	/// A `{` block was never closed.
	#[error("unterminated block opened at position {position}")]
	Unterminated { position: usize },
	/// A character or marker that the grammar does not allow here.
	#[error("unexpected {found} at position {position}")]
	Unexpected { found: String, position: usize },
	/// A block without an argument or option name.
	#[error("block at position {position} declares no key")]
	MissingKey { position: usize },
	/// `?` or `*` used on an option block.
	#[error("marker '{marker}' is not allowed on option --{option}")]
	InvalidOptionMarker { option: String, marker: char },
	/// A variadic argument followed by another positional argument.
	#[error("variadic argument \"{argument}\" must be the last argument")]
	VariadicNotLast { argument: String },
	/// The same argument name or option key was declared twice.
	#[error("duplicate key \"{key}\"")]
	DuplicateKey { key: String },
}

/// Errors raised while binding runtime tokens to a definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
	/// A required argument, or a variadic argument, received no tokens.
	#[error("too few arguments: no value for \"{argument}\"")]
	TooFewArguments { argument: String },
	/// Positional tokens were left after every argument was bound.
	#[error("too many arguments: {}", extra.join(" "))]
	TooManyArguments { extra: Vec<String> },
	/// A flag token matched no declared option.
	#[error("unknown option specified: {option}")]
	UnknownOption { option: String },
}

impl BindError {
	/// Follow-up hint for the presentation layer.
	pub fn hint(&self) -> &'static str {
		HELP_HINT
	}
}
