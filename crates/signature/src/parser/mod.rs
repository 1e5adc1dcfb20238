//! # Parser
//!
//! Turns lexed blocks into a [`SignatureDefinition`].
//!
//! ## Supported Syntax
//!
//! ```text
//! signature = base (ws pattern)?
//! pattern   = (text | block)*
//! argument  = "{" name ("?" | "*" | "=" default?)* (":" description)? "}"
//! option    = "{" "--" (short "|")? long ("=" default?)? (":" description)? "}"
//! ```
//!
//! Markers are order-independent within a block. `?` and `*` are rejected on options,
//! and a variadic argument must be the last positional argument.

use crate::definition::{ArgumentSpec, OptionSpec, SignatureDefinition, split_base};
use crate::error::SignatureError;
use crate::lexer::{Block, Lexer, Token, TokenKind};


/// Parses a full signature such as `"make:command {name} {--f|force}"`.
///
/// # Errors
///
/// Returns a [`SignatureError`] if the base is empty or contains braces, or if any
/// block violates the grammar.
///
/// # Examples
///
/// ```
/// use artisan_signature::parse_signature;
///
/// let def = parse_signature("greet {name} {--y|yell}").unwrap();
/// assert_eq!(def.base, "greet");
/// assert_eq!(def.arguments[0].name, "name");
/// assert_eq!(def.options["yell"].short.as_deref(), Some("y"));
/// ```
pub fn parse_signature(text: &str) -> Result<SignatureDefinition, SignatureError> {
	let (base_end, pattern_start) = split_base(text);
	let base = &text[..base_end];
	if base.is_empty() || base.contains(['{', '}']) {
		return Err(SignatureError::InvalidBase { base: base.to_string() });
	}

	let mut definition = parse_pattern_at(&text[pattern_start..], pattern_start)?;
	definition.base = base.to_string();
	Ok(definition)
}

/// Parses a bare pattern (no base), such as a global options declaration.
pub fn parse_pattern(pattern: &str) -> Result<SignatureDefinition, SignatureError> {
	parse_pattern_at(pattern, 0)
}

pub(crate) fn parse_pattern_at(pattern: &str, offset: usize) -> Result<SignatureDefinition, SignatureError> {
	let mut definition = SignatureDefinition::default();
	for block in Lexer::with_offset(pattern, offset) {
		let block = block?;
		if block.is_option() {
			definition.push_option(parse_option(&block)?)?;
		} else {
			definition.push_argument(parse_argument(&block)?)?;
		}
	}
	Ok(definition)
}

fn unexpected(token: &Token<'_>) -> SignatureError {
	let found = match token.kind {
		TokenKind::OptionMarker => "'--'".to_string(),
		TokenKind::Ident(name) => format!("name \"{name}\""),
		TokenKind::Pipe => "'|'".to_string(),
		TokenKind::Default(_) => "'='".to_string(),
		TokenKind::Optional => "'?'".to_string(),
		TokenKind::Variadic => "'*'".to_string(),
		TokenKind::Description(_) => "':'".to_string(),
	};
	SignatureError::Unexpected {
		found,
		position: token.position,
	}
}

/// Parses a positional block: `{name}`, `{name?}`, `{name=default}`, `{name*}`.
fn parse_argument(block: &Block<'_>) -> Result<ArgumentSpec, SignatureError> {
	let mut name = None;
	let mut optional = false;
	let mut variadic = false;
	let mut default = None;

	for token in &block.tokens {
		match token.kind {
			TokenKind::Ident(ident) if name.is_none() => name = Some(ident),
			TokenKind::Default(value) => {
				optional = true;
				default = (!value.is_empty()).then(|| value.to_string());
			}
			TokenKind::Optional => {
				optional = true;
				default = None;
			}
			TokenKind::Variadic => variadic = true,
			TokenKind::Description(_) => {}
			_ => return Err(unexpected(token)),
		}
	}

	let name = name.ok_or(SignatureError::MissingKey { position: block.position })?;
	Ok(ArgumentSpec {
		name: name.to_string(),
		optional,
		variadic,
		default: if variadic { None } else { default },
	})
}

/// Parses an option block: `{--long}`, `{--s|long}`, `{--long=default}`.
fn parse_option(block: &Block<'_>) -> Result<OptionSpec, SignatureError> {
	let mut short = None;
	let mut long = None;
	let mut requires_value = false;
	let mut default = None;

	for token in block.tokens.iter().skip(1) {
		match token.kind {
			TokenKind::Ident(ident) if long.is_none() => long = Some(ident),
			TokenKind::Pipe if short.is_none() && long.is_some() => short = long.take(),
			TokenKind::Default(value) => {
				requires_value = true;
				default = (!value.is_empty()).then(|| value.to_string());
			}
			TokenKind::Optional | TokenKind::Variadic => {
				let marker = if token.kind == TokenKind::Optional { '?' } else { '*' };
				return Err(SignatureError::InvalidOptionMarker {
					option: long.or(short).unwrap_or_default().to_string(),
					marker,
				});
			}
			TokenKind::Description(_) => {}
			_ => return Err(unexpected(token)),
		}
	}

	let long = long.ok_or(SignatureError::MissingKey { position: block.position })?;
	Ok(OptionSpec {
		long: long.to_string(),
		short: short.map(str::to_string),
		requires_value,
		default,
	})
}
