//! Help text extraction.
//!
//! A lighter pass over the block grammar that keeps only the `: description` text of each
//! argument and option. Markers and defaults are skipped without validation so that help
//! can be rendered independently of binding.

use indexmap::IndexMap;

use crate::definition::display_option_key;
use crate::error::SignatureError;
use crate::lexer::{Lexer, TokenKind};


/// Help text keyed by display key, in declaration order.
///
/// Arguments are keyed by name; options by `-s, --long` or `--long`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions {
	pub arguments: IndexMap<String, Option<String>>,
	pub options: IndexMap<String, Option<String>>,
}

impl Descriptions {
	/// Appends `other` after the entries already present.
	pub fn extend(&mut self, other: Descriptions) {
		self.arguments.extend(other.arguments);
		self.options.extend(other.options);
	}

	/// Returns `true` if at least one argument carries help text.
	pub fn has_argument_text(&self) -> bool {
		self.arguments.values().any(Option::is_some)
	}
}

/// Extracts descriptions from a signature or bare pattern.
///
/// Text outside blocks (including a leading base name) is ignored. Entries without a
/// description map to `None`.
///
/// # Errors
///
/// Fails only on lexical errors such as an unterminated block.
pub fn parse_descriptions(text: &str) -> Result<Descriptions, SignatureError> {
	parse_descriptions_at(text, 0)
}

pub(crate) fn parse_descriptions_at(text: &str, offset: usize) -> Result<Descriptions, SignatureError> {
	let mut out = Descriptions::default();

	for block in Lexer::with_offset(text, offset) {
		let block = block?;
		let mut short = None;
		let mut key = None;
		let mut description = None;

		for token in &block.tokens {
			match token.kind {
				TokenKind::Ident(ident) if key.is_none() => key = Some(ident),
				TokenKind::Pipe if short.is_none() => short = key.take(),
				TokenKind::Description(text) => {
					let text = text.trim();
					description = (!text.is_empty()).then(|| text.to_string());
				}
				_ => {}
			}
		}

		let Some(key) = key else { continue };
		if block.is_option() {
			out.options.insert(display_option_key(short, key), description);
		} else {
			out.arguments.insert(key.to_string(), description);
		}
	}

	Ok(out)
}
