//! # Lexer
//!
//! Splits a signature pattern into `{...}` blocks and each block into marker tokens.
//! Text between blocks is skipped; the base name is split off before lexing.
//!
//! ## Block Syntax
//!
//! ```text
//! block       = "{" ws* "--"? item* "}"
//! item        = ident | "|" | "?" | "*" | default | description | ws
//! ident       = (alnum | "_") (alnum | "_" | "-")*
//! default     = "=" (any - ("}" | ":" | ws))*
//! description = ":" (any - "}")*
//! ```

use crate::error::SignatureError;


/// A marker recognized inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
	/// Leading `--`: the block declares an option.
	OptionMarker,
	/// A key name.
	Ident(&'a str),
	/// `|` between a short and a long option key.
	Pipe,
	/// `=` and the default text following it (may be empty).
	Default(&'a str),
	/// `?`
	Optional,
	/// `*`
	Variadic,
	/// `:` and the raw text up to the closing brace.
	Description(&'a str),
}

/// A token with its byte offset in the signature text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	pub kind: TokenKind<'a>,
	pub position: usize,
}

/// The tokens of one `{...}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
	/// Byte offset of the opening brace.
	pub position: usize,
	pub tokens: Vec<Token<'a>>,
}

impl Block<'_> {
	/// Returns `true` if the block starts with `--`.
	pub fn is_option(&self) -> bool {
		matches!(self.tokens.first(), Some(Token { kind: TokenKind::OptionMarker, .. }))
	}
}

/// Iterator over the blocks of a signature pattern.
pub struct Lexer<'a> {
	/// Remaining input.
	input: &'a str,
	/// Byte offset of `input` within the full signature.
	position: usize,
	/// Set after the first error so iteration stops.
	failed: bool,
}

impl<'a> Lexer<'a> {
	/// Creates a lexer over `input`, reporting positions relative to the start of `input`.
	pub fn new(input: &'a str) -> Self {
		Self::with_offset(input, 0)
	}

	/// Creates a lexer whose reported positions are shifted by `offset`.
	///
	/// Used when `input` is the pattern part of a larger signature.
	pub fn with_offset(input: &'a str, offset: usize) -> Self {
		Self {
			input,
			position: offset,
			failed: false,
		}
	}

	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	/// Consumes the longest prefix whose characters satisfy `predicate`.
	fn take_while<F>(&mut self, predicate: F) -> &'a str
	where
		F: Fn(char) -> bool,
	{
		let len = self.input.find(|ch: char| !predicate(ch)).unwrap_or(self.input.len());
		let (taken, rest) = self.input.split_at(len);
		self.input = rest;
		self.position += len;
		taken
	}

	fn skip_whitespace(&mut self) {
		self.take_while(char::is_whitespace);
	}

	/// Skips text outside blocks up to the next `{`.
	///
	/// Returns `Ok(None)` at end of input.
	fn seek_block(&mut self) -> Result<Option<usize>, SignatureError> {
		while let Some(ch) = self.peek() {
			let position = self.position;
			match ch {
				'{' => {
					self.next_char();
					return Ok(Some(position));
				}
				'}' => {
					return Err(SignatureError::Unexpected {
						found: "'}'".to_string(),
						position,
					});
				}
				_ => {
					self.next_char();
				}
			}
		}
		Ok(None)
	}

	/// Lexes the body of a block whose `{` sits at `open`.
	fn block(&mut self, open: usize) -> Result<Block<'a>, SignatureError> {
		let mut tokens = Vec::new();

		self.skip_whitespace();
		if self.input.starts_with("--") {
			tokens.push(Token {
				kind: TokenKind::OptionMarker,
				position: self.position,
			});
			self.position += 2;
			self.input = &self.input[2..];
		}

		loop {
			let position = self.position;
			let Some(ch) = self.peek() else {
				return Err(SignatureError::Unterminated { position: open });
			};

			let kind = match ch {
				'}' => {
					self.next_char();
					return Ok(Block { position: open, tokens });
				}
				c if c.is_whitespace() => {
					self.skip_whitespace();
					continue;
				}
				c if is_ident_start(c) => TokenKind::Ident(self.take_while(is_ident_char)),
				'|' => {
					self.next_char();
					TokenKind::Pipe
				}
				'?' => {
					self.next_char();
					TokenKind::Optional
				}
				'*' => {
					self.next_char();
					TokenKind::Variadic
				}
				'=' => {
					self.next_char();
					TokenKind::Default(self.take_while(|c| c != '}' && c != ':' && !c.is_whitespace()))
				}
				':' => {
					self.next_char();
					TokenKind::Description(self.take_while(|c| c != '}'))
				}
				other => {
					return Err(SignatureError::Unexpected {
						found: format!("'{other}'"),
						position,
					});
				}
			};

			tokens.push(Token { kind, position });
		}
	}
}

impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Block<'a>, SignatureError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}

		let result = match self.seek_block() {
			Ok(Some(open)) => self.block(open),
			Ok(None) => return None,
			Err(err) => Err(err),
		};

		self.failed = result.is_err();
		Some(result)
	}
}

fn is_ident_start(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
	is_ident_start(ch) || ch == '-'
}
