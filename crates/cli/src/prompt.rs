use std::io::{self, BufRead, Write};

use artisan_registry::Chooser;

/// Asks on the terminal which suggestion was meant.
pub struct PromptChooser;

impl Chooser for PromptChooser {
	fn choose(&self, requested: &str, candidates: &[String]) -> Option<String> {
		let mut input = io::stdin().lock();
		let mut out = io::stderr().lock();
		ask(requested, candidates, &mut input, &mut out).ok().flatten()
	}
}

/// Lists `candidates` and reads an index; an empty answer picks the first.
///
/// Returns `None` on end of input or an answer that is not a listed index.
pub(crate) fn ask(requested: &str, candidates: &[String], input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<Option<String>> {
	writeln!(out, "Command \"{requested}\" is not defined. Did you mean one of these?")?;
	for (index, base) in candidates.iter().enumerate() {
		writeln!(out, "  [{index}] {base}")?;
	}
	write!(out, "> ")?;
	out.flush()?;

	let mut answer = String::new();
	if input.read_line(&mut answer)? == 0 {
		return Ok(None);
	}

	let answer = answer.trim();
	let index = if answer.is_empty() {
		0
	} else {
		match answer.parse::<usize>() {
			Ok(index) => index,
			Err(_) => return Ok(None),
		}
	};
	Ok(candidates.get(index).cloned())
}
