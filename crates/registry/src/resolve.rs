//! Name resolution with "did you mean" fallback.

use tracing::debug;

use crate::config::SuggestionLimits;
use crate::error::DispatchError;
use crate::registry::{CommandEntry, CommandRegistry};


/// Picks one of the suggested bases when a requested name does not match exactly.
///
/// Implementations may prompt the user; returning `None` cancels.
pub trait Chooser: Send + Sync {
	fn choose(&self, requested: &str, candidates: &[String]) -> Option<String>;
}

/// Never picks; unresolved names fail with their suggestions attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChoice;

impl Chooser for NoChoice {
	fn choose(&self, _requested: &str, _candidates: &[String]) -> Option<String> {
		None
	}
}

/// Picks the closest candidate without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestChoice;

impl Chooser for ClosestChoice {
	fn choose(&self, _requested: &str, candidates: &[String]) -> Option<String> {
		candidates.first().cloned()
	}
}

impl CommandRegistry {
	/// Resolves `requested` exactly, falling back to `chooser` over similar bases.
	///
	/// # Errors
	///
	/// [`DispatchError::CommandNotFound`] when nothing matches and the chooser declines. The
	/// error carries the suggestions, closest first.
	pub fn resolve(&self, requested: &str, limits: SuggestionLimits, chooser: &dyn Chooser) -> Result<&CommandEntry, DispatchError> {
		if let Some(entry) = self.get(requested) {
			return Ok(entry);
		}

		let suggestions: Vec<String> = self.suggest(requested, limits).into_iter().map(|s| s.base).collect();
		debug!(requested, suggestions = suggestions.len(), "no exact command match");

		if !suggestions.is_empty()
			&& let Some(choice) = chooser.choose(requested, &suggestions)
			&& let Some(entry) = self.get(&choice)
		{
			debug!(requested, chosen = entry.base(), "resolved through suggestion");
			return Ok(entry);
		}

		Err(DispatchError::CommandNotFound {
			base: requested.to_string(),
			suggestions,
		})
	}
}
