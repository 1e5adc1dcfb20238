//! Application configuration loaded from TOML.
//!
//! ```toml
//! name = "Artisan"
//! global-options = "{--h|help: Show help of a command} {--v|verbose: Get verbose output}"
//! option-values = "inline-or-positional"
//!
//! [suggestions]
//! threshold = 3
//! max = 5
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::io;
use std::path::{Path, PathBuf};

use artisan_matcher::{DISTANCE_THRESHOLD, MAX_SUGGESTIONS};
use artisan_signature::OptionValueSource;
use serde::Deserialize;
use thiserror::Error;


/// Options prepended to every command's pattern.
pub const DEFAULT_GLOBAL_OPTIONS: &str = "{--h|help: Show help of a command} {--v|verbose: Get verbose output}";

/// Banner name printed on the root screen.
pub const DEFAULT_NAME: &str = "Artisan";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ArtisanConfig {
	/// Banner printed above the root screen. Empty disables it.
	pub name: String,
	/// Bare pattern of options available to every command.
	pub global_options: String,
	pub suggestions: SuggestionLimits,
	/// Whether value options may take their value from the next positional token.
	pub option_values: OptionValueSource,
}

impl Default for ArtisanConfig {
	fn default() -> Self {
		Self {
			name: DEFAULT_NAME.to_string(),
			global_options: DEFAULT_GLOBAL_OPTIONS.to_string(),
			suggestions: SuggestionLimits::default(),
			option_values: OptionValueSource::default(),
		}
	}
}

/// Limits for "did you mean" suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestionLimits {
	/// Maximum edit distance of a suggested base.
	pub threshold: usize,
	/// Maximum number of suggestions collected.
	pub max: usize,
}

impl Default for SuggestionLimits {
	fn default() -> Self {
		Self {
			threshold: DISTANCE_THRESHOLD,
			max: MAX_SUGGESTIONS,
		}
	}
}

/// Errors loading an [`ArtisanConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read {}: {error}", path.display())]
	Io { path: PathBuf, error: io::Error },
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

impl ArtisanConfig {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses the file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}
}
