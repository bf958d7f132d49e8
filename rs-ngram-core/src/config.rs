use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NGramError, Result};

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "RS_NGRAM_CONFIG";

/// Settings of a generation run.
///
/// Every key is optional in the TOML file; missing keys take the default value.
///
/// ```toml
/// corpus_path = "data/Excuses.xml"
/// sentence_length = 20
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
	/// XML corpus to learn from.
	pub corpus_path: PathBuf,

	/// Number of tokens of a generated sentence (seed included).
	pub sentence_length: usize,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			corpus_path: PathBuf::from("Excuses.xml"),
			sentence_length: 20,
		}
	}
}

impl GeneratorConfig {
	/// Parses a configuration from TOML text.
	///
	/// # Errors
	/// - `Config` if the text is not valid TOML or a key has the wrong type
	/// - `InvalidParameter` if `sentence_length` is 0
	pub fn from_toml(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads a configuration file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let text = fs::read_to_string(path.as_ref())?;
		let config = Self::from_toml(&text)?;
		tracing::debug!(path = %path.as_ref().display(), ?config, "configuration loaded");
		Ok(config)
	}

	/// Reads the file named by `RS_NGRAM_CONFIG`, or returns the defaults
	/// when the variable is not set.
	pub fn from_env() -> Result<Self> {
		match env::var_os(CONFIG_ENV) {
			Some(path) => Self::load(PathBuf::from(path)),
			None => Ok(Self::default()),
		}
	}

	fn validate(&self) -> Result<()> {
		if self.sentence_length == 0 {
			return Err(NGramError::InvalidParameter(
				"sentence_length must be greater than 0".to_owned(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_defaults_for_missing_keys() {
		let config = GeneratorConfig::from_toml("").unwrap();
		assert_eq!(config, GeneratorConfig::default());
		assert_eq!(config.sentence_length, 20);

		let config = GeneratorConfig::from_toml("sentence_length = 8").unwrap();
		assert_eq!(config.sentence_length, 8);
		assert_eq!(config.corpus_path, PathBuf::from("Excuses.xml"));
	}

	#[test]
	fn test_rejects_invalid_values() {
		assert!(matches!(
			GeneratorConfig::from_toml("sentence_length = 0"),
			Err(NGramError::InvalidParameter(_))
		));
		assert!(matches!(
			GeneratorConfig::from_toml("sentence_length = \"long\""),
			Err(NGramError::Config(_))
		));
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "corpus_path = \"data/excuses.xml\"\nsentence_length = 12").unwrap();
		let config = GeneratorConfig::load(file.path()).unwrap();
		assert_eq!(config.corpus_path, PathBuf::from("data/excuses.xml"));
		assert_eq!(config.sentence_length, 12);
	}
}
