use std::path::PathBuf;

/// Errors surfaced by model building, generation and the corpus/config collaborators.
///
/// Early termination of a generation (no continuation found) is **not** an error:
/// it yields a shorter sentence through the normal `Ok` path.
#[derive(Debug, thiserror::Error)]
pub enum NGramError {
	/// A numeric parameter is outside its accepted range (ex. n-gram order).
	#[error("Invalid parameter: {0}")]
	InvalidParameter(String),

	/// Generation was requested against a model without any n-gram.
	#[error("The model is empty: the corpus is too short for the requested n-gram order")]
	EmptyModel,

	/// The corpus file does not exist.
	#[error("The file '{}' does not exist.", path.display())]
	MissingCorpus { path: PathBuf },

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The corpus is not well-formed XML.
	#[error("XML error: {0}")]
	Xml(#[from] quick_xml::Error),

	/// The configuration file is not valid TOML (or has wrongly typed keys).
	#[error("Config error: {0}")]
	Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, NGramError>;
