//! Word-level n-gram text generation library.
//!
//! This crate provides:
//! - Corpus tokenization into lowercase alphabetic words
//! - Fixed-order n-gram frequency tables
//! - Sentence generation with weighted sampling and context back-off
//! - Loading of the XML excuse corpus and of the generator configuration
//!
//! ```no_run
//! use rs_ngram_core::{corpus, model, tokenizer};
//!
//! let text = corpus::load_text_from_xml("Excuses.xml")?;
//! let tokens = tokenizer::tokenize(&text);
//! let ngrams = model::ngram_model::NGramModel::build(&tokens, 3)?;
//! println!("{}", model::generator::generate(&ngrams, "he was", 20)?);
//! # Ok::<(), rs_ngram_core::error::NGramError>(())
//! ```

/// Core n-gram models and generation logic.
pub mod model;

/// Corpus text normalization.
pub mod tokenizer;

/// XML corpus loading.
pub mod corpus;

/// Generator configuration (TOML).
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{NGramError, Result};
