//! Word-level n-gram modeling and sentence generation.
//!
//! - Frequency tables of fixed order (`NGramModel`)
//! - Per-context candidate lists with weighted sampling (`State`)
//! - Seeded sentence generation with context back-off (`Generator`)

/// Fixed-order n-gram frequency table (`0 < n < 100`).
///
/// Built once from a token sequence, sorted by descending frequency,
/// read-only afterwards.
pub mod ngram_model;

/// Sentence generation over a built model.
///
/// Indexes the table by context prefix and extends a seed phrase
/// with weighted random sampling and back-off.
pub mod generator;

/// Candidate continuations of one context.
/// This module is not exposed publicly.
mod state;
