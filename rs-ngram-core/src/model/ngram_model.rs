use std::collections::HashMap;
use std::fmt;

use crate::error::{NGramError, Result};

/// Exclusive upper bound of the n-gram order.
pub const MAX_ORDER: usize = 100;

/// A fixed-length sequence of consecutive word tokens.
///
/// Equality and hashing are component-wise over the tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NGram(Vec<String>);

impl NGram {
	/// Number of tokens (the model order `n`).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn tokens(&self) -> &[String] {
		&self.0
	}

	/// Returns the first `len` tokens, or the whole n-gram if `len` is larger.
	pub fn prefix(&self, len: usize) -> &[String] {
		&self.0[..len.min(self.0.len())]
	}

	/// Returns the token at `index`, if any.
	pub fn token(&self, index: usize) -> Option<&str> {
		self.0.get(index).map(String::as_str)
	}
}

impl From<&[&str]> for NGram {
	fn from(tokens: &[&str]) -> Self {
		Self(tokens.iter().map(|t| (*t).to_owned()).collect())
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.0.join(", "))
	}
}

/// Frequency table of word n-grams of a fixed order.
///
/// The `NGramModel` counts every window of `n` consecutive tokens of a corpus
/// and exposes the result as `(NGram, count)` pairs sorted by descending count.
///
/// # Responsibilities
/// - Build the table from a token sequence (sliding window)
/// - Keep a stable, reproducible order for equal counts
/// - Provide read-only access for generation
///
/// # Invariants
/// - `0 < n < MAX_ORDER`
/// - Every key has exactly `n` tokens
/// - Every count is >= 1
/// - `entries` is sorted by count descending; equal counts keep the order in
///   which each n-gram was first observed
/// - Immutable once built
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of tokens in each n-gram)
	n: usize,

	/// Sorted `(n-gram, count)` pairs
	entries: Vec<(NGram, usize)>,

	/// Position of each n-gram in `entries`
	positions: HashMap<NGram, usize>,
}

impl NGramModel {
	/// Builds an n-gram model of order `n` from a token sequence.
	///
	/// A window of width `n` slides from index `0` to `tokens.len() - n`
	/// (inclusive). A sequence shorter than `n` produces an empty model.
	///
	/// # Errors
	/// Returns `InvalidParameter` if `n == 0` or `n >= MAX_ORDER`.
	pub fn build<S: AsRef<str>>(tokens: &[S], n: usize) -> Result<Self> {
		if n == 0 || n >= MAX_ORDER {
			return Err(NGramError::InvalidParameter(format!(
				"n must be between 1 and {}, got {}",
				MAX_ORDER - 1,
				n
			)));
		}

		// Accumulate in first-observation order
		let mut entries: Vec<(NGram, usize)> = Vec::new();
		let mut first_seen: HashMap<NGram, usize> = HashMap::new();
		for window in tokens.windows(n) {
			let key = NGram(window.iter().map(|t| t.as_ref().to_owned()).collect());
			match first_seen.get(&key) {
				Some(&index) => entries[index].1 += 1,
				None => {
					first_seen.insert(key.clone(), entries.len());
					entries.push((key, 1));
				}
			}
		}

		// Stable: ties keep the first-observation order
		entries.sort_by(|a, b| b.1.cmp(&a.1));

		let positions = entries
			.iter()
			.enumerate()
			.map(|(index, (ngram, _))| (ngram.clone(), index))
			.collect();

		tracing::debug!(
			n,
			tokens = tokens.len(),
			distinct = entries.len(),
			"n-gram model built"
		);

		Ok(Self { n, entries, positions })
	}

	/// Returns the order of the model.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all counts, i.e. the number of windows observed.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(|(_, count)| count).sum()
	}

	/// Iterates over `(n-gram, count)` pairs by descending count.
	pub fn entries(&self) -> impl Iterator<Item = (&NGram, usize)> {
		self.entries.iter().map(|(ngram, count)| (ngram, *count))
	}

	/// Returns how many times `ngram` was observed (0 if never).
	pub fn count(&self, ngram: &NGram) -> usize {
		self.positions
			.get(ngram)
			.map(|&index| self.entries[index].1)
			.unwrap_or(0)
	}

	/// Returns the `k` most frequent n-grams.
	pub fn most_common(&self, k: usize) -> &[(NGram, usize)] {
		&self.entries[..k.min(self.entries.len())]
	}
}
