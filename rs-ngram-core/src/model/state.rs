use rand::Rng;

/// Candidate continuations of a single context.
///
/// A `State` corresponds to one context (a prefix of `k` tokens, `0 <= k < n`)
/// and stores, for every n-gram starting with this context, the token that
/// follows the context inside that n-gram together with the n-gram count.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - One transition per matching n-gram (two n-grams may share the same next
///   token, they are kept as separate buckets)
/// - Transitions are stored in model order (descending count, then first observation)
/// - Each transition occurrence count is strictly positive
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
	/// `(next token, occurrence)` pairs.
	transitions: Vec<(String, usize)>,
	/// Sum of all occurrences.
	total: usize,
}

impl State {
	/// Records a matching n-gram whose next token is `next_token`.
	pub fn add_transition(&mut self, next_token: &str, occurrence: usize) {
		self.transitions.push((next_token.to_owned(), occurrence));
		self.total += occurrence;
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	/// Predicts the next token using weighted random sampling.
	///
	/// Draws `r` uniformly in `[0, total)` and walks the transitions in their
	/// stored order, returning the first one whose cumulative occurrence
	/// exceeds `r`.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..self.total);
		for (next_token, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(next_token);
			}
			r -= occurrence;
		}

		// Unreachable while `total` is the sum of the occurrences
		None
	}
}
