use std::collections::HashMap;

use rand::Rng;

use crate::error::{NGramError, Result};
use crate::model::ngram_model::NGramModel;
use crate::model::state::State;

/// Sentence generator over a built `NGramModel`.
///
/// # Responsibilities
/// - Index the model by context prefix once (context -> `State`)
/// - Extend a seed phrase token by token using weighted random sampling
/// - Back off to shorter contexts when the current one was never observed
///
/// # Invariants
/// - The index holds every prefix of length `0..n` of every model n-gram
/// - Within a context, candidates keep the model order, so sampling behaves
///   exactly like a linear scan over the sorted table
#[derive(Debug)]
pub struct Generator<'m> {
	model: &'m NGramModel,
	contexts: HashMap<Vec<String>, State>,
}

impl<'m> Generator<'m> {
	/// Creates a generator for `model`, building the context index.
	///
	/// # Errors
	/// Returns `EmptyModel` if the model has no n-gram.
	pub fn new(model: &'m NGramModel) -> Result<Self> {
		if model.is_empty() {
			return Err(NGramError::EmptyModel);
		}

		let mut contexts: HashMap<Vec<String>, State> = HashMap::new();
		for (ngram, count) in model.entries() {
			for k in 0..model.n() {
				let Some(next_token) = ngram.token(k) else { break };
				contexts
					.entry(ngram.prefix(k).to_vec())
					.or_default()
					.add_transition(next_token, count);
			}
		}

		tracing::debug!(n = model.n(), contexts = contexts.len(), "context index built");

		Ok(Self { model, contexts })
	}

	/// Generates a sentence of at most `target_length` tokens using the
	/// thread-local random generator.
	pub fn generate(&self, seed_phrase: &str, target_length: usize) -> String {
		self.generate_with(seed_phrase, target_length, &mut rand::rng())
	}

	/// Generates a sentence of at most `target_length` tokens starting with
	/// `seed_phrase`, drawing from `rng`.
	///
	/// # Behavior
	/// - The seed is lowercased, trimmed and split on whitespace only. Unlike
	///   corpus tokenization, punctuation and digits are kept verbatim.
	/// - If the seed already has `target_length` tokens or more, it is
	///   returned unchanged.
	/// - Generation stops early (shorter sentence, not an error) when no
	///   context, even of length 1, matches.
	pub fn generate_with<R: Rng>(&self, seed_phrase: &str, target_length: usize, rng: &mut R) -> String {
		let mut sentence: Vec<String> = seed_phrase
			.trim()
			.to_lowercase()
			.split_whitespace()
			.map(str::to_owned)
			.collect();

		while sentence.len() < target_length {
			match self.next_token(&sentence, rng) {
				Some(token) => sentence.push(token.to_owned()),
				None => {
					tracing::debug!(
						length = sentence.len(),
						target_length,
						"no continuation found, stopping early"
					);
					break;
				}
			}
		}

		sentence.join(" ")
	}

	/// Picks the token following `sentence`.
	///
	/// The context is the last `min(n - 1, len)` tokens. While it has no
	/// candidates and is longer than one token, its leftmost token is dropped.
	fn next_token<R: Rng>(&self, sentence: &[String], rng: &mut R) -> Option<&str> {
		let context_len = (self.model.n() - 1).min(sentence.len());
		let mut context = &sentence[sentence.len() - context_len..];

		loop {
			if let Some(state) = self.contexts.get(context) {
				return state.predict(rng);
			}
			if context.len() <= 1 {
				return None;
			}
			context = &context[1..];
			tracing::trace!(context_len = context.len(), "backing off");
		}
	}
}

/// Generates a sentence from `model`, continuing `seed_phrase` up to
/// `target_length` tokens.
///
/// Convenience wrapper building a `Generator` for a single request.
///
/// # Errors
/// Returns `EmptyModel` if the model has no n-gram.
pub fn generate(model: &NGramModel, seed_phrase: &str, target_length: usize) -> Result<String> {
	Ok(Generator::new(model)?.generate(seed_phrase, target_length))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenizer::tokenize;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn model(text: &str, n: usize) -> NGramModel {
		NGramModel::build(&tokenize(text), n).unwrap()
	}

	#[test]
	fn test_empty_model_is_an_error() {
		let empty = model("he was", 3);
		assert!(matches!(Generator::new(&empty), Err(NGramError::EmptyModel)));
		assert!(matches!(generate(&empty, "he", 0), Err(NGramError::EmptyModel)));
	}

	#[test]
	fn test_context_index_covers_all_prefixes() {
		let m = model("a b c", 3);
		let generator = Generator::new(&m).unwrap();
		// [], [a], [a, b]
		assert_eq!(generator.contexts.len(), 3);
		assert_eq!(generator.contexts[&Vec::<String>::new()].len(), 1);
	}

	#[test]
	fn test_seed_longer_than_target_is_returned_unchanged() {
		let m = model("he was late", 2);
		let generator = Generator::new(&m).unwrap();
		assert_eq!(generator.generate("  He WAS  ", 1), "he was");
		assert_eq!(generator.generate("he was", 2), "he was");
	}

	#[test]
	fn test_seed_keeps_punctuation() {
		let m = model("he was late", 2);
		let generator = Generator::new(&m).unwrap();
		// "was," never matches, so generation stops right away
		assert_eq!(generator.generate("He was,", 10), "he was,");
	}

	#[test]
	fn test_stops_early_without_continuation() {
		let m = model("a b", 2);
		let generator = Generator::new(&m).unwrap();
		assert_eq!(generator.generate("b", 5), "b");
		assert_eq!(generator.generate("unknown", 5), "unknown");
		assert_eq!(generator.generate("a", 5), "a b");
	}

	#[test]
	fn test_backs_off_to_shorter_context() {
		// Trigram prefixes: (x y), (y z), (z q), (q y). "z y" is unseen but "y" is.
		let m = model("x y z q y w", 3);
		let generator = Generator::new(&m).unwrap();
		let mut rng = StdRng::seed_from_u64(0);
		let sentence = generator.generate_with("z y", 3, &mut rng);
		assert_eq!(sentence, "z y z");
	}

	#[test]
	fn test_empty_seed_samples_from_whole_table() {
		let m = model("solo", 1);
		let generator = Generator::new(&m).unwrap();
		assert_eq!(generator.generate("", 3), "solo solo solo");
	}

	#[test]
	fn test_seeded_generation_is_reproducible() {
		let m = model("the dog ate the cat and the dog ran to the park and the cat sat", 2);
		let generator = Generator::new(&m).unwrap();
		let a = generator.generate_with("the", 12, &mut StdRng::seed_from_u64(9));
		let b = generator.generate_with("the", 12, &mut StdRng::seed_from_u64(9));
		assert_eq!(a, b);
		assert!(a.starts_with("the"));
		assert!(a.split(' ').count() <= 12);
	}
}
