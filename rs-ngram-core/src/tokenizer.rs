/// Splits raw corpus text into lowercase word tokens.
///
/// - The whole input is lowercased first.
/// - Any maximal run of characters outside `[A-Za-z]` (digits, punctuation,
///   whitespace, non-ASCII letters) acts as a separator.
/// - Empty pieces are discarded, so `""` yields an empty vector.
///
/// # Notes
/// Seed phrases given to the generator are **not** tokenized this way, they are
/// only split on whitespace (see `Generator::generate_with`).
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !c.is_ascii_alphabetic())
		.filter(|word| !word.is_empty())
		.map(str::to_owned)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_splits_on_any_non_alphabetic_run() {
		assert_eq!(tokenize("A1b, C-D"), vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn test_empty_and_separator_only_inputs() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  42 -- !? \n").is_empty());
	}

	#[test]
	fn test_lowercases_and_drops_non_ascii_letters() {
		assert_eq!(tokenize("He WAS late, again!"), vec!["he", "was", "late", "again"]);
		assert_eq!(tokenize("caf\u{e9} ok"), vec!["caf", "ok"]);
	}

	#[test]
	fn test_apostrophes_split_words() {
		assert_eq!(tokenize("I don't know"), vec!["i", "don", "t", "know"]);
	}
}
