use std::io::{self, BufRead, Write};

use rs_ngram_core::NGramError;
use rs_ngram_core::model::ngram_model::MAX_ORDER;

/// Prints `message` and reads one line of user input (without the line break).
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Validates the n-gram order typed by the user.
///
/// Order 1 is refused here: a unigram model has no context to back off from.
///
/// # Errors
/// Returns `InvalidParameter` if the input is not an integer with `1 < n < 100`.
pub fn parse_ngram_order(input: &str) -> Result<usize, NGramError> {
    let invalid = || NGramError::InvalidParameter(format!("invalid n-gram size {:?}", input.trim()));
    let n: usize = input.trim().parse().map_err(|_| invalid())?;
    if !(2..MAX_ORDER).contains(&n) {
        return Err(invalid());
    }
    Ok(n)
}

/// Formats the line announcing a generated sentence.
pub fn announce(n: usize, start_word: &str, sentence: &str) -> String {
    format!("Generating a {n}-gram sentence starting with '{start_word}': \"{sentence}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_orders_between_2_and_99() {
        assert_eq!(parse_ngram_order("2").unwrap(), 2);
        assert_eq!(parse_ngram_order(" 3 \n").unwrap(), 3);
        assert_eq!(parse_ngram_order("99").unwrap(), 99);
    }

    #[test]
    fn test_rejects_everything_else() {
        for input in ["1", "0", "100", "-2", "2.5", "three", ""] {
            assert!(
                matches!(parse_ngram_order(input), Err(NGramError::InvalidParameter(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ask_prints_message_and_reads_line() {
        let mut input = Cursor::new("He was\r\nignored\n");
        let mut output = Vec::new();
        let answer = ask(&mut input, &mut output, "Start: ").unwrap();
        assert_eq!(answer, "He was");
        assert_eq!(output, b"Start: ");
    }

    #[test]
    fn test_ask_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(ask(&mut input, &mut output, "> ").unwrap(), "");
    }

    #[test]
    fn test_announce_wraps_sentence_in_quotes() {
        assert_eq!(
            announce(3, "he was", "he was late again"),
            "Generating a 3-gram sentence starting with 'he was': \"he was late again\""
        );
    }
}
