use std::io;

use anyhow::Context;
use rs_ngram_core::NGramError;
use rs_ngram_core::config::GeneratorConfig;
use rs_ngram_core::corpus::load_text_from_xml;
use rs_ngram_core::model::generator::Generator;
use rs_ngram_core::model::ngram_model::NGramModel;
use rs_ngram_core::tokenizer::tokenize;

mod logging;
mod prompt;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    // Optional TOML file named by RS_NGRAM_CONFIG, defaults otherwise
    let config = GeneratorConfig::from_env().context("Failed to load configuration")?;

    // The corpus is checked before asking anything
    let text = match load_text_from_xml(&config.corpus_path) {
        Ok(text) => text,
        Err(e @ NGramError::MissingCorpus { .. }) => {
            println!("Error: {e}");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to load corpus"),
    };
    let words = tokenize(&text);
    tracing::info!(tokens = words.len(), "corpus tokenized");

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let start_word = prompt::ask(
        &mut input,
        &mut output,
        "Enter the starting word (e.g., he, he was, etc.): ",
    )?
    .trim()
    .to_lowercase();

    let order = prompt::ask(
        &mut input,
        &mut output,
        "Enter the size of the n-gram (e.g., 2 for bigram, 3 for trigram, etc.): ",
    )?;
    let n = match prompt::parse_ngram_order(&order) {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(error = %e, "rejected n-gram size");
            println!("Invalid n-gram size. Please enter an integer between 2 and 99.");
            return Ok(());
        }
    };

    let model = NGramModel::build(&words, n)?;
    for (ngram, count) in model.most_common(5) {
        tracing::debug!(%ngram, count, "frequent n-gram");
    }

    let generator = Generator::new(&model)
        .with_context(|| format!("Cannot generate with a {n}-gram model"))?;
    let sentence = generator.generate(&start_word, config.sentence_length);

    println!("\n{}", prompt::announce(n, &start_word, &sentence));

    Ok(())
}
