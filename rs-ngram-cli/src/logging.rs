use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter (ex. `RS_NGRAM_LOG=rs_ngram_core=debug`).
const LOG_ENV: &str = "RS_NGRAM_LOG";

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never mix with the generated sentence.
/// Falls back to `warn` when `RS_NGRAM_LOG` is unset or invalid.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
