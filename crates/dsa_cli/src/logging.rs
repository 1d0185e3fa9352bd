use crate::CliConfig;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set (e.g. `RUST_LOG=dsa_recursion=trace`). Otherwise
/// `--verbose` logs everything at `debug`, and without it nothing is
/// installed. Output goes to stderr so command results stay alone on
/// stdout. Safe to call more than once; only the first call has an effect.
pub fn init_tracing(config: &CliConfig) {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if config.verbose {
            EnvFilter::new("debug")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
