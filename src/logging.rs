//! Diagnostic logging on stderr, enabled by `--debug`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CalError;

/// Install the global subscriber. `RUST_LOG` overrides the level chosen here.
pub fn init_logger(debug: bool) -> Result<(), CalError> {
    let default_filter = if debug {
        "cal=debug,holiday_cache=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()
        .map_err(|e| CalError::Resource(format!("Unable to initialise logging: {e}")))
}
