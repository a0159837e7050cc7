pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "challenge_core=warn";

/// Initializes the global tracing subscriber.
///
/// Events go to stderr; stdout carries the console conversation only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        if fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_err()
        {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_tolerates_existing_subscriber() {
        let existing = tracing::subscriber::NoSubscriber::default();
        let _ = tracing::subscriber::set_global_default(existing);
        init_tracing();
        init_tracing();
    }
}
