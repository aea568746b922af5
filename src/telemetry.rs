//! Tracing setup for embedders and integration tests.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "dinner_jury=info";

/// Initializes the global tracing subscriber with the default filter.
///
/// `RUST_LOG` overrides the default. Safe to call more than once; only
/// the first call installs a subscriber.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes the global tracing subscriber with an explicit fallback
/// filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok();
}
