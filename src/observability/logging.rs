//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured events
//! - `RUST_LOG` takes precedence over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor config say otherwise.
pub const DEFAULT_FILTER: &str = "exercise_tracker=info,tower_http=info";

/// Initialize the global subscriber.
///
/// `level` is either a bare level (`debug`) applied to this crate and
/// tower-http, or a full filter directive string.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize a subscriber that writes through the test harness.
/// Safe to call from many tests.
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

fn filter_for(level: &str) -> EnvFilter {
    let directives = if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("exercise_tracker={level},tower_http={level}")
    };
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
