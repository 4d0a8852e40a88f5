//! Exercise tracker service.
//!
//! A small REST service for users and their exercise logs, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server (request id, trace, timeout, cors)
//!                          │
//!                          ▼
//!                      http::handlers ──▶ tracker::{registry, recorder, log_query}
//!                          │                          │
//!                          ▼                          ▼
//!     Client Response  http::dto / response      store (UserStore, ExerciseStore)
//!     ◀───────────────                                │
//!                                                     ▼
//!                                              store::memory (in-process)
//!
//!     Cross-cutting: config, observability (logging, metrics), lifecycle
//! ```

use clap::Parser;
use std::path::PathBuf;

use exercise_tracker::{config, lifecycle, observability};

#[derive(Parser)]
#[command(name = "exercise-tracker")]
#[command(about = "REST service for users and their exercise logs", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    observability::logging::init(&config.observability.log_level);
    tracing::info!("exercise-tracker v{} starting", env!("CARGO_PKG_VERSION"));

    lifecycle::startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
