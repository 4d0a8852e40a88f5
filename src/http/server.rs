//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, CORS, body limit)
//! - Serve the static index page
//! - Bind server to listener and drain on shutdown

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, get_service, post},
    Router,
};
use mockable::DefaultClock;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeFile, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::TrackerConfig;
use crate::http::{handlers, middleware::track_metrics, request};
use crate::tracker::Tracker;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Tracker,
}

/// HTTP server for the exercise tracker.
pub struct HttpServer {
    router: Router,
    config: TrackerConfig,
}

impl HttpServer {
    /// Create a server over a fresh in-memory store and the system clock.
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_tracker(config, Tracker::in_memory(Arc::new(DefaultClock)))
    }

    /// Create a server over an already wired tracker.
    pub fn with_tracker(config: TrackerConfig, tracker: Tracker) -> Self {
        let router = Self::build_router(&config, AppState { tracker });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &TrackerConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/exercise/new-user", post(handlers::create_user))
            .route("/api/exercise/users", get(handlers::list_users))
            .route("/api/exercise/add", post(handlers::add_exercise))
            .route("/api/exercise/log", get(handlers::query_log))
            .route_layer(middleware::from_fn(track_metrics))
            .route("/", get_service(ServeFile::new(&config.site.index_path)))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(
                ServiceBuilder::new()
                    .layer(request::set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(request::make_request_span))
                    .layer(request::propagate_request_id_layer()),
            )
    }

    /// The router, for serving in-process (tests, embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
