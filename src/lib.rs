//! Exercise tracker service library.

pub mod config;
pub mod domain;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod tracker;

pub use config::TrackerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use tracker::Tracker;
