//! Error responses.
//!
//! # Design Decisions
//! - Validation failures are 400 with the error's exact message as a
//!   plain-text body
//! - Store failures are 500 with a generic body; details stay in the logs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::TrackerError;
use crate::observability::metrics;

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            metrics::record_validation_failure(self.reason());
            tracing::debug!(reason = self.reason(), message = %self, "Request rejected");
            (StatusCode::BAD_REQUEST, self.to_string()).into_response()
        } else {
            tracing::error!(error = ?self, "Store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
        }
    }
}
