//! Domain model for the exercise tracker.
//!
//! # Data Flow
//! ```text
//! raw form / query strings
//!     → params.rs (leading-integer parse, presence checks)
//!     → dates.rs (best-effort calendar date parse)
//!     → user.rs / exercise.rs (immutable records)
//!     → error.rs (one variant per wire message)
//! ```
//!
//! # Design Decisions
//! - Records are immutable once created; collections are append-only
//! - Parsing is lenient and explicit: bad optional input degrades to "absent"
//! - Error `Display` strings are the exact plain-text bodies sent to clients

pub mod dates;
pub mod error;
pub mod exercise;
pub mod params;
pub mod user;

pub use dates::{format_display_date, parse_calendar_date, DateRange};
pub use error::{StoreError, TrackerError};
pub use exercise::{ExerciseDate, ExerciseEntry};
pub use params::{non_empty, parse_leading_int};
pub use user::{User, UserId};
