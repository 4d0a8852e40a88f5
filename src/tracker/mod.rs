//! Exercise tracker use cases.
//!
//! # Data Flow
//! ```text
//! POST /api/exercise/new-user → registry.rs  (create / list users)
//! POST /api/exercise/add      → recorder.rs  (validate, append entry)
//! GET  /api/exercise/log      → log_query.rs (resolve user, filter, truncate)
//! ```
//!
//! # Design Decisions
//! - Services hold only store handles and a clock; no global state
//! - Validation runs in a fixed order and the first failure wins
//! - Results are plain structs; wire shapes live in the HTTP layer

pub mod log_query;
pub mod recorder;
pub mod registry;

use mockable::Clock;
use std::sync::Arc;

use crate::store::{ExerciseStore, InMemoryStore, UserStore};

pub use log_query::{ExerciseLog, LogItem, LogQuery, LogRequest};
pub use recorder::{ExerciseRecorder, ExerciseSubmission, RecordedExercise};
pub use registry::UserRegistry;

/// Clock handle shared across services and request tasks.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// The three tracker services wired to a shared pair of stores.
#[derive(Clone)]
pub struct Tracker {
    pub registry: Arc<UserRegistry>,
    pub recorder: Arc<ExerciseRecorder>,
    pub log_query: Arc<LogQuery>,
}

impl Tracker {
    /// Wire services over the given stores and clock.
    pub fn new(
        users: Arc<dyn UserStore>,
        exercises: Arc<dyn ExerciseStore>,
        clock: SharedClock,
    ) -> Self {
        Self {
            registry: Arc::new(UserRegistry::new(users.clone())),
            recorder: Arc::new(ExerciseRecorder::new(users.clone(), exercises.clone(), clock)),
            log_query: Arc::new(LogQuery::new(users, exercises)),
        }
    }

    /// Wire services over a fresh in-memory store.
    pub fn in_memory(clock: SharedClock) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store, clock)
    }
}
