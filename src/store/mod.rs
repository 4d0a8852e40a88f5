//! Storage ports for users and exercise entries.
//!
//! # Data Flow
//! ```text
//! tracker services
//!     → UserStore / ExerciseStore (async traits, injected as Arc<dyn _>)
//!     → memory.rs (process-lifetime collections)
//! ```
//!
//! # Design Decisions
//! - Collections are append-only; there is no update or delete
//! - Username uniqueness is enforced inside the store write so the
//!   check and the append cannot interleave with another writer
//! - Reads return owned snapshots; no lock outlives a call

pub mod memory;

use async_trait::async_trait;

use crate::domain::{ExerciseEntry, StoreError, User, UserId};

pub use memory::InMemoryStore;

/// Persistence port for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a user.
    ///
    /// Fails with [`StoreError::UsernameTaken`] when the username exists and
    /// with [`StoreError::DuplicateId`] when the id exists.
    async fn insert_user(&self, user: User) -> Result<User, StoreError>;

    /// Look up a user by id.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// All users in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

/// Persistence port for exercise entries.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Append an entry.
    async fn append_exercise(&self, entry: ExerciseEntry) -> Result<(), StoreError>;

    /// Entries belonging to `user_id`, in insertion order.
    async fn exercises_for(&self, user_id: &UserId) -> Result<Vec<ExerciseEntry>, StoreError>;
}
