//! In-memory store backed by locked vectors.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ExerciseEntry, StoreError, User, UserId};
use crate::observability::metrics;
use crate::store::{ExerciseStore, UserStore};

/// Process-lifetime store for users and exercises.
///
/// Each collection sits behind its own lock; every read-modify-write
/// happens while holding the write guard.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<ExerciseEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Poisoned("users"))?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken);
        }
        if users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::DuplicateId);
        }

        users.push(user.clone());
        metrics::record_user_count(users.len());
        Ok(user)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Poisoned("users"))?;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Poisoned("users"))?;
        Ok(users.clone())
    }
}

#[async_trait]
impl ExerciseStore for InMemoryStore {
    async fn append_exercise(&self, entry: ExerciseEntry) -> Result<(), StoreError> {
        let mut exercises = self
            .exercises
            .write()
            .map_err(|_| StoreError::Poisoned("exercises"))?;
        exercises.push(entry);
        Ok(())
    }

    async fn exercises_for(&self, user_id: &UserId) -> Result<Vec<ExerciseEntry>, StoreError> {
        let exercises = self
            .exercises
            .read()
            .map_err(|_| StoreError::Poisoned("exercises"))?;
        Ok(exercises
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect())
    }
}
