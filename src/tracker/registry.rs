//! User registration.

use std::sync::Arc;

use crate::domain::{non_empty, StoreError, TrackerError, User, UserId};
use crate::store::UserStore;

/// Attempts before giving up on generating an unused id.
const ID_ATTEMPTS: usize = 3;

/// Creates and lists users, enforcing username uniqueness.
pub struct UserRegistry {
    users: Arc<dyn UserStore>,
}

impl UserRegistry {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register `username` under a freshly generated id.
    pub async fn create_user(&self, username: Option<&str>) -> Result<User, TrackerError> {
        let username = non_empty(username).ok_or(TrackerError::MissingField("username"))?;

        let mut attempts = 0;
        loop {
            attempts += 1;
            let candidate = User::new(UserId::generate(), username);
            match self.users.insert_user(candidate).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, username = %user.username, "User created");
                    return Ok(user);
                }
                Err(StoreError::UsernameTaken) => return Err(TrackerError::DuplicateUsername),
                Err(StoreError::DuplicateId) if attempts < ID_ATTEMPTS => {
                    tracing::warn!(attempt = attempts, "Generated user id collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// All users in creation order.
    pub async fn list_users(&self) -> Result<Vec<User>, TrackerError> {
        Ok(self.users.list_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn registry() -> UserRegistry {
        UserRegistry::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_user() {
        let registry = registry();
        let user = registry.create_user(Some("alice")).await.unwrap();
        assert_eq!(user.username, "alice");
        assert!(!user.id.as_str().is_empty());
    }

    #[tokio::test]
    async fn test_fresh_usernames_get_distinct_ids() {
        let registry = registry();
        let a = registry.create_user(Some("alice")).await.unwrap();
        let b = registry.create_user(Some("bob")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let registry = registry();
        registry.create_user(Some("alice")).await.unwrap();
        let err = registry.create_user(Some("alice")).await.unwrap_err();
        assert_eq!(err, TrackerError::DuplicateUsername);
    }

    #[tokio::test]
    async fn test_username_match_is_exact() {
        let registry = registry();
        registry.create_user(Some("alice")).await.unwrap();
        assert!(registry.create_user(Some("Alice")).await.is_ok());
        assert!(registry.create_user(Some("alice ")).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_username() {
        let registry = registry();
        assert_eq!(
            registry.create_user(None).await.unwrap_err(),
            TrackerError::MissingField("username")
        );
        assert_eq!(
            registry.create_user(Some("")).await.unwrap_err(),
            TrackerError::MissingField("username")
        );
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let registry = registry();
        for name in ["carol", "alice", "bob"] {
            registry.create_user(Some(name)).await.unwrap();
        }
        let names: Vec<_> = registry
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }
}
