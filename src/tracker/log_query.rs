//! Per-user exercise log queries.
//!
//! # Responsibilities
//! - Resolve the requested user
//! - Filter entries by an optional inclusive day range
//! - Head-truncate to an optional positive limit
//!
//! # Design Decisions
//! - Bounds are parsed best effort; an unparseable bound is ignored
//! - Entries with an unknown day only appear when no bound is active
//! - A limit that is absent, non-numeric, or not positive means "all"

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{non_empty, parse_leading_int, DateRange, TrackerError, UserId};
use crate::store::{ExerciseStore, UserStore};

/// Raw log query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogRequest {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// Positive head limit, if one was requested.
    fn head_limit(&self) -> Option<usize> {
        let limit = non_empty(self.limit.as_deref()).and_then(parse_leading_int)?;
        if limit > 0 {
            Some(usize::try_from(limit).unwrap_or(usize::MAX))
        } else {
            None
        }
    }

    fn date_range(&self) -> DateRange {
        DateRange::from_bounds(
            non_empty(self.from.as_deref()),
            non_empty(self.to.as_deref()),
        )
    }
}

/// One entry in a log result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    pub description: String,
    pub duration: i64,
    /// `Ddd Mon DD YYYY`, or `Invalid date`.
    pub date: String,
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user_id: UserId,
    pub username: String,
    /// Number of items in `log` after truncation.
    pub count: usize,
    pub log: Vec<LogItem>,
}

/// Answers filtered log queries.
pub struct LogQuery {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
}

impl LogQuery {
    pub fn new(users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>) -> Self {
        Self { users, exercises }
    }

    pub async fn query_log(&self, request: &LogRequest) -> Result<ExerciseLog, TrackerError> {
        let user_id = non_empty(request.user_id.as_deref())
            .map(UserId::from)
            .ok_or(TrackerError::UnknownUser("userId"))?;
        let user = self
            .users
            .find_user(&user_id)
            .await?
            .ok_or(TrackerError::UnknownUser("userId"))?;

        let range = request.date_range();
        let limit = request.head_limit();

        let log: Vec<LogItem> = self
            .exercises
            .exercises_for(&user.id)
            .await?
            .into_iter()
            .filter(|entry| range.contains(entry.date.day()))
            .take(limit.unwrap_or(usize::MAX))
            .map(|entry| LogItem {
                date: entry.date.display(),
                description: entry.description,
                duration: entry.duration_minutes,
            })
            .collect();

        tracing::debug!(
            user_id = %user.id,
            from = ?range.from,
            to = ?range.to,
            limit = ?limit,
            count = log.len(),
            "Log queried"
        );

        Ok(ExerciseLog {
            user_id: user.id,
            username: user.username,
            count: log.len(),
            log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExerciseDate, ExerciseEntry};
    use crate::store::InMemoryStore;
    use crate::tracker::UserRegistry;

    struct Fixture {
        query: LogQuery,
        store: Arc<InMemoryStore>,
        user_id: String,
    }

    impl Fixture {
        async fn new() -> Self {
            let store = Arc::new(InMemoryStore::new());
            let user = UserRegistry::new(store.clone())
                .create_user(Some("alice"))
                .await
                .unwrap();
            Self {
                query: LogQuery::new(store.clone(), store.clone()),
                store,
                user_id: user.id.to_string(),
            }
        }

        async fn add(&self, description: &str, date: &str) {
            self.add_for(&self.user_id, description, date).await;
        }

        async fn add_for(&self, user_id: &str, description: &str, date: &str) {
            self.store
                .append_exercise(ExerciseEntry {
                    user_id: UserId::from(user_id),
                    description: description.to_string(),
                    duration_minutes: 10,
                    date: ExerciseDate::supplied(date),
                })
                .await
                .unwrap();
        }

        fn request(&self) -> LogRequest {
            LogRequest::for_user(self.user_id.clone())
        }
    }

    fn descriptions(log: &ExerciseLog) -> Vec<&str> {
        log.log.iter().map(|i| i.description.as_str()).collect()
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let f = Fixture::new().await;
        let err = f.query.query_log(&LogRequest::for_user("nope")).await.unwrap_err();
        assert_eq!(err, TrackerError::UnknownUser("userId"));

        let err = f.query.query_log(&LogRequest::default()).await.unwrap_err();
        assert_eq!(err, TrackerError::UnknownUser("userId"));
    }

    #[tokio::test]
    async fn test_all_entries_in_insertion_order() {
        let f = Fixture::new().await;
        f.add("c", "2024-03-10").await;
        f.add("a", "2024-01-01").await;
        f.add("b", "2024-02-15").await;
        f.add_for("someone-else", "x", "2024-01-01").await;

        let log = f.query.query_log(&f.request()).await.unwrap();
        assert_eq!(log.username, "alice");
        assert_eq!(log.user_id.as_str(), f.user_id);
        assert_eq!(log.count, 3);
        assert_eq!(descriptions(&log), vec!["c", "a", "b"]);
        assert_eq!(log.log[0].date, "Sun Mar 10 2024");
    }

    #[tokio::test]
    async fn test_limit_is_head_truncation() {
        let f = Fixture::new().await;
        for d in ["1", "2", "3", "4", "5"] {
            f.add(d, "2024-01-01").await;
        }
        let mut req = f.request();
        req.limit = Some("2".into());

        let log = f.query.query_log(&req).await.unwrap();
        assert_eq!(log.count, 2);
        assert_eq!(descriptions(&log), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_non_positive_or_garbage_limit_ignored() {
        let f = Fixture::new().await;
        for d in ["1", "2", "3"] {
            f.add(d, "2024-01-01").await;
        }
        for limit in ["0", "-1", "many", ""] {
            let mut req = f.request();
            req.limit = Some(limit.into());
            assert_eq!(f.query.query_log(&req).await.unwrap().count, 3, "limit={limit}");
        }
    }

    #[tokio::test]
    async fn test_date_bounds_inclusive() {
        let f = Fixture::new().await;
        f.add("jan", "2024-01-15").await;
        f.add("feb", "2024-02-01").await;
        f.add("mar", "2024-03-31").await;
        f.add("apr", "2024-04-01").await;

        let mut req = f.request();
        req.from = Some("2024-02-01".into());
        req.to = Some("2024-03-31".into());
        let log = f.query.query_log(&req).await.unwrap();
        assert_eq!(descriptions(&log), vec!["feb", "mar"]);
    }

    #[tokio::test]
    async fn test_day_granularity_ignores_time() {
        let f = Fixture::new().await;
        f.add("late", "2024-02-01T23:59:00").await;

        let mut req = f.request();
        req.from = Some("2024-02-01".into());
        req.to = Some("2024-02-01T00:00:00".into());
        assert_eq!(f.query.query_log(&req).await.unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_invalid_from_behaves_like_absent() {
        let f = Fixture::new().await;
        f.add("old", "2000-01-01").await;
        f.add("new", "2024-01-01").await;

        let mut with_garbage = f.request();
        with_garbage.from = Some("not-a-date".into());
        with_garbage.to = Some("2023-12-31".into());

        let mut without = f.request();
        without.to = Some("2023-12-31".into());

        let a = f.query.query_log(&with_garbage).await.unwrap();
        let b = f.query.query_log(&without).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(descriptions(&a), vec!["old"]);
    }

    #[tokio::test]
    async fn test_limit_applies_after_filtering() {
        let f = Fixture::new().await;
        f.add("skip", "2020-01-01").await;
        f.add("keep1", "2024-01-01").await;
        f.add("keep2", "2024-01-02").await;
        f.add("drop", "2024-01-03").await;

        let mut req = f.request();
        req.from = Some("2024-01-01".into());
        req.limit = Some("2".into());
        let log = f.query.query_log(&req).await.unwrap();
        assert_eq!(descriptions(&log), vec!["keep1", "keep2"]);
    }

    #[tokio::test]
    async fn test_undated_entries_only_without_bounds() {
        let f = Fixture::new().await;
        f.add("mystery", "someday").await;
        f.add("dated", "2024-01-01").await;

        let log = f.query.query_log(&f.request()).await.unwrap();
        assert_eq!(descriptions(&log), vec!["mystery", "dated"]);
        assert_eq!(log.log[0].date, "Invalid date");

        let mut req = f.request();
        req.from = Some("1970-01-01".into());
        let log = f.query.query_log(&req).await.unwrap();
        assert_eq!(descriptions(&log), vec!["dated"]);
    }
}
