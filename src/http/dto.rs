//! Wire representations of tracker results.
//!
//! Field order and names (`_id`) match the public JSON contract.

use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::tracker::{ExerciseLog, LogItem, RecordedExercise};

/// Form body of `POST /api/exercise/new-user`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUserForm {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseView {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<RecordedExercise> for ExerciseView {
    fn from(recorded: RecordedExercise) -> Self {
        Self {
            username: recorded.username,
            id: recorded.user_id.to_string(),
            description: recorded.description,
            duration: recorded.duration,
            date: recorded.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogItemView {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<LogItem> for LogItemView {
    fn from(item: LogItem) -> Self {
        Self {
            description: item.description,
            duration: item.duration,
            date: item.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogView {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogItemView>,
}

impl From<ExerciseLog> for LogView {
    fn from(log: ExerciseLog) -> Self {
        Self {
            id: log.user_id.to_string(),
            username: log.username,
            count: log.count,
            log: log.log.into_iter().map(LogItemView::from).collect(),
        }
    }
}
