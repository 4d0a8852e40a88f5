//! Exercise recording.
//!
//! # Validation Order
//! The first failing check decides the error:
//! 1. `userId` present and known      → `unknown _id`
//! 2. `duration` has a leading integer → ``Path `duration` is required.``
//! 3. `description` present           → ``Path `description` is required.``
//! 4. `duration >= 1`                  → `duration too short`
//!
//! A supplied `date` is stored verbatim; an omitted one defaults to today.

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{
    non_empty, parse_leading_int, ExerciseDate, ExerciseEntry, TrackerError, UserId,
};
use crate::observability::metrics;
use crate::store::{ExerciseStore, UserStore};
use crate::tracker::SharedClock;

/// Raw exercise fields as submitted by a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseSubmission {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// A successfully recorded exercise joined with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedExercise {
    pub username: String,
    pub user_id: UserId,
    pub description: String,
    pub duration: i64,
    /// `Ddd Mon DD YYYY`.
    pub date: String,
}

/// Validates submissions and appends exercise entries.
pub struct ExerciseRecorder {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
    clock: SharedClock,
}

impl ExerciseRecorder {
    pub fn new(
        users: Arc<dyn UserStore>,
        exercises: Arc<dyn ExerciseStore>,
        clock: SharedClock,
    ) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }

    /// Validate `submission` and append it to the owner's log.
    pub async fn add_exercise(
        &self,
        submission: &ExerciseSubmission,
    ) -> Result<RecordedExercise, TrackerError> {
        let user_id = non_empty(submission.user_id.as_deref())
            .map(UserId::from)
            .ok_or(TrackerError::UnknownUser("_id"))?;
        let user = self
            .users
            .find_user(&user_id)
            .await?
            .ok_or(TrackerError::UnknownUser("_id"))?;

        let duration = submission
            .duration
            .as_deref()
            .and_then(parse_leading_int)
            .ok_or(TrackerError::MissingField("duration"))?;

        let description = non_empty(submission.description.as_deref())
            .ok_or(TrackerError::MissingField("description"))?;

        if duration < 1 {
            return Err(TrackerError::InvalidValue("duration too short"));
        }

        let date = match non_empty(submission.date.as_deref()) {
            Some(raw) => ExerciseDate::supplied(raw),
            None => ExerciseDate::on(self.clock.local().date_naive()),
        };

        let entry = ExerciseEntry {
            user_id: user.id.clone(),
            description: description.to_string(),
            duration_minutes: duration,
            date,
        };
        let display_date = entry.date.display();
        self.exercises.append_exercise(entry).await?;

        metrics::record_exercise_added();
        tracing::info!(
            user_id = %user.id,
            duration,
            date = %display_date,
            "Exercise recorded"
        );

        Ok(RecordedExercise {
            username: user.username,
            user_id: user.id,
            description: description.to_string(),
            duration,
            date: display_date,
        })
    }
}
