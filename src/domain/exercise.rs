//! Exercise log entries.

use chrono::NaiveDate;

use crate::domain::dates::{format_display_date, parse_calendar_date, INVALID_DATE};
use crate::domain::user::UserId;

/// The date attached to an exercise.
///
/// A caller-supplied string is kept verbatim; its calendar day is derived
/// once at creation and may be unknown when the string is not a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDate {
    raw: String,
    day: Option<NaiveDate>,
}

impl ExerciseDate {
    /// Wrap a caller-supplied date string without validating it.
    pub fn supplied(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let day = parse_calendar_date(&raw);
        Self { raw, day }
    }

    /// A known calendar day (used when the caller omits the date).
    pub fn on(day: NaiveDate) -> Self {
        Self {
            raw: day.to_string(),
            day: Some(day),
        }
    }

    /// The stored string, exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The calendar day, if the stored string is a date.
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    /// `Ddd Mon DD YYYY`, or `Invalid date` when the day is unknown.
    pub fn display(&self) -> String {
        self.day
            .map(format_display_date)
            .unwrap_or_else(|| INVALID_DATE.to_string())
    }
}

/// A recorded exercise session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub user_id: UserId,
    pub description: String,
    pub duration_minutes: i64,
    pub date: ExerciseDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_date_kept_verbatim() {
        let date = ExerciseDate::supplied("2024-03-05T10:00:00Z");
        assert_eq!(date.raw(), "2024-03-05T10:00:00Z");
        assert_eq!(date.display(), "Tue Mar 05 2024");
    }

    #[test]
    fn test_invalid_supplied_date_is_stored() {
        let date = ExerciseDate::supplied("yesterday-ish");
        assert_eq!(date.raw(), "yesterday-ish");
        assert_eq!(date.day(), None);
        assert_eq!(date.display(), "Invalid date");
    }

    #[test]
    fn test_known_day() {
        let day = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap();
        let date = ExerciseDate::on(day);
        assert_eq!(date.raw(), "2006-01-02");
        assert_eq!(date.display(), "Mon Jan 02 2006");
    }
}
