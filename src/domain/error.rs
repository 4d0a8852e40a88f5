//! Domain and storage error definitions.

use thiserror::Error;

/// Errors surfaced by the tracker operations.
///
/// Every validation variant renders as the exact plain-text body returned to
/// clients with a 400 status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A required field was absent, empty, or (for `duration`) not numeric.
    #[error("Path `{0}` is required.")]
    MissingField(&'static str),

    /// Another user already owns this username.
    #[error("username already taken")]
    DuplicateUsername,

    /// The referenced user id is missing or does not resolve.
    /// Carries the parameter name used by the caller (`_id` or `userId`).
    #[error("unknown {0}")]
    UnknownUser(&'static str),

    /// A field was present but its value is out of range.
    #[error("{0}")]
    InvalidValue(&'static str),

    /// The backing store failed.
    #[error("internal error")]
    Store(#[from] StoreError),
}

impl TrackerError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            TrackerError::MissingField(_) => "missing_field",
            TrackerError::DuplicateUsername => "duplicate_username",
            TrackerError::UnknownUser(_) => "unknown_user",
            TrackerError::InvalidValue(_) => "invalid_value",
            TrackerError::Store(_) => "store",
        }
    }

    /// Returns true for errors caused by client input.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TrackerError::Store(_))
    }
}

/// Errors raised by store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A user with the same username already exists.
    #[error("username already present")]
    UsernameTaken,

    /// A user with the same id already exists.
    #[error("user id already present")]
    DuplicateId,

    /// A collection lock was poisoned by a panicking writer.
    #[error("{0} collection lock poisoned")]
    Poisoned(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            TrackerError::MissingField("username").to_string(),
            "Path `username` is required."
        );
        assert_eq!(
            TrackerError::MissingField("duration").to_string(),
            "Path `duration` is required."
        );
        assert_eq!(TrackerError::DuplicateUsername.to_string(), "username already taken");
        assert_eq!(TrackerError::UnknownUser("_id").to_string(), "unknown _id");
        assert_eq!(TrackerError::UnknownUser("userId").to_string(), "unknown userId");
        assert_eq!(
            TrackerError::InvalidValue("duration too short").to_string(),
            "duration too short"
        );
    }

    #[test]
    fn test_store_errors_are_not_validation() {
        let err: TrackerError = StoreError::Poisoned("users").into();
        assert!(!err.is_validation());
        assert_eq!(err.reason(), "store");
        assert!(TrackerError::DuplicateUsername.is_validation());
    }
}
