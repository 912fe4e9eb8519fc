//! Record store error types for conduct-db.

use conduct_core::errors::CoreError;
use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Kind whitelist violations and other core errors.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A write payload has no usable primary key.
    #[error("Missing primary key '{0}' in payload")]
    MissingKey(&'static str),

    /// A write payload is not a well-formed record for its kind.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A stored record cannot be decoded as its entity shape.
    #[error("Corrupt {kind} record '{id}': {reason}")]
    Corrupt {
        kind: String,
        id: String,
        reason: String,
    },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema bootstrap failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Invalid internal state (e.g., a poisoned lock).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Whether the caller sent something the store refuses, as opposed to the
    /// store itself failing.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::InvalidKind(_)) | Self::MissingKey(_) | Self::MalformedPayload(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_are_classified() {
        assert!(StoreError::MissingKey("id").is_caller_error());
        assert!(StoreError::MalformedPayload("x".into()).is_caller_error());
        assert!(StoreError::Core(CoreError::InvalidKind("users".into())).is_caller_error());
        assert!(!StoreError::Query("boom".into()).is_caller_error());
        assert!(
            !StoreError::Corrupt {
                kind: "incidents".into(),
                id: "inc-1".into(),
                reason: "bad status".into(),
            }
            .is_caller_error()
        );
    }

    #[test]
    fn invalid_kind_message_passes_through() {
        let err = StoreError::from(CoreError::InvalidKind("users".into()));
        assert_eq!(err.to_string(), "Invalid kind: users");
    }
}
