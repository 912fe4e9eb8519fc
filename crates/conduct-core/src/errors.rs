//! Cross-cutting error types for conduct.
//!
//! Domain-specific errors (e.g., `StoreError`, `ReportError`) are defined in
//! their respective crates. A unified error is deferred to `conduct-cli`
//! where all crate errors converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any conduct crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A resource kind outside the whitelist was requested.
    #[error("Invalid kind: {0}")]
    InvalidKind(String),

    /// A record does not have the shape its kind requires.
    #[error("Invalid {kind} record: {reason}")]
    InvalidRecord { kind: String, reason: String },

    /// The system entropy source could not be read.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
