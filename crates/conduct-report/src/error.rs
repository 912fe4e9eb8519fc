//! Report engine error types.

use conduct_db::StoreError;
use thiserror::Error;

/// Errors from building a report.
///
/// Dangling links never surface here; they degrade to placeholder text.
#[derive(Debug, Error)]
pub enum ReportError {
    /// One of the source reads failed; the whole projection is abandoned.
    #[error("Failed to load {kind}: {source}")]
    Load {
        kind: &'static str,
        #[source]
        source: StoreError,
    },
}
