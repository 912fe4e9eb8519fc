//! # conduct-report
//!
//! The read side of conduct. Raw records from the store are joined into
//! [`EnrichedIncident`]s, then narrowed by an [`IncidentFilter`], ordered by
//! date and time, and indexed by month.
//!
//! Everything here except [`load_sources`] and [`run_report`] is a pure
//! function over slices, so reports are recomputed from current store
//! contents on every call.

pub mod enrich;
pub mod error;
pub mod facet;
pub mod filter;
pub mod load;
pub mod natural;
pub mod sort;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use enrich::{EnrichedIncident, UNKNOWN, UNKNOWN_STUDENT, enrich};
pub use error::ReportError;
pub use facet::{month_facets, month_label};
pub use filter::IncidentFilter;
pub use load::{Sources, load_sources};
pub use natural::{natural_cmp, sort_classes};
pub use sort::{SortOrder, sort_incidents, timestamp_key};
pub use summary::{Summary, summarize};

use conduct_db::{RecordStore, Registry};
use serde::{Deserialize, Serialize};

/// What to show and in which order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub filter: IncidentFilter,
    #[serde(default)]
    pub order: SortOrder,
}

impl ReportQuery {
    /// Enrich, filter, and sort already-loaded sources.
    #[must_use]
    pub fn run(&self, sources: &Sources) -> Vec<EnrichedIncident> {
        let mut items = self.filter.apply(sources.enrich());
        sort_incidents(&mut items, self.order);
        items
    }
}

/// Load current store contents and run `query` over them.
///
/// # Errors
///
/// Returns `ReportError` if any source collection cannot be loaded.
pub async fn run_report<S: RecordStore>(
    registry: &Registry<S>,
    query: &ReportQuery,
) -> Result<Vec<EnrichedIncident>, ReportError> {
    let sources = load_sources(registry).await?;
    let items = query.run(&sources);
    tracing::debug!(matched = items.len(), total = sources.incidents.len(), "ran report");
    Ok(items)
}
