//! Conjunctive incident filter.

use serde::{Deserialize, Serialize};

use conduct_core::enums::{IncidentCategory, IncidentStatus};

use crate::enrich::EnrichedIncident;

/// Five independent predicates joined by AND. An unset predicate matches
/// everything, so the default filter keeps every incident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentFilter {
    /// Case-insensitive substring of the student name or the description.
    pub search: Option<String>,
    pub status: Option<IncidentStatus>,
    pub category: Option<IncidentCategory>,
    /// Resolved class id; incidents whose class is unknown never match.
    pub class_id: Option<String>,
    /// `YYYY-MM` prefix of the incident date.
    pub month: Option<String>,
}

impl IncidentFilter {
    #[must_use]
    pub fn matches(&self, item: &EnrichedIncident) -> bool {
        self.matches_search(item)
            && self.status.is_none_or(|s| item.incident.status == s)
            && self.category.is_none_or(|c| item.incident.category == c)
            && self
                .class_id
                .as_deref()
                .is_none_or(|id| item.class_id.as_deref() == Some(id))
            && self
                .month
                .as_deref()
                .is_none_or(|m| item.incident.date.starts_with(m))
    }

    fn matches_search(&self, item: &EnrichedIncident) -> bool {
        let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        item.student_name.to_lowercase().contains(&term)
            || item.incident.description.to_lowercase().contains(&term)
    }

    /// Keep only matching incidents, preserving order.
    #[must_use]
    pub fn apply(&self, items: Vec<EnrichedIncident>) -> Vec<EnrichedIncident> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.class_id.is_none()
            && self.month.is_none()
    }
}
