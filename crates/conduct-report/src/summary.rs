//! Dashboard figures.

use std::cmp::Reverse;

use serde::Serialize;

use conduct_core::entities::Incident;
use conduct_core::enums::IncidentStatus;

/// How many recently created incidents the dashboard lists.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub monitoring: usize,
    pub total: usize,
    /// Most recently created first.
    pub recent: Vec<Incident>,
}

#[must_use]
pub fn summarize(incidents: &[Incident]) -> Summary {
    let mut summary = Summary {
        total: incidents.len(),
        ..Summary::default()
    };
    for incident in incidents {
        match incident.status {
            IncidentStatus::Open => summary.open += 1,
            IncidentStatus::InProgress => summary.in_progress += 1,
            IncidentStatus::Resolved => summary.resolved += 1,
            IncidentStatus::Monitoring => summary.monitoring += 1,
        }
    }

    let mut recent: Vec<&Incident> = incidents.iter().collect();
    recent.sort_by_key(|i| Reverse(i.created_at));
    summary.recent = recent.into_iter().take(RECENT_LIMIT).cloned().collect();
    summary
}
