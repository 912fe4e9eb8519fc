use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IncidentCategory, IncidentStatus};

/// A documented disciplinary incident involving one student.
///
/// `date` is an ISO `YYYY-MM-DD` string and `time` an `HH:MM` string; both are
/// kept verbatim because older rows may be incomplete. `created_at` is epoch
/// milliseconds of first persistence and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    pub category: IncidentCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub involved_persons: String,
    #[serde(default)]
    pub witnesses: String,
    #[serde(default)]
    pub immediate_actions: String,
    #[serde(default)]
    pub agreements: String,
    #[serde(default)]
    pub parent_contacted: bool,
    #[serde(default)]
    pub administration_contacted: bool,
    #[serde(default)]
    pub social_service_contacted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_service_abbreviation: Option<String>,
    pub status: IncidentStatus,
    #[serde(default)]
    pub created_at: i64,
}

/// An incident before persistence: everything except `id` and `created_at`,
/// which the registry assigns on creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDraft {
    pub student_id: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: IncidentCategory,
    pub description: String,
    #[serde(default)]
    pub involved_persons: String,
    #[serde(default)]
    pub witnesses: String,
    #[serde(default)]
    pub immediate_actions: String,
    #[serde(default)]
    pub agreements: String,
    #[serde(default)]
    pub parent_contacted: bool,
    #[serde(default)]
    pub administration_contacted: bool,
    #[serde(default)]
    pub social_service_contacted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_service_abbreviation: Option<String>,
    pub status: IncidentStatus,
}

impl IncidentDraft {
    /// Attach identity and creation time, producing a storable incident.
    #[must_use]
    pub fn into_incident(self, id: String, created_at: i64) -> Incident {
        Incident {
            id,
            student_id: self.student_id,
            date: self.date,
            time: self.time,
            location: self.location,
            category: self.category,
            description: self.description,
            involved_persons: self.involved_persons,
            witnesses: self.witnesses,
            immediate_actions: self.immediate_actions,
            agreements: self.agreements,
            parent_contacted: self.parent_contacted,
            administration_contacted: self.administration_contacted,
            social_service_contacted: self.social_service_contacted,
            social_service_abbreviation: self.social_service_abbreviation,
            status: self.status,
            created_at,
        }
    }
}
