//! Incident repository.

use chrono::Utc;
use serde_json::Value;

use conduct_core::entities::{Incident, IncidentDraft};
use conduct_core::enums::Kind;
use conduct_core::ids::{PREFIX_INCIDENT, new_id};
use conduct_core::record::Entity;

use crate::error::StoreError;
use crate::registry::Registry;
use crate::store::RecordStore;

impl<S: RecordStore> Registry<S> {
    /// Persist a new incident, stamping its id and `createdAt`.
    pub async fn create_incident(&self, draft: IncidentDraft) -> Result<Incident, StoreError> {
        let incident = draft.into_incident(new_id(PREFIX_INCIDENT)?, Utc::now().timestamp_millis());
        self.save(&incident).await?;
        tracing::info!(id = %incident.id, student_id = %incident.student_id, "created incident");
        Ok(incident)
    }

    /// Resubmit a full incident. The stored `createdAt` wins over whatever
    /// the caller passes, and a cleared social service abbreviation is
    /// written as NULL.
    ///
    /// Returns `None` without writing anything if the incident does not exist.
    pub async fn update_incident(&self, mut incident: Incident) -> Result<Option<Incident>, StoreError> {
        let Some(stored) = self.get_incident(&incident.id).await? else {
            return Ok(None);
        };
        incident.created_at = stored.created_at;
        let mut payload = incident.to_payload()?;
        payload
            .entry("socialServiceAbbreviation")
            .or_insert(Value::Null);
        self.store().upsert(Kind::Incidents, payload).await?;
        Ok(Some(incident))
    }

    pub async fn get_incident(&self, id: &str) -> Result<Option<Incident>, StoreError> {
        self.find(id).await
    }

    pub async fn list_incidents(&self) -> Result<Vec<Incident>, StoreError> {
        self.list_all().await
    }

    pub async fn incidents_for_student(&self, student_id: &str) -> Result<Vec<Incident>, StoreError> {
        let mut incidents = self.list_incidents().await?;
        incidents.retain(|i| i.student_id == student_id);
        Ok(incidents)
    }

    pub async fn delete_incident(&self, id: &str) -> Result<(), StoreError> {
        self.remove::<Incident>(id).await
    }
}

#[cfg(test)]
mod tests {
    use conduct_core::enums::{IncidentCategory, IncidentStatus, Kind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::error::StoreError;
    use crate::store::RecordStore;
    use crate::test_support::helpers::{memory_registry, payload, sample_draft};

    #[tokio::test]
    async fn create_stamps_id_and_created_at() {
        let reg = memory_registry();
        let incident = reg.create_incident(sample_draft("stu-1")).await.unwrap();
        assert!(incident.id.starts_with("inc-"));
        assert!(incident.created_at > 0);
        assert_eq!(reg.get_incident(&incident.id).await.unwrap(), Some(incident));
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let reg = memory_registry();
        let incident = reg.create_incident(sample_draft("stu-1")).await.unwrap();

        let mut edited = incident.clone();
        edited.status = IncidentStatus::Resolved;
        edited.parent_contacted = true;
        edited.created_at = 1;

        let saved = reg.update_incident(edited).await.unwrap().unwrap();
        assert_eq!(saved.created_at, incident.created_at);
        assert_eq!(saved.status, IncidentStatus::Resolved);

        let stored = reg.get_incident(&incident.id).await.unwrap().unwrap();
        assert_eq!(stored, saved);
    }

    #[tokio::test]
    async fn update_clears_social_service_abbreviation() {
        let reg = memory_registry();
        let mut draft = sample_draft("stu-1");
        draft.social_service_contacted = true;
        draft.social_service_abbreviation = Some("Hr. Soz".into());
        let incident = reg.create_incident(draft).await.unwrap();

        let mut edited = incident.clone();
        edited.social_service_contacted = false;
        edited.social_service_abbreviation = None;
        reg.update_incident(edited).await.unwrap().unwrap();

        let raw = reg
            .store()
            .get(Kind::Incidents, &incident.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!raw.contains_key("socialServiceAbbreviation"));
        assert_eq!(raw["socialServiceContacted"], json!(false));
    }

    #[tokio::test]
    async fn update_of_missing_incident_creates_nothing() {
        let reg = memory_registry();
        let ghost = sample_draft("stu-1").into_incident("inc-ghost".into(), 7);
        assert!(reg.update_incident(ghost).await.unwrap().is_none());
        assert!(reg.list_incidents().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_category_is_corrupt() {
        let reg = memory_registry();
        reg.store()
            .upsert(
                Kind::Incidents,
                payload(json!({
                    "id": "inc-bad",
                    "studentId": "stu-1",
                    "category": "ARSON",
                    "status": "OPEN"
                })),
            )
            .await
            .unwrap();

        let err = reg.list_incidents().await.unwrap_err();
        assert!(
            matches!(err, StoreError::Corrupt { ref id, .. } if id == "inc-bad"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn incidents_for_student_and_dependents() {
        let reg = memory_registry();
        reg.create_incident(sample_draft("stu-1")).await.unwrap();
        let mut other = sample_draft("stu-2");
        other.category = IncidentCategory::Verbal;
        reg.create_incident(other).await.unwrap();
        reg.create_incident(sample_draft("stu-1")).await.unwrap();

        assert_eq!(reg.incidents_for_student("stu-1").await.unwrap().len(), 2);
        assert_eq!(reg.dependents(Kind::Students, "stu-1").await.unwrap(), 2);
        assert_eq!(reg.dependents(Kind::Incidents, "inc-1").await.unwrap(), 0);
    }
}
