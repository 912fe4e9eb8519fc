//! Serde roundtrip and JsonSchema validation tests for all entity types.

use conduct_core::entities::*;
use conduct_core::enums::*;
use conduct_core::record::{Entity, Record};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_incident() -> Incident {
    Incident {
        id: "inc-5c0e94f1a7b3d2c83f9a0c4e71b2d8a6".into(),
        student_id: "stu-3f9a0c4e71b2d8a65c0e94f1a7b3d2c8".into(),
        date: "2026-02-11".into(),
        time: "10:40".into(),
        location: "Pausenhof".into(),
        category: IncidentCategory::Theft,
        description: "Pausenbrot entwendet und gegen Sammelkarten getauscht.".into(),
        involved_persons: "Diverse Mitschüler".into(),
        witnesses: "Herr Müller".into(),
        immediate_actions: "Gespräch gesucht, Ermahnung ausgesprochen.".into(),
        agreements: "Noch zu klären.".into(),
        parent_contacted: true,
        administration_contacted: false,
        social_service_contacted: false,
        social_service_abbreviation: None,
        status: IncidentStatus::InProgress,
        created_at: 1_770_800_000_000,
    }
}

roundtrip_and_validate!(
    year_level_roundtrip,
    YearLevel,
    YearLevel {
        id: "yr-0a1b2c3d4e5f60718293a4b5c6d7e8f9".into(),
        name: "Jahrgang 7".into(),
    }
);

roundtrip_and_validate!(
    school_class_roundtrip,
    SchoolClass,
    SchoolClass {
        id: "cls-0a1b2c3d4e5f60718293a4b5c6d7e8f9".into(),
        year_level_id: "yr-0a1b2c3d4e5f60718293a4b5c6d7e8f9".into(),
        name: "7b".into(),
    }
);

roundtrip_and_validate!(
    student_roundtrip,
    Student,
    Student {
        id: "stu-3f9a0c4e71b2d8a65c0e94f1a7b3d2c8".into(),
        class_id: "cls-0a1b2c3d4e5f60718293a4b5c6d7e8f9".into(),
        first_name: "Jonas".into(),
        last_name: "Schröder".into(),
    }
);

roundtrip_and_validate!(incident_roundtrip, Incident, sample_incident());

roundtrip_and_validate!(
    incident_with_social_service_roundtrip,
    Incident,
    Incident {
        social_service_contacted: true,
        social_service_abbreviation: Some("Hr. Soz".into()),
        ..sample_incident()
    }
);

roundtrip_and_validate!(
    incident_draft_roundtrip,
    IncidentDraft,
    IncidentDraft {
        student_id: "stu-1".into(),
        date: "2026-01-20".into(),
        time: "08:00".into(),
        location: "Turnhalle".into(),
        category: IncidentCategory::Bullying,
        description: "Ausschließen beim Völkerball.".into(),
        involved_persons: String::new(),
        witnesses: String::new(),
        immediate_actions: String::new(),
        agreements: String::new(),
        parent_contacted: false,
        administration_contacted: false,
        social_service_contacted: false,
        social_service_abbreviation: None,
        status: IncidentStatus::Open,
    }
);

roundtrip_and_validate!(
    record_roundtrip,
    Record,
    Record::Incident(sample_incident())
);

#[test]
fn payload_roundtrip_through_record_union() {
    let incident = sample_incident();
    let payload = incident.to_payload().unwrap();
    let record = Record::from_payload(Kind::Incidents, payload).unwrap();
    assert_eq!(record, Record::Incident(incident));
}

#[test]
fn all_categories_and_statuses_roundtrip() {
    for category in IncidentCategory::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.as_str()));
        let label: IncidentCategory =
            serde_json::from_str(&format!("\"{}\"", category.label())).unwrap();
        assert_eq!(label, category);
    }
    for status in IncidentStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
        let label: IncidentStatus =
            serde_json::from_str(&format!("\"{}\"", status.label())).unwrap();
        assert_eq!(label, status);
    }
}
