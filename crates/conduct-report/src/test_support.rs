//! Entity builders for report tests.

use conduct_core::entities::{Incident, SchoolClass, Student, YearLevel};
use conduct_core::enums::{IncidentCategory, IncidentStatus};

pub fn year(id: &str, name: &str) -> YearLevel {
    YearLevel {
        id: id.into(),
        name: name.into(),
    }
}

pub fn class(id: &str, year_id: &str, name: &str) -> SchoolClass {
    SchoolClass {
        id: id.into(),
        year_level_id: year_id.into(),
        name: name.into(),
    }
}

pub fn student(id: &str, class_id: &str, first: &str, last: &str) -> Student {
    Student {
        id: id.into(),
        class_id: class_id.into(),
        first_name: first.into(),
        last_name: last.into(),
    }
}

pub fn incident(id: &str, student_id: &str) -> Incident {
    Incident {
        id: id.into(),
        student_id: student_id.into(),
        date: "2026-03-04".into(),
        time: "10:00".into(),
        location: "Flur".into(),
        category: IncidentCategory::Disruption,
        description: "Unterricht gestört".into(),
        involved_persons: String::new(),
        witnesses: String::new(),
        immediate_actions: String::new(),
        agreements: String::new(),
        parent_contacted: false,
        administration_contacted: false,
        social_service_contacted: false,
        social_service_abbreviation: None,
        status: IncidentStatus::Open,
        created_at: 0,
    }
}
