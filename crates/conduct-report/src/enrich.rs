//! The student → class → year join.
//!
//! The store performs no joins, so every incident is resolved against its
//! ancestors here. Missing links at any level become placeholder text.

use std::collections::HashMap;

use serde::Serialize;

use conduct_core::entities::{Incident, SchoolClass, Student, YearLevel};

/// Student name shown when an incident's student no longer exists.
pub const UNKNOWN_STUDENT: &str = "Unbekannt";

/// Class or year name shown when the link cannot be resolved.
pub const UNKNOWN: &str = "?";

/// An incident plus display fields derived from its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedIncident {
    #[serde(flatten)]
    pub incident: Incident,
    /// `"LastName, FirstName"`, or [`UNKNOWN_STUDENT`].
    pub student_name: String,
    pub class_name: String,
    /// Id of the resolved class; absent when the class could not be found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    pub year_level_name: String,
}

/// Resolve every incident against the three ancestor collections.
///
/// Pure and infallible; output order follows `incidents`.
#[must_use]
pub fn enrich(
    years: &[YearLevel],
    classes: &[SchoolClass],
    students: &[Student],
    incidents: &[Incident],
) -> Vec<EnrichedIncident> {
    let years: HashMap<&str, &YearLevel> = years.iter().map(|y| (y.id.as_str(), y)).collect();
    let classes: HashMap<&str, &SchoolClass> =
        classes.iter().map(|c| (c.id.as_str(), c)).collect();
    let students: HashMap<&str, &Student> = students.iter().map(|s| (s.id.as_str(), s)).collect();

    incidents
        .iter()
        .map(|incident| {
            let student = students.get(incident.student_id.as_str()).copied();
            let class = student.and_then(|s| classes.get(s.class_id.as_str()).copied());
            let year = class.and_then(|c| years.get(c.year_level_id.as_str()).copied());

            EnrichedIncident {
                incident: incident.clone(),
                student_name: student.map_or_else(|| UNKNOWN_STUDENT.to_string(), Student::display_name),
                class_name: class.map_or_else(|| UNKNOWN.to_string(), |c| c.name.clone()),
                class_id: class.map(|c| c.id.clone()),
                year_level_name: year.map_or_else(|| UNKNOWN.to_string(), |y| y.name.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{class, incident, student, year};
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_full_chain() {
        let out = enrich(
            &[year("yr-1", "Jahrgang 7")],
            &[class("cls-1", "yr-1", "7b")],
            &[student("stu-1", "cls-1", "Mia", "Weber")],
            &[incident("inc-1", "stu-1")],
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].student_name, "Weber, Mia");
        assert_eq!(out[0].class_name, "7b");
        assert_eq!(out[0].class_id.as_deref(), Some("cls-1"));
        assert_eq!(out[0].year_level_name, "Jahrgang 7");
    }

    #[test]
    fn unknown_student_degrades_to_placeholders() {
        let out = enrich(&[], &[], &[], &[incident("inc-1", "stu-gone")]);
        assert_eq!(out[0].student_name, "Unbekannt");
        assert_eq!(out[0].class_name, "?");
        assert_eq!(out[0].class_id, None);
        assert_eq!(out[0].year_level_name, "?");
    }

    #[test]
    fn missing_year_only_affects_year_name() {
        let out = enrich(
            &[],
            &[class("cls-1", "yr-gone", "5a")],
            &[student("stu-1", "cls-1", "Ben", "Wolf")],
            &[incident("inc-1", "stu-1")],
        );
        assert_eq!(out[0].student_name, "Wolf, Ben");
        assert_eq!(out[0].class_name, "5a");
        assert_eq!(out[0].year_level_name, "?");
    }

    #[test]
    fn serializes_flat_with_derived_fields() {
        let out = enrich(&[], &[], &[], &[incident("inc-1", "stu-1")]);
        let value = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(value["id"], "inc-1");
        assert_eq!(value["studentName"], "Unbekannt");
        assert_eq!(value["className"], "?");
        assert!(value.get("classId").is_none());
    }
}
