//! Record kinds and closed enumerations for conduct.
//!
//! `Kind` is the whitelist of stored collections. Incident category and
//! status serialize as `SCREAMING_SNAKE_CASE`; the German display labels are
//! accepted on input so rows written by older clients still decode.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::ids::{PREFIX_CLASS, PREFIX_INCIDENT, PREFIX_STUDENT, PREFIX_YEAR};

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The whitelisted resource kinds of the record store.
///
/// ```text
/// years ← classes.yearLevelId
/// classes ← students.classId
/// students ← incidents.studentId
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Years,
    Classes,
    Students,
    Incidents,
}

const YEAR_COLUMNS: &[&str] = &["id", "name"];
const CLASS_COLUMNS: &[&str] = &["id", "yearLevelId", "name"];
const STUDENT_COLUMNS: &[&str] = &["id", "classId", "firstName", "lastName"];
const INCIDENT_COLUMNS: &[&str] = &[
    "id",
    "studentId",
    "date",
    "time",
    "location",
    "category",
    "description",
    "involvedPersons",
    "witnesses",
    "immediateActions",
    "agreements",
    "parentContacted",
    "administrationContacted",
    "socialServiceContacted",
    "socialServiceAbbreviation",
    "status",
    "createdAt",
];

const INCIDENT_FLAGS: &[&str] = &[
    "parentContacted",
    "administrationContacted",
    "socialServiceContacted",
];

impl Kind {
    /// All kinds, parents before children.
    pub const ALL: [Self; 4] = [Self::Years, Self::Classes, Self::Students, Self::Incidents];

    /// Name of the primary key field, shared by every kind.
    pub const PRIMARY_KEY: &'static str = "id";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Classes => "classes",
            Self::Students => "students",
            Self::Incidents => "incidents",
        }
    }

    /// Backing table name. Identical to the wire name for every kind.
    #[must_use]
    pub const fn table(self) -> &'static str {
        self.as_str()
    }

    /// The column whitelist for this kind, primary key first.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Years => YEAR_COLUMNS,
            Self::Classes => CLASS_COLUMNS,
            Self::Students => STUDENT_COLUMNS,
            Self::Incidents => INCIDENT_COLUMNS,
        }
    }

    #[must_use]
    pub fn has_column(self, name: &str) -> bool {
        self.columns().contains(&name)
    }

    /// Columns stored as 0/1 and surfaced as booleans.
    #[must_use]
    pub const fn flag_columns(self) -> &'static [&'static str] {
        match self {
            Self::Incidents => INCIDENT_FLAGS,
            Self::Years | Self::Classes | Self::Students => &[],
        }
    }

    /// Columns surfaced as integers regardless of storage affinity.
    #[must_use]
    pub const fn integer_columns(self) -> &'static [&'static str] {
        match self {
            Self::Incidents => &["createdAt"],
            Self::Years | Self::Classes | Self::Students => &[],
        }
    }

    /// Foreign key field pointing at the parent kind, if any.
    #[must_use]
    pub const fn parent_link(self) -> Option<(Self, &'static str)> {
        match self {
            Self::Years => None,
            Self::Classes => Some((Self::Years, "yearLevelId")),
            Self::Students => Some((Self::Classes, "classId")),
            Self::Incidents => Some((Self::Students, "studentId")),
        }
    }

    /// The kind whose records reference this one, if any.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Years => Some(Self::Classes),
            Self::Classes => Some(Self::Students),
            Self::Students => Some(Self::Incidents),
            Self::Incidents => None,
        }
    }

    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Years => PREFIX_YEAR,
            Self::Classes => PREFIX_CLASS,
            Self::Students => PREFIX_STUDENT,
            Self::Incidents => PREFIX_INCIDENT,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// IncidentCategory
// ---------------------------------------------------------------------------

/// Category of a recorded incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentCategory {
    #[serde(alias = "Körperliche Gewalt")]
    Physical,
    #[serde(alias = "Verbale Gewalt")]
    Verbal,
    #[serde(alias = "Mobbing / Ausgrenzung")]
    Bullying,
    #[serde(alias = "Sachbeschädigung")]
    Vandalism,
    #[serde(alias = "Unterrichtsstörung")]
    Disruption,
    #[serde(alias = "Diebstahl")]
    Theft,
    #[serde(alias = "Sonstiges")]
    Other,
}

impl IncidentCategory {
    pub const ALL: [Self; 7] = [
        Self::Physical,
        Self::Verbal,
        Self::Bullying,
        Self::Vandalism,
        Self::Disruption,
        Self::Theft,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "PHYSICAL",
            Self::Verbal => "VERBAL",
            Self::Bullying => "BULLYING",
            Self::Vandalism => "VANDALISM",
            Self::Disruption => "DISRUPTION",
            Self::Theft => "THEFT",
            Self::Other => "OTHER",
        }
    }

    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Physical => "Körperliche Gewalt",
            Self::Verbal => "Verbale Gewalt",
            Self::Bullying => "Mobbing / Ausgrenzung",
            Self::Vandalism => "Sachbeschädigung",
            Self::Disruption => "Unterrichtsstörung",
            Self::Theft => "Diebstahl",
            Self::Other => "Sonstiges",
        }
    }
}

impl fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IncidentStatus
// ---------------------------------------------------------------------------

/// Processing status of an incident.
///
/// Any status may follow any other; the store records whatever staff last
/// submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    #[serde(alias = "Offen")]
    Open,
    #[serde(alias = "In Bearbeitung")]
    InProgress,
    #[serde(alias = "Geklärt")]
    Resolved,
    #[serde(alias = "Beobachtung")]
    Monitoring,
}

impl IncidentStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Monitoring];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Monitoring => "MONITORING",
        }
    }

    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Offen",
            Self::InProgress => "In Bearbeitung",
            Self::Resolved => "Geklärt",
            Self::Monitoring => "Beobachtung",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
