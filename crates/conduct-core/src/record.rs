//! The typed record boundary.
//!
//! Stores hold dynamic-shape payloads (a JSON object per record). At the typed
//! boundary a payload becomes one variant of [`Record`], selected by its
//! [`Kind`]. The [`Entity`] trait ties each entity struct to its kind so typed
//! helpers can be written once for all four.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::{Incident, SchoolClass, Student, YearLevel};
use crate::enums::Kind;
use crate::errors::CoreError;

/// A dynamic-shape record: field name to JSON value.
pub type Payload = Map<String, Value>;

/// An entity stored in exactly one whitelisted collection.
pub trait Entity: Serialize + DeserializeOwned + Clone + Into<Record> {
    const KIND: Kind;

    fn id(&self) -> &str;

    /// Serialize into a store payload.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if serialization does not yield an object.
    fn to_payload(&self) -> Result<Payload, CoreError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(invalid(Self::KIND, format!("expected object, got {other}"))),
            Err(e) => Err(invalid(Self::KIND, e.to_string())),
        }
    }

    /// Decode a store payload into the entity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if required fields are missing or a
    /// closed enumeration holds an unrecognized value.
    fn from_payload(payload: Payload) -> Result<Self, CoreError> {
        serde_json::from_value(Value::Object(payload)).map_err(|e| invalid(Self::KIND, e.to_string()))
    }
}

fn invalid(kind: Kind, reason: String) -> CoreError {
    CoreError::InvalidRecord {
        kind: kind.to_string(),
        reason,
    }
}

impl Entity for YearLevel {
    const KIND: Kind = Kind::Years;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for SchoolClass {
    const KIND: Kind = Kind::Classes;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Student {
    const KIND: Kind = Kind::Students;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Incident {
    const KIND: Kind = Kind::Incidents;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Tagged union over the four entity shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Record {
    #[serde(rename = "years")]
    Year(YearLevel),
    #[serde(rename = "classes")]
    Class(SchoolClass),
    #[serde(rename = "students")]
    Student(Student),
    #[serde(rename = "incidents")]
    Incident(Incident),
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Year(_) => Kind::Years,
            Self::Class(_) => Kind::Classes,
            Self::Student(_) => Kind::Students,
            Self::Incident(_) => Kind::Incidents,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Year(y) => &y.id,
            Self::Class(c) => &c.id,
            Self::Student(s) => &s.id,
            Self::Incident(i) => &i.id,
        }
    }

    /// Decode a payload as the entity shape of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if the payload does not fit the shape.
    pub fn from_payload(kind: Kind, payload: Payload) -> Result<Self, CoreError> {
        Ok(match kind {
            Kind::Years => Self::Year(YearLevel::from_payload(payload)?),
            Kind::Classes => Self::Class(SchoolClass::from_payload(payload)?),
            Kind::Students => Self::Student(Student::from_payload(payload)?),
            Kind::Incidents => Self::Incident(Incident::from_payload(payload)?),
        })
    }

    /// Serialize the wrapped entity as a store payload.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if serialization fails.
    pub fn to_payload(&self) -> Result<Payload, CoreError> {
        match self {
            Self::Year(y) => y.to_payload(),
            Self::Class(c) => c.to_payload(),
            Self::Student(s) => s.to_payload(),
            Self::Incident(i) => i.to_payload(),
        }
    }
}

impl From<YearLevel> for Record {
    fn from(value: YearLevel) -> Self {
        Self::Year(value)
    }
}

impl From<SchoolClass> for Record {
    fn from(value: SchoolClass) -> Self {
        Self::Class(value)
    }
}

impl From<Student> for Record {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<Incident> for Record {
    fn from(value: Incident) -> Self {
        Self::Incident(value)
    }
}
