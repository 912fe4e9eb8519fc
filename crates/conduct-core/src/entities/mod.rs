//! Entity structs for the four stored kinds.
//!
//! Each entity maps to one whitelisted collection of the record store. Field
//! names serialize as camelCase, which is also the stored column name.

mod class;
mod incident;
mod student;
mod year;

pub use class::SchoolClass;
pub use incident::{Incident, IncidentDraft};
pub use student::Student;
pub use year::YearLevel;
