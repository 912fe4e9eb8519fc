mod class;
mod incident;
mod record;
mod student;
mod year;

pub use class::ClassCommands;
pub use incident::{IncidentCommands, IncidentCreateArgs, IncidentUpdateArgs};
pub use record::RecordCommands;
pub use student::StudentCommands;
pub use year::YearCommands;
