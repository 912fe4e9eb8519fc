use clap::Subcommand;

/// Raw record store commands. Kinds: years, classes, students, incidents.
#[derive(Clone, Debug, Subcommand)]
pub enum RecordCommands {
    /// List every record of a kind.
    List { kind: String },
    /// Get one record; prints null if absent.
    Get { kind: String, id: String },
    /// Insert or partially update a record from a JSON object.
    Put { kind: String, body: String },
    /// Delete a record by id.
    Delete { kind: String, id: Option<String> },
    /// Report stored records that do not decode; all kinds when omitted.
    Check { kind: Option<String> },
}
