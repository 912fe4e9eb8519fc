use clap::Subcommand;

/// Year level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum YearCommands {
    /// Create a year level.
    Add { name: String },
    /// List year levels.
    List,
    /// Rename a year level.
    Rename { id: String, name: String },
    /// Delete a year level. Its classes are kept.
    Delete { id: String },
}
