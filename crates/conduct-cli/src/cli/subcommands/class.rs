use clap::Subcommand;

/// School class commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClassCommands {
    /// Create a class in a year level.
    Add {
        #[arg(long)]
        year: String,
        name: String,
    },
    /// List classes in natural name order.
    List {
        #[arg(long)]
        year: Option<String>,
    },
    /// Rename a class.
    Rename { id: String, name: String },
    /// Delete a class. Its students are kept.
    Delete { id: String },
}
