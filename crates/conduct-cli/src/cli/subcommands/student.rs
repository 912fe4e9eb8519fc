use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Create a student in a class.
    Add {
        #[arg(long)]
        class: String,
        first_name: String,
        last_name: String,
    },
    /// List students.
    List {
        #[arg(long)]
        class: Option<String>,
    },
    /// Change a student's name.
    Rename {
        id: String,
        first_name: String,
        last_name: String,
    },
    /// Delete a student. Their incidents are kept.
    Delete { id: String },
}
