use clap::{Args, Subcommand};

/// Incident commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IncidentCommands {
    /// Record a new incident.
    Create(IncidentCreateArgs),
    /// Change fields of an existing incident.
    Update(IncidentUpdateArgs),
    /// Get an incident by ID.
    Get { id: String },
    /// List incidents.
    List {
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete an incident.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct IncidentCreateArgs {
    #[arg(long)]
    pub student: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// HH:MM
    #[arg(long, default_value = "")]
    pub time: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
    #[arg(long, default_value = "")]
    pub involved: String,
    #[arg(long, default_value = "")]
    pub witnesses: String,
    #[arg(long, default_value = "")]
    pub actions: String,
    #[arg(long, default_value = "")]
    pub agreements: String,
    #[arg(long)]
    pub parent_contacted: bool,
    #[arg(long)]
    pub administration_contacted: bool,
    /// Abbreviation of the contacted social worker; implies social service contact
    #[arg(long)]
    pub social_service: Option<String>,
    #[arg(long, default_value = "OPEN")]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct IncidentUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub involved: Option<String>,
    #[arg(long)]
    pub witnesses: Option<String>,
    #[arg(long)]
    pub actions: Option<String>,
    #[arg(long)]
    pub agreements: Option<String>,
    #[arg(long)]
    pub parent_contacted: Option<bool>,
    #[arg(long)]
    pub administration_contacted: Option<bool>,
    #[arg(long)]
    pub social_service_contacted: Option<bool>,
    #[arg(long)]
    pub social_service: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}
