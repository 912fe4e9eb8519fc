use anyhow::bail;
use conduct_core::enums::Kind;
use conduct_report::{enrich, load_sources};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IncidentCommands;
use crate::commands::shared::orphan::delete_with_warning;
use crate::context::AppContext;
use crate::output::output;

mod create;
mod list;
mod update;

/// Handle `cdt incident`.
pub async fn handle(
    action: &IncidentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IncidentCommands::Create(args) => create::run(args, ctx, flags).await,
        IncidentCommands::Update(args) => update::run(args, ctx, flags).await,
        IncidentCommands::Get { id } => get(id, ctx, flags).await,
        IncidentCommands::List {
            student,
            status,
            limit,
        } => list::run(student.as_deref(), status.as_deref(), *limit, ctx, flags).await,
        IncidentCommands::Delete { id } => {
            let response = delete_with_warning(ctx, Kind::Incidents, id).await?;
            output(&response, flags.format)
        }
    }
}

/// One incident with its student, class, and year resolved.
async fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(incident) = ctx.registry.get_incident(id).await? else {
        bail!("incident '{id}' not found");
    };
    let sources = load_sources(&ctx.registry).await?;
    let enriched = enrich(
        &sources.years,
        &sources.classes,
        &sources.students,
        std::slice::from_ref(&incident),
    );
    output(&enriched.first(), flags.format)
}
