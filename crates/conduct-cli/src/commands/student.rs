use anyhow::{Context, bail};
use conduct_core::enums::Kind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::commands::shared::orphan::delete_with_warning;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cdt student`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Add {
            class,
            first_name,
            last_name,
        } => {
            if ctx.registry.get_class(class).await?.is_none() {
                bail!("class '{class}' not found");
            }
            let student = ctx
                .registry
                .create_student(class, first_name, last_name)
                .await?;
            output(&student, flags.format)
        }
        StudentCommands::List { class } => {
            let mut students = match class {
                Some(class) => ctx.registry.students_for_class(class).await?,
                None => ctx.registry.list_students().await?,
            };
            students.sort_by(|a, b| {
                (a.last_name.to_lowercase(), a.first_name.to_lowercase())
                    .cmp(&(b.last_name.to_lowercase(), b.first_name.to_lowercase()))
            });
            output(&students, flags.format)
        }
        StudentCommands::Rename {
            id,
            first_name,
            last_name,
        } => {
            let student = ctx
                .registry
                .rename_student(id, first_name, last_name)
                .await?
                .with_context(|| format!("student '{id}' not found"))?;
            output(&student, flags.format)
        }
        StudentCommands::Delete { id } => {
            let response = delete_with_warning(ctx, Kind::Students, id).await?;
            output(&response, flags.format)
        }
    }
}
