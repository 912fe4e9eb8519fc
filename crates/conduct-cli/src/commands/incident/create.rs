use anyhow::bail;
use chrono::{NaiveDate, NaiveTime};
use conduct_core::entities::IncidentDraft;
use conduct_core::enums::{IncidentCategory, IncidentStatus};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IncidentCreateArgs;
use crate::commands::shared::parse::{non_blank, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &IncidentCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = build_draft(args)?;
    if ctx.registry.get_student(&draft.student_id).await?.is_none() {
        bail!("student '{}' not found", draft.student_id);
    }
    let incident = ctx.registry.create_incident(draft).await?;
    output(&incident, flags.format)
}

fn build_draft(args: &IncidentCreateArgs) -> anyhow::Result<IncidentDraft> {
    validate_date(&args.date)?;
    validate_time(&args.time)?;
    let description = args.description.trim();
    if description.is_empty() {
        bail!("description must not be empty");
    }

    let abbreviation = non_blank(args.social_service.as_deref());
    Ok(IncidentDraft {
        student_id: args.student.clone(),
        date: args.date.clone(),
        time: args.time.clone(),
        location: args.location.clone(),
        category: parse_enum::<IncidentCategory>(&args.category, "category")?,
        description: description.to_string(),
        involved_persons: args.involved.clone(),
        witnesses: args.witnesses.clone(),
        immediate_actions: args.actions.clone(),
        agreements: args.agreements.clone(),
        parent_contacted: args.parent_contacted,
        administration_contacted: args.administration_contacted,
        social_service_contacted: abbreviation.is_some(),
        social_service_abbreviation: abbreviation,
        status: parse_enum::<IncidentStatus>(&args.status, "status")?,
    })
}

/// `YYYY-MM-DD`.
pub fn validate_date(date: &str) -> anyhow::Result<()> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        bail!("invalid date '{date}': expected YYYY-MM-DD");
    }
    Ok(())
}

/// `HH:MM`, or empty when the time is unknown.
pub fn validate_time(time: &str) -> anyhow::Result<()> {
    if !time.is_empty() && NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        bail!("invalid time '{time}': expected HH:MM");
    }
    Ok(())
}
