use anyhow::{Context, bail};
use conduct_core::entities::Incident;
use conduct_core::enums::{IncidentCategory, IncidentStatus};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IncidentUpdateArgs;
use crate::commands::incident::create::{validate_date, validate_time};
use crate::commands::shared::parse::{non_blank, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &IncidentUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_update_params(args)?;

    let mut incident = ctx
        .registry
        .get_incident(&args.id)
        .await?
        .with_context(|| format!("incident '{}' not found", args.id))?;
    apply_update(&mut incident, args)?;

    let saved = ctx
        .registry
        .update_incident(incident)
        .await?
        .with_context(|| format!("incident '{}' was deleted during the update", args.id))?;
    output(&saved, flags.format)
}

fn validate_update_params(args: &IncidentUpdateArgs) -> anyhow::Result<()> {
    let any_text = [
        &args.date,
        &args.time,
        &args.location,
        &args.category,
        &args.description,
        &args.involved,
        &args.witnesses,
        &args.actions,
        &args.agreements,
        &args.social_service,
        &args.status,
    ]
    .iter()
    .any(|field| field.is_some());
    let any_flag = args.parent_contacted.is_some()
        || args.administration_contacted.is_some()
        || args.social_service_contacted.is_some();

    if !any_text && !any_flag {
        bail!("no update fields provided");
    }
    if let Some(date) = &args.date {
        validate_date(date)?;
    }
    if let Some(time) = &args.time {
        validate_time(time)?;
    }
    Ok(())
}

fn apply_update(incident: &mut Incident, args: &IncidentUpdateArgs) -> anyhow::Result<()> {
    let text_fields = [
        (&args.date, &mut incident.date),
        (&args.time, &mut incident.time),
        (&args.location, &mut incident.location),
        (&args.description, &mut incident.description),
        (&args.involved, &mut incident.involved_persons),
        (&args.witnesses, &mut incident.witnesses),
        (&args.actions, &mut incident.immediate_actions),
        (&args.agreements, &mut incident.agreements),
    ];
    for (new, field) in text_fields {
        if let Some(value) = new {
            field.clone_from(value);
        }
    }

    if let Some(category) = &args.category {
        incident.category = parse_enum::<IncidentCategory>(category, "category")?;
    }
    if let Some(status) = &args.status {
        incident.status = parse_enum::<IncidentStatus>(status, "status")?;
    }
    if let Some(contacted) = args.parent_contacted {
        incident.parent_contacted = contacted;
    }
    if let Some(contacted) = args.administration_contacted {
        incident.administration_contacted = contacted;
    }

    if let Some(abbreviation) = &args.social_service {
        incident.social_service_abbreviation = non_blank(Some(abbreviation));
        incident.social_service_contacted = incident.social_service_abbreviation.is_some();
    }
    if let Some(contacted) = args.social_service_contacted {
        incident.social_service_contacted = contacted;
        if !contacted {
            incident.social_service_abbreviation = None;
        }
    }
    Ok(())
}
