use anyhow::{Context, bail};
use conduct_core::enums::Kind;
use conduct_db::api::{self, ApiRequest, ApiResponse};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecordCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cdt record`: the untyped store envelope.
pub async fn handle(
    action: &RecordCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let RecordCommands::Check { kind } = action {
        return check(kind.as_deref(), ctx, flags).await;
    }

    let request = build_request(action)?;
    let response = api::handle(ctx.registry.store(), request).await;
    if let ApiResponse::Error { error, code } = &response {
        bail!("{error} (status {code})");
    }
    output(&response, flags.format)
}

async fn check(kind: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kinds = match kind {
        Some(raw) => vec![raw.parse::<Kind>()?],
        None => Kind::ALL.to_vec(),
    };
    let mut found = Vec::new();
    for kind in kinds {
        found.extend(ctx.registry.verify(kind).await?);
    }
    output(&found, flags.format)
}

fn build_request(action: &RecordCommands) -> anyhow::Result<ApiRequest> {
    let request = match action {
        RecordCommands::List { kind } => ApiRequest::list(kind),
        RecordCommands::Get { kind, id } => ApiRequest::get(kind, id),
        RecordCommands::Put { kind, body } => {
            let body: Value =
                serde_json::from_str(body).context("record body must be valid JSON")?;
            ApiRequest::post(kind, body)
        }
        RecordCommands::Delete { kind, id } => ApiRequest::delete(kind, id.clone()),
        RecordCommands::Check { .. } => bail!("record check does not use the request envelope"),
    };
    Ok(request)
}

#[cfg(test)]
mod tests {
    use conduct_db::api::{ApiRequest, Method};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::build_request;
    use crate::cli::subcommands::RecordCommands;

    #[test]
    fn put_parses_body() {
        let request = build_request(&RecordCommands::Put {
            kind: "years".into(),
            body: r#"{"id":"yr-1","name":"Jahrgang 5"}"#.into(),
        })
        .expect("request should build");
        assert_eq!(
            request,
            ApiRequest::post("years", json!({"id": "yr-1", "name": "Jahrgang 5"}))
        );
    }

    #[test]
    fn put_rejects_invalid_json() {
        let err = build_request(&RecordCommands::Put {
            kind: "years".into(),
            body: "{id: yr-1}".into(),
        })
        .expect_err("should fail");
        assert!(err.to_string().contains("valid JSON"));
    }

    #[test]
    fn delete_without_id_still_builds() {
        let request = build_request(&RecordCommands::Delete {
            kind: "classes".into(),
            id: None,
        })
        .expect("request should build");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.id, None);
    }
}
