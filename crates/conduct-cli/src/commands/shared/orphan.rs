use conduct_core::enums::Kind;
use serde::Serialize;

use crate::context::AppContext;

/// Result of a delete command.
#[derive(Debug, Serialize)]
pub struct DeleteResponse<'a> {
    pub kind: Kind,
    pub id: &'a str,
    /// Child records left pointing at the deleted id.
    pub orphaned: usize,
}

/// Delete one record after warning about children that will be orphaned.
pub async fn delete_with_warning<'a>(
    ctx: &AppContext,
    kind: Kind,
    id: &'a str,
) -> anyhow::Result<DeleteResponse<'a>> {
    let orphaned = ctx.registry.dependents(kind, id).await?;
    if orphaned > 0 {
        if let Some(child) = kind.child() {
            tracing::warn!(
                %kind,
                id,
                %child,
                count = orphaned,
                "deleting leaves child records without a parent"
            );
        }
    }

    match kind {
        Kind::Years => ctx.registry.delete_year(id).await?,
        Kind::Classes => ctx.registry.delete_class(id).await?,
        Kind::Students => ctx.registry.delete_student(id).await?,
        Kind::Incidents => ctx.registry.delete_incident(id).await?,
    }

    Ok(DeleteResponse { kind, id, orphaned })
}
