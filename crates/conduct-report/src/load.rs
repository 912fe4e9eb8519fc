//! Concurrent source loading.

use conduct_core::entities::{Incident, SchoolClass, Student, YearLevel};
use conduct_db::{RecordStore, Registry, StoreError};

use crate::enrich::{EnrichedIncident, enrich};
use crate::error::ReportError;
use crate::natural::sort_classes;

/// The four collections a report is computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub years: Vec<YearLevel>,
    pub classes: Vec<SchoolClass>,
    pub students: Vec<Student>,
    pub incidents: Vec<Incident>,
}

impl Sources {
    #[must_use]
    pub fn enrich(&self) -> Vec<EnrichedIncident> {
        enrich(&self.years, &self.classes, &self.students, &self.incidents)
    }

    /// Classes in natural name order, for filter pickers.
    #[must_use]
    pub fn sorted_classes(&self) -> Vec<SchoolClass> {
        let mut classes = self.classes.clone();
        sort_classes(&mut classes);
        classes
    }
}

/// Read all four collections concurrently.
///
/// # Errors
///
/// Returns `ReportError::Load` for the first read that fails; nothing is
/// returned from the others.
pub async fn load_sources<S: RecordStore>(registry: &Registry<S>) -> Result<Sources, ReportError> {
    let (years, classes, students, incidents) = tokio::try_join!(
        labelled("years", registry.list_years()),
        labelled("classes", registry.list_classes()),
        labelled("students", registry.list_students()),
        labelled("incidents", registry.list_incidents()),
    )?;
    tracing::debug!(
        years = years.len(),
        classes = classes.len(),
        students = students.len(),
        incidents = incidents.len(),
        "loaded report sources"
    );
    Ok(Sources {
        years,
        classes,
        students,
        incidents,
    })
}

async fn labelled<T>(
    kind: &'static str,
    load: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, ReportError> {
    load.await.map_err(|source| ReportError::Load { kind, source })
}
