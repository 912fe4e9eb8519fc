//! Demo data for a fresh database.
//!
//! Builds year levels 5 through 10, three classes per year, a handful of
//! students per class, and a hundred incidents spread over the last half
//! year. Randomness comes from a small `SplitMix64` generator seeded from the
//! OS entropy source, so tests can pin the seed.

use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

use conduct_core::entities::{IncidentDraft, Student};
use conduct_core::enums::{IncidentCategory, IncidentStatus};
use conduct_core::errors::CoreError;

use crate::error::StoreError;
use crate::registry::Registry;
use crate::store::RecordStore;

pub const INCIDENT_COUNT: usize = 100;
const WINDOW_DAYS: u64 = 182;

const FIRST_NAMES: &[&str] = &[
    "Leon", "Mia", "Noah", "Emma", "Paul", "Hannah", "Luca", "Sofia", "Elias", "Anna", "Ben",
    "Lea", "Luis", "Marie", "Jonas", "Lena", "Felix", "Emily", "Moritz", "Lina",
];

const LAST_NAMES: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Schulz",
    "Hoffmann", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder", "Neumann", "Schwarz",
];

struct Scenario {
    category: IncidentCategory,
    description: &'static str,
    location: &'static str,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        category: IncidentCategory::Disruption,
        description: "Hat während der Stillarbeit lautstark Musik über das Handy abgespielt.",
        location: "Klassenzimmer",
    },
    Scenario {
        category: IncidentCategory::Theft,
        description: "Pausenbrot eines Mitschülers entwendet und gegen Sammelkarten getauscht.",
        location: "Pausenhof",
    },
    Scenario {
        category: IncidentCategory::Vandalism,
        description: "Mit Permanentmarker an die Tafel geschrieben.",
        location: "Raum 104",
    },
    Scenario {
        category: IncidentCategory::Physical,
        description: "Schubsen in der Warteschlange der Mensa.",
        location: "Mensa",
    },
    Scenario {
        category: IncidentCategory::Bullying,
        description: "Gerüchte über einen Mitschüler im Klassenchat verbreitet.",
        location: "Digital / Schulweg",
    },
    Scenario {
        category: IncidentCategory::Verbal,
        description: "Lehrkraft im Flur beleidigt.",
        location: "Flur",
    },
    Scenario {
        category: IncidentCategory::Other,
        description: "Energy-Drinks aus dem Spind heraus verkauft.",
        location: "Umkleide",
    },
    Scenario {
        category: IncidentCategory::Physical,
        description: "Schneeballschlacht im Treppenhaus.",
        location: "Treppenhaus West",
    },
    Scenario {
        category: IncidentCategory::Verbal,
        description: "Lauter Streit über Fußballergebnisse während der Klassenarbeit.",
        location: "Raum 202",
    },
    Scenario {
        category: IncidentCategory::Disruption,
        description: "Spracheinstellung des Smartboards verstellt.",
        location: "Informatikraum",
    },
    Scenario {
        category: IncidentCategory::Bullying,
        description: "Mitschüler beim Völkerball gezielt ausgeschlossen.",
        location: "Turnhalle",
    },
    Scenario {
        category: IncidentCategory::Other,
        description: "Hausaufgaben samt Eingabeaufforderung des Chatbots abgegeben.",
        location: "Deutschunterricht",
    },
];

/// Counts of what a seed run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub years: usize,
    pub classes: usize,
    pub students: usize,
    pub incidents: usize,
}

/// `SplitMix64`: small, fast, and good enough for demo data.
pub struct Dice(u64);

impl Dice {
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self(seed)
    }

    /// Seed from the operating system's entropy source.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Entropy` if the entropy source is unavailable.
    pub fn from_entropy() -> Result<Self, StoreError> {
        let mut buf = [0u8; 8];
        getrandom::fill(&mut buf).map_err(|e| CoreError::Entropy(e.to_string()))?;
        Ok(Self(u64::from_le_bytes(buf)))
    }

    const fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `0..n`. `n` must be nonzero.
    const fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// True with the given percent probability.
    const fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

/// Seed demo data unless year levels already exist.
///
/// Returns `None` when skipped.
///
/// # Errors
///
/// Returns the first `StoreError` any write produces.
pub async fn seed<S: RecordStore>(
    registry: &Registry<S>,
    force: bool,
) -> Result<Option<SeedReport>, StoreError> {
    let mut dice = Dice::from_entropy()?;
    seed_with(registry, force, &mut dice, Utc::now().date_naive()).await
}

/// [`seed`] with an explicit generator and reference date.
///
/// # Errors
///
/// Returns the first `StoreError` any write produces.
pub async fn seed_with<S: RecordStore>(
    registry: &Registry<S>,
    force: bool,
    dice: &mut Dice,
    today: NaiveDate,
) -> Result<Option<SeedReport>, StoreError> {
    let existing = registry.list_years().await?;
    if !force && !existing.is_empty() {
        tracing::warn!(years = existing.len(), "database already has data, skipping seed");
        return Ok(None);
    }

    let mut report = SeedReport::default();
    let mut students: Vec<Student> = Vec::new();

    for grade in 5..=10 {
        let year = registry.create_year(&format!("Jahrgang {grade}")).await?;
        report.years += 1;

        for suffix in ['a', 'b', 'c'] {
            let class = registry
                .create_class(&year.id, &format!("{grade}{suffix}"))
                .await?;
            report.classes += 1;

            let count = 3 + dice.below(4);
            for _ in 0..count {
                let first = *dice.pick(FIRST_NAMES);
                let last = *dice.pick(LAST_NAMES);
                students.push(registry.create_student(&class.id, first, last).await?);
                report.students += 1;
            }
        }
    }

    for _ in 0..INCIDENT_COUNT {
        let student = dice.pick(&students);
        let draft = random_draft(dice, &student.id, today);
        registry.create_incident(draft).await?;
        report.incidents += 1;
    }

    tracing::info!(?report, "seeded demo data");
    Ok(Some(report))
}

fn random_draft(dice: &mut Dice, student_id: &str, today: NaiveDate) -> IncidentDraft {
    let scenario = dice.pick(SCENARIOS);
    let days_old = dice.below(WINDOW_DAYS + 1);
    let date = today.checked_sub_days(Days::new(days_old)).unwrap_or(today);

    let mut status = *dice.pick(&IncidentStatus::ALL);
    if days_old > 30 && dice.chance(70) {
        status = IncidentStatus::Resolved;
    }
    if days_old < 7 && dice.chance(70) {
        status = IncidentStatus::Open;
    }

    let social = dice.chance(20);
    let hour = 8 + dice.below(6);
    let tens = dice.below(5);

    IncidentDraft {
        student_id: student_id.to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        time: format!("{hour:02}:{tens}0"),
        location: scenario.location.to_string(),
        category: scenario.category,
        description: scenario.description.to_string(),
        involved_persons: if dice.chance(30) {
            "Diverse Mitschüler".into()
        } else {
            String::new()
        },
        witnesses: if dice.chance(40) {
            "Herr Müller".into()
        } else {
            String::new()
        },
        immediate_actions: "Gespräch gesucht, Ermahnung ausgesprochen.".into(),
        agreements: if status == IncidentStatus::Resolved {
            "Schüler hat sich entschuldigt und den Schaden behoben.".into()
        } else {
            "Noch zu klären.".into()
        },
        parent_contacted: dice.chance(20),
        administration_contacted: dice.chance(10),
        social_service_contacted: social,
        social_service_abbreviation: social.then(|| "Hr. Soz".to_string()),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::memory_registry;

    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn seed_populates_every_kind() {
        let reg = memory_registry();
        let mut dice = Dice::seeded(42);
        let report = seed_with(&reg, false, &mut dice, reference_day())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.years, 6);
        assert_eq!(report.classes, 18);
        assert!((54..=108).contains(&report.students), "students: {}", report.students);
        assert_eq!(report.incidents, INCIDENT_COUNT);

        assert_eq!(reg.list_years().await.unwrap().len(), 6);
        assert_eq!(reg.list_students().await.unwrap().len(), report.students);

        let earliest = reference_day() - Days::new(WINDOW_DAYS);
        for incident in reg.list_incidents().await.unwrap() {
            let date = NaiveDate::parse_from_str(&incident.date, "%Y-%m-%d").unwrap();
            assert!(date >= earliest && date <= reference_day(), "{date}");
            assert_eq!(
                incident.social_service_contacted,
                incident.social_service_abbreviation.is_some()
            );
        }
    }

    #[tokio::test]
    async fn seed_skips_populated_database() {
        let reg = memory_registry();
        reg.create_year("Jahrgang 5").await.unwrap();

        let mut dice = Dice::seeded(1);
        let skipped = seed_with(&reg, false, &mut dice, reference_day()).await.unwrap();
        assert!(skipped.is_none());
        assert_eq!(reg.list_years().await.unwrap().len(), 1);

        let forced = seed_with(&reg, true, &mut dice, reference_day()).await.unwrap();
        assert!(forced.is_some());
        assert_eq!(reg.list_years().await.unwrap().len(), 7);
    }

    #[test]
    fn dice_is_deterministic_per_seed() {
        let mut a = Dice::seeded(7);
        let mut b = Dice::seeded(7);
        let xs: Vec<u64> = (0..5).map(|_| a.below(1000)).collect();
        let ys: Vec<u64> = (0..5).map(|_| b.below(1000)).collect();
        assert_eq!(xs, ys);
    }
}
