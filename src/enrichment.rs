//! Enrichment workflow shared by the create handler:
//! 1. Look up age
//! 2. Look up gender
//! 3. Look up nationality
//!
//! Lookups run one after another and the first failure aborts the whole
//! record; later lookups are not attempted.

use crate::errors::{AppError, ResultExt};
use crate::models::{EnrichedPerson, Person};
use crate::services::EnrichmentService;

pub async fn enrich_person(
    service: &EnrichmentService,
    person: Person,
) -> Result<EnrichedPerson, AppError> {
    let name = person.name.clone();
    let mut enriched = EnrichedPerson::unenriched(person);

    enriched.age = service
        .lookup_age(&name)
        .await
        .with_context(|| format!("age lookup for {}", name))?;

    enriched.gender = service
        .lookup_gender(&name)
        .await
        .with_context(|| format!("gender lookup for {}", name))?;

    enriched.nationality = service
        .lookup_nationality(&name)
        .await
        .with_context(|| format!("nationality lookup for {}", name))?;

    tracing::info!(
        "Enriched {}: age={}, gender={:?}, nationality={:?}",
        name,
        enriched.age,
        enriched.gender,
        enriched.nationality
    );

    Ok(enriched)
}
