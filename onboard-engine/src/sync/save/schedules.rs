//! Schedule save strategy
//!
//! Delete-all then insert-all: re-saving N draft entries always yields
//! exactly N rows, never N plus leftovers.

use crate::store::rows::{LocationRow, ScheduleRow};
use crate::store::OnboardingStore;
use shared::models::ScheduleDraft;
use shared::util::new_id;

use super::SaveError;

pub(super) async fn save<S: OnboardingStore>(
    store: &S,
    business_id: &str,
    schedule: &ScheduleDraft,
    locations: &[LocationRow],
) -> Result<(), SaveError> {
    store.delete_schedules(business_id).await?;

    let mut rows = Vec::with_capacity(schedule.entries.len());
    for entry in &schedule.entries {
        rows.push(ScheduleRow {
            id: new_id(),
            business_id: business_id.to_string(),
            location_id: resolve_location_ref(&entry.location_ref, locations)?,
            day_of_week: entry.day_of_week,
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
        });
    }
    let count = rows.len();
    store.insert_schedules(rows).await?;
    tracing::info!(count, "schedules saved");
    Ok(())
}

/// Resolve a schedule's location reference to a persisted id.
///
/// Three-tier fallback: the reference may be a location *name*, a
/// location *id* (temporary or real), or stale entirely — in which case
/// the first persisted location wins. Entries drafted against a name are
/// ambiguous when two locations share that name; the first match wins.
fn resolve_location_ref(
    location_ref: &str,
    locations: &[LocationRow],
) -> Result<String, SaveError> {
    if let Some(by_name) = locations.iter().find(|l| l.name == location_ref) {
        return Ok(by_name.id.clone());
    }
    if let Some(by_id) = locations.iter().find(|l| l.id == location_ref) {
        return Ok(by_id.id.clone());
    }
    locations
        .first()
        .map(|l| l.id.clone())
        .ok_or_else(|| SaveError::Validation("schedule entry without any saved location".into()))
}
