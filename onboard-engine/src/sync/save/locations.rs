//! Location save strategy
//!
//! Locations are *upserted*, not updated: step-1 ids are client-generated
//! placeholders that may not exist in storage yet, and a plain update
//! would silently affect zero rows.

use crate::store::rows::LocationRow;
use crate::store::OnboardingStore;
use shared::models::LocationDraft;
use shared::util::new_id;

use super::SaveError;

/// Upsert every draft location; returns the persisted rows in draft order
pub(super) async fn save<S: OnboardingStore>(
    store: &S,
    business_id: &str,
    locations: &[LocationDraft],
) -> Result<Vec<LocationRow>, SaveError> {
    let mut saved = Vec::with_capacity(locations.len());
    for location in locations {
        let row = LocationRow {
            id: location.id.clone().unwrap_or_else(new_id),
            business_id: business_id.to_string(),
            name: location.name.clone(),
            address: location.address.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            external_place_id: location.external_place_id.clone(),
        };
        let row = store.upsert_location(row).await?;
        saved.push(row);
    }
    tracing::info!(count = saved.len(), "locations saved");
    Ok(saved)
}
