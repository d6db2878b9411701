//! Offer save strategy
//!
//! Offers are fully replaced on every save: delete-all then insert-all.
//! Name-to-id resolution and money normalization happen here, through
//! the resolver, never earlier.

use crate::store::rows::OfferRow;
use crate::store::OnboardingStore;
use crate::sync::resolver::{self, SavedMenu};
use shared::models::OffersDraft;

use super::SaveError;

pub(super) async fn save<S: OnboardingStore>(
    store: &S,
    business_id: &str,
    offers: &OffersDraft,
    menu: &SavedMenu,
) -> Result<(), SaveError> {
    store.delete_offers(business_id).await?;

    for offer in &offers.offers {
        let resolved = resolver::resolve_offer(offer, menu)?;
        store
            .insert_offer(OfferRow {
                id: offer.id.clone(),
                business_id: business_id.to_string(),
                offer_type: offer.config.offer_type(),
                name: offer.name.clone(),
                config: serde_json::to_value(&resolved.config)?,
            })
            .await?;
        if !resolved.items.is_empty() {
            store.insert_offer_items(resolved.items).await?;
        }
    }
    tracing::info!(count = offers.offers.len(), "offers saved");
    Ok(())
}
