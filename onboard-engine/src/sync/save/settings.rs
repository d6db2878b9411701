//! Settings save strategy
//!
//! A single business update carrying the settings-of-record plus the
//! completion timestamp and terminal step marker. This call is what
//! flips the business from "in onboarding" to "live", which is why it
//! must run last.

use crate::store::rows::BusinessUpdate;
use crate::store::OnboardingStore;
use crate::sync::ONBOARDING_COMPLETE_STEP;
use shared::models::SettingsDraft;
use shared::util::now_millis;

use super::SaveError;

pub(super) async fn save<S: OnboardingStore>(
    store: &S,
    business_id: &str,
    settings: &SettingsDraft,
) -> Result<(), SaveError> {
    store
        .update_business(
            business_id,
            BusinessUpdate {
                payment_methods: Some(settings.payment_methods.clone()),
                pickup_interval_minutes: Some(settings.pickup_interval_minutes),
                description: Some(settings.description.clone()),
                loyalty_enabled: Some(settings.loyalty_enabled),
                onboarding_step: Some(ONBOARDING_COMPLETE_STEP),
                onboarded_at: Some(now_millis()),
            },
        )
        .await?;
    tracing::info!(business = %business_id, "onboarding completed, business is live");
    Ok(())
}
