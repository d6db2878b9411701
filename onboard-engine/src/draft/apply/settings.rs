//! Settings reducers

use shared::draft::OnboardingDraft;
use shared::models::SettingsPatch;

/// Shallow-merge a partial settings update
pub(super) fn patch(draft: &mut OnboardingDraft, patch: SettingsPatch) {
    let settings = &mut draft.settings;
    if let Some(methods) = patch.payment_methods {
        settings.payment_methods = methods;
    }
    if let Some(interval) = patch.pickup_interval_minutes {
        settings.pickup_interval_minutes = interval;
    }
    if let Some(description) = patch.description {
        settings.description = description;
    }
    if let Some(loyalty) = patch.loyalty_enabled {
        settings.loyalty_enabled = loyalty;
    }
}
