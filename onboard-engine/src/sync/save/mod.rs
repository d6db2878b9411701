//! Save synchronizer
//!
//! Invoked once when the wizard completes. Stages run in strict
//! dependency order — locations, then schedules (need location ids),
//! then menu, then offers (reference menu ids), then settings (marks
//! completion) — because the store offers no cross-entity transaction.
//! Every stage is idempotent (upsert, or delete-all + insert-all), so a
//! save that fails partway is safe to re-run from the top; ordering is
//! the only other correctness mechanism available.

mod locations;
mod menu;
mod offers;
mod schedules;
mod settings;

use crate::store::{OnboardingStore, StoreError};
use crate::sync::money::MoneyError;
use shared::draft::OnboardingDraft;
use shared::models::OfferConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Save pipeline error types
#[derive(Debug, Error)]
pub enum SaveError {
    /// Caught before any stage runs; the store is never touched
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("Offer config serialization error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result of a save attempt, with a human-readable message on failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Completed,
    /// Rejected by the saving latch; a save is already in flight
    AlreadySaving,
    Failed { message: String },
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Completed)
    }
}

/// Orchestrates the five per-entity save strategies
pub struct SaveSynchronizer<'a, S: OnboardingStore> {
    store: &'a S,
    business_id: String,
    saving: AtomicBool,
}

impl<'a, S: OnboardingStore> SaveSynchronizer<'a, S> {
    pub fn new(store: &'a S, business_id: impl Into<String>) -> Self {
        Self {
            store,
            business_id: business_id.into(),
            saving: AtomicBool::new(false),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Run the full save pipeline.
    ///
    /// Concurrent re-invocation is rejected by the saving latch; the
    /// latch is restored on every path out, success or failure. Errors
    /// are surfaced as a human-readable message, never panicked.
    pub async fn save(&self, draft: &OnboardingDraft) -> SaveOutcome {
        if self.saving.swap(true, Ordering::SeqCst) {
            return SaveOutcome::AlreadySaving;
        }
        let result = self.run(draft).await;
        self.saving.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => SaveOutcome::Completed,
            Err(error) => {
                tracing::error!(%error, "onboarding save failed");
                SaveOutcome::Failed {
                    message: failure_message(&error),
                }
            }
        }
    }

    async fn run(&self, draft: &OnboardingDraft) -> Result<(), SaveError> {
        validate(draft)?;
        let locations =
            locations::save(self.store, &self.business_id, &draft.locations.locations).await?;
        schedules::save(self.store, &self.business_id, &draft.schedule, &locations).await?;
        let menu = menu::save(self.store, &self.business_id, &draft.menu.categories).await?;
        offers::save(self.store, &self.business_id, &draft.offers, &menu).await?;
        settings::save(self.store, &self.business_id, &draft.settings).await?;
        Ok(())
    }
}

fn failure_message(error: &SaveError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        "saving failed".to_string()
    } else {
        message
    }
}

/// Upfront validation: anything caught here never reaches the store
fn validate(draft: &OnboardingDraft) -> Result<(), SaveError> {
    for entry in &draft.schedule.entries {
        if entry.day_of_week > 6 {
            return Err(SaveError::Validation(format!(
                "invalid day of week {}",
                entry.day_of_week
            )));
        }
        if entry.start_time >= entry.end_time {
            return Err(SaveError::Validation(format!(
                "schedule start {} must be before end {}",
                entry.start_time, entry.end_time
            )));
        }
    }
    for category in &draft.menu.categories {
        for item in &category.items {
            if item.prices.is_empty() {
                return Err(SaveError::Validation(format!(
                    "item '{}' has no price",
                    item.name
                )));
            }
        }
    }
    for offer in &draft.offers.offers {
        if let OfferConfig::Bundle { categories, .. } = &offer.config
            && categories.len() < 2
        {
            return Err(SaveError::Validation(format!(
                "bundle '{}' needs at least two categories",
                offer.name
            )));
        }
    }
    if draft.settings.payment_methods.is_empty() {
        return Err(SaveError::Validation(
            "at least one payment method is required".into(),
        ));
    }
    if draft.settings.pickup_interval_minutes == 0 {
        return Err(SaveError::Validation(
            "pickup interval must be positive".into(),
        ));
    }
    Ok(())
}
