//! Load synchronizer
//!
//! On wizard entry, fetches whatever was persisted on a previous visit
//! and folds it into the draft store via the wholesale-replace actions,
//! so a reload resumes exactly where the operator left off.
//!
//! Two reconciliation rules are non-trivial:
//! - the selected-day set is *derived* from the distinct weekdays among
//!   fetched schedule rows, never stored separately;
//! - per-size draft prices are recovered from the flat persisted
//!   `option_prices` column by inverting the category's size option group
//!   (option id -> option name).

use super::resolver;
use crate::draft::DraftStore;
use crate::store::rows::MenuItemRow;
use crate::store::{OnboardingStore, StoreResult};
use shared::draft::{DraftAction, DraftPatch, STEP_COUNT};
use shared::models::{
    BASE_PRICE_KEY, BusinessRef, CategoryDraft, ItemDraft, LocationDraft, OfferDraft, OptionDraft,
    OptionGroupDraft, OptionGroupKind, ScheduleEntry, SettingsDraft,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Fetches persisted wizard state and folds it into a draft store
pub struct LoadSynchronizer<'a, S: OnboardingStore> {
    store: &'a S,
    business_id: String,
}

impl<'a, S: OnboardingStore> LoadSynchronizer<'a, S> {
    pub fn new(store: &'a S, business_id: impl Into<String>) -> Self {
        Self {
            store,
            business_id: business_id.into(),
        }
    }

    /// Fetch everything persisted for the business and fold it into the
    /// draft. Fetches are read-only; the draft is only touched through
    /// dispatch.
    pub async fn load_into(&self, draft: &mut DraftStore) -> StoreResult<()> {
        let business = self.store.get_business(&self.business_id).await?;

        // Locations
        let location_rows = self.store.list_locations(&self.business_id).await?;
        let location_count = location_rows.len();
        let locations: Vec<LocationDraft> = location_rows
            .into_iter()
            .map(|row| LocationDraft {
                id: Some(row.id),
                name: row.name,
                address: row.address,
                latitude: row.latitude,
                longitude: row.longitude,
                external_place_id: row.external_place_id,
            })
            .collect();
        draft.dispatch(DraftAction::ReplaceLocations(locations));

        // Schedules; the day set is derived from the rows, not stored
        let schedule_rows = self.store.list_schedules(&self.business_id).await?;
        let days: BTreeSet<u8> = schedule_rows.iter().map(|r| r.day_of_week).collect();
        draft.dispatch(DraftAction::SetSelectedDays(days.into_iter().collect()));
        let entries: Vec<ScheduleEntry> = schedule_rows
            .into_iter()
            .map(|row| ScheduleEntry {
                day_of_week: row.day_of_week,
                location_ref: row.location_id,
                start_time: row.start_time,
                end_time: row.end_time,
            })
            .collect();
        let schedule_count = entries.len();
        draft.dispatch(DraftAction::ReplaceSchedule(entries));

        // Menu, then offers (offer denormalization needs the categories)
        let categories = self.load_categories().await?;
        let offer_rows = self.store.list_offers(&self.business_id).await?;
        let offers: Vec<OfferDraft> = offer_rows
            .iter()
            .filter_map(|row| resolver::denormalize_offer(row, &categories))
            .collect();
        let category_count = categories.len();
        let offer_count = offers.len();
        draft.dispatch(DraftAction::ReplaceCategories(categories));
        if !offers.is_empty() {
            draft.dispatch(DraftAction::SetWantsOffers(Some(true)));
        }
        draft.dispatch(DraftAction::ReplaceOffers(offers));

        // Resume position and settings-of-record
        if let Some(business) = business {
            let (current_step, completed_steps) = resume_position(business.onboarding_step);
            let settings = (!business.payment_methods.is_empty()).then(|| SettingsDraft {
                payment_methods: business.payment_methods.clone(),
                pickup_interval_minutes: if business.pickup_interval_minutes > 0 {
                    business.pickup_interval_minutes
                } else {
                    SettingsDraft::default().pickup_interval_minutes
                },
                description: business.description.clone(),
                loyalty_enabled: business.loyalty_enabled,
            });
            draft.dispatch(DraftAction::Hydrate(Box::new(DraftPatch {
                current_step: Some(current_step),
                completed_steps: Some(completed_steps),
                business: Some(BusinessRef {
                    id: business.id,
                    name: business.name,
                    slug: business.slug,
                }),
                settings,
                ..DraftPatch::default()
            })));
        }

        tracing::info!(
            locations = location_count,
            schedules = schedule_count,
            categories = category_count,
            offers = offer_count,
            "onboarding draft loaded"
        );
        Ok(())
    }

    async fn load_categories(&self) -> StoreResult<Vec<CategoryDraft>> {
        let category_rows = self.store.list_categories(&self.business_id).await?;
        let mut categories = Vec::with_capacity(category_rows.len());
        for row in category_rows {
            let group_rows = self.store.list_option_groups(&row.id).await?;
            let mut option_groups = Vec::with_capacity(group_rows.len());
            // option id -> name, for inverting persisted per-size prices
            let mut size_option_names: HashMap<String, String> = HashMap::new();
            for group_row in group_rows {
                let option_rows = self.store.list_options(&group_row.id).await?;
                if group_row.kind == OptionGroupKind::Size {
                    for option in &option_rows {
                        size_option_names.insert(option.id.clone(), option.name.clone());
                    }
                }
                option_groups.push(OptionGroupDraft {
                    id: group_row.id,
                    name: group_row.name,
                    kind: group_row.kind,
                    options: option_rows
                        .into_iter()
                        .map(|option| OptionDraft {
                            name: option.name,
                            price_modifier: option.price_modifier,
                        })
                        .collect(),
                });
            }
            let item_rows = self.store.list_items(&row.id).await?;
            let items = item_rows
                .into_iter()
                .map(|item| item_to_draft(item, &size_option_names))
                .collect();
            categories.push(CategoryDraft {
                id: row.id,
                name: row.name,
                option_groups,
                items,
            });
        }
        Ok(categories)
    }
}

/// Recover the draft price map from a persisted item.
///
/// A present, non-empty `option_prices` map is inverted through the size
/// group (id -> name); ids no longer present in the group are skipped. A
/// missing or empty map, or one that inverts to nothing, falls back to
/// `{base: price}` — an item never ends up with zero prices.
fn item_to_draft(row: MenuItemRow, size_option_names: &HashMap<String, String>) -> ItemDraft {
    let mut prices = BTreeMap::new();
    if let Some(option_prices) = &row.option_prices {
        for (option_id, price) in option_prices {
            match size_option_names.get(option_id) {
                Some(name) => {
                    prices.insert(name.clone(), *price);
                }
                None => tracing::warn!(
                    item = %row.name,
                    option = %option_id,
                    "persisted price references unknown option, skipping"
                ),
            }
        }
    }
    if prices.is_empty() {
        prices.insert(BASE_PRICE_KEY.to_string(), row.price);
    }
    ItemDraft {
        id: row.id,
        name: row.name,
        prices,
    }
}

/// Map a stored `onboarding_step` to (current step, completed steps)
fn resume_position(onboarding_step: u32) -> (u32, Vec<u32>) {
    let step = onboarding_step.max(1);
    let current = step.min(STEP_COUNT);
    let completed = (1..=STEP_COUNT).filter(|s| *s < step).collect();
    (current, completed)
}
