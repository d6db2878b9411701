//! Reducer implementations
//!
//! One module per action family. Reducers are PURE functions: they touch
//! nothing but the draft they are given.

mod locations;
mod menu;
mod offers;
mod schedule;
mod settings;
mod steps;

use shared::draft::{DraftAction, DraftPatch, OnboardingDraft};

/// Apply one action to the draft.
///
/// This is the only place with a match on [`DraftAction`].
pub fn apply(draft: &mut OnboardingDraft, action: DraftAction) {
    match action {
        // Step control
        DraftAction::SetStep(step) => steps::set_step(draft, step),
        DraftAction::SetSubStep(sub_step) => steps::set_sub_step(draft, sub_step),
        DraftAction::CompleteStep(step) => steps::complete_step(draft, step),

        // Locations
        DraftAction::AddLocation(location) => locations::add_location(draft, location),
        DraftAction::PatchLocationForm(patch) => locations::patch_form(draft, patch),
        DraftAction::ReplaceLocations(list) => locations::replace_locations(draft, list),

        // Schedule
        DraftAction::SetSelectedDays(days) => schedule::set_selected_days(draft, days),
        DraftAction::AddScheduleEntries(entries) => schedule::add_entries(draft, entries),
        DraftAction::ReplaceSchedule(entries) => schedule::replace_entries(draft, entries),
        DraftAction::SetCurrentDayIndex(index) => schedule::set_current_day_index(draft, index),

        // Menu
        DraftAction::AddCategory(category) => menu::add_category(draft, category),
        DraftAction::PatchCurrentCategory(patch) => menu::patch_current(draft, patch),
        DraftAction::AddOptionGroup { category_id, group } => {
            menu::add_option_group(draft, &category_id, group)
        }
        DraftAction::ReplaceOptionGroup { category_id, group } => {
            menu::replace_option_group(draft, &category_id, group)
        }
        DraftAction::RemoveOptionGroup {
            category_id,
            group_id,
        } => menu::remove_option_group(draft, &category_id, &group_id),
        DraftAction::AddItem { category_id, item } => menu::add_item(draft, &category_id, item),
        DraftAction::UpdateItem { category_id, item } => {
            menu::update_item(draft, &category_id, item)
        }
        DraftAction::RemoveItem {
            category_id,
            item_id,
        } => menu::remove_item(draft, &category_id, &item_id),
        DraftAction::FinalizeCategory => menu::finalize_category(draft),
        DraftAction::RemoveCategory(category_id) => menu::remove_category(draft, &category_id),
        DraftAction::SetMenuStage(stage) => menu::set_stage(draft, stage),
        DraftAction::ReplaceCategories(list) => menu::replace_categories(draft, list),

        // Offers
        DraftAction::SetWantsOffers(wants) => offers::set_wants_offers(draft, wants),
        DraftAction::AddOffer(offer) => offers::add_offer(draft, offer),
        DraftAction::ReplaceOffers(list) => offers::replace_offers(draft, list),

        // Settings
        DraftAction::PatchSettings(patch) => settings::patch(draft, patch),

        // Bulk
        DraftAction::Reset => *draft = OnboardingDraft::default(),
        DraftAction::Hydrate(patch) => hydrate(draft, *patch),
    }
}

/// Shallow-merge a partial draft over current state
fn hydrate(draft: &mut OnboardingDraft, patch: DraftPatch) {
    if let Some(step) = patch.current_step {
        draft.current_step = step.max(1);
    }
    if let Some(sub_step) = patch.current_sub_step {
        draft.current_sub_step = sub_step;
    }
    if let Some(mut completed) = patch.completed_steps {
        completed.dedup();
        draft.completed_steps = completed;
    }
    if let Some(business) = patch.business {
        draft.business = Some(business);
    }
    if let Some(locations) = patch.locations {
        draft.locations = locations;
    }
    if let Some(schedule) = patch.schedule {
        draft.schedule = schedule;
    }
    if let Some(menu) = patch.menu {
        draft.menu = menu;
    }
    if let Some(offers) = patch.offers {
        draft.offers = offers;
    }
    if let Some(settings) = patch.settings {
        draft.settings = settings;
    }
}
