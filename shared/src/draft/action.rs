//! Draft actions
//!
//! The full mutation vocabulary of the wizard. Every action is applied by
//! a pure, total reducer: same action on same state always yields the
//! same next state, no side effects.

use super::DraftPatch;
use crate::models::{
    CategoryDraft, CategoryPatch, ItemDraft, LocationDraft, LocationFormPatch, MenuStage,
    OfferDraft, OptionGroupDraft, ScheduleEntry, SettingsPatch,
};
use serde::{Deserialize, Serialize};

/// A discrete, named mutation of the onboarding draft
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "payload")]
pub enum DraftAction {
    // -- Step control --
    /// Set the absolute step (floors at 1)
    SetStep(u32),
    SetSubStep(u32),
    /// Mark a step complete; marking an already-completed step is a no-op
    CompleteStep(u32),

    // -- Locations --
    /// Append a finished location, reset the scratch form, offer to add
    /// another
    AddLocation(LocationDraft),
    PatchLocationForm(LocationFormPatch),
    /// Wholesale replace (load path)
    ReplaceLocations(Vec<LocationDraft>),

    // -- Schedule --
    SetSelectedDays(Vec<u8>),
    /// Append entries; entries for any day present in the batch replace
    /// that day's existing entries
    AddScheduleEntries(Vec<ScheduleEntry>),
    ReplaceSchedule(Vec<ScheduleEntry>),
    SetCurrentDayIndex(usize),

    // -- Menu --
    /// Start editing a new category (becomes "current")
    AddCategory(CategoryDraft),
    PatchCurrentCategory(CategoryPatch),
    AddOptionGroup {
        category_id: String,
        group: OptionGroupDraft,
    },
    ReplaceOptionGroup {
        category_id: String,
        group: OptionGroupDraft,
    },
    RemoveOptionGroup {
        category_id: String,
        group_id: String,
    },
    AddItem {
        category_id: String,
        item: ItemDraft,
    },
    UpdateItem {
        category_id: String,
        item: ItemDraft,
    },
    RemoveItem {
        category_id: String,
        item_id: String,
    },
    /// Upsert the current category into the committed list by id, clear
    /// "current", advance the menu stage to Done. No-op without a current
    /// category.
    FinalizeCategory,
    RemoveCategory(String),
    SetMenuStage(MenuStage),
    /// Wholesale replace (load path)
    ReplaceCategories(Vec<CategoryDraft>),

    // -- Offers --
    SetWantsOffers(Option<bool>),
    AddOffer(OfferDraft),
    ReplaceOffers(Vec<OfferDraft>),

    // -- Settings --
    PatchSettings(SettingsPatch),

    // -- Bulk --
    /// Back to the pristine initial draft
    Reset,
    /// Shallow-merge a partial draft over current state
    Hydrate(Box<DraftPatch>),
}
