//! Onboarding draft state
//!
//! The complete in-memory wizard state. Mutations go exclusively through
//! the engine's reducers (pure functions over [`DraftAction`]); this
//! module only defines the shape.

mod action;

pub use action::DraftAction;

use crate::models::{
    BusinessRef, LocationsDraft, MenuDraft, OffersDraft, ScheduleDraft, SettingsDraft,
};
use serde::{Deserialize, Serialize};

/// Wizard step numbers
pub const STEP_LOCATIONS: u32 = 1;
pub const STEP_SCHEDULE: u32 = 2;
pub const STEP_MENU: u32 = 3;
pub const STEP_OFFERS: u32 = 4;
pub const STEP_SETTINGS: u32 = 5;

/// Number of wizard steps
pub const STEP_COUNT: u32 = 5;

/// Root draft state accumulated across the five wizard steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingDraft {
    /// Current wizard step, 1-based
    pub current_step: u32,
    #[serde(default)]
    pub current_sub_step: u32,
    /// Steps the operator finished, in completion order, duplicate-free
    pub completed_steps: Vec<u32>,
    /// `None` until the business record exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessRef>,
    pub locations: LocationsDraft,
    pub schedule: ScheduleDraft,
    pub menu: MenuDraft,
    pub offers: OffersDraft,
    pub settings: SettingsDraft,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            current_step: STEP_LOCATIONS,
            current_sub_step: 0,
            completed_steps: Vec::new(),
            business: None,
            locations: LocationsDraft::default(),
            schedule: ScheduleDraft::default(),
            menu: MenuDraft::default(),
            offers: OffersDraft::default(),
            settings: SettingsDraft::default(),
        }
    }
}

impl OnboardingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_step_complete(&self, step: u32) -> bool {
        self.completed_steps.contains(&step)
    }
}

/// Partial draft, shallow-merged over current state.
///
/// Used to resume from persisted storage or a saved snapshot: only the
/// slices present are replaced, everything else keeps its current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub current_step: Option<u32>,
    pub current_sub_step: Option<u32>,
    pub completed_steps: Option<Vec<u32>>,
    pub business: Option<BusinessRef>,
    pub locations: Option<LocationsDraft>,
    pub schedule: Option<ScheduleDraft>,
    pub menu: Option<MenuDraft>,
    pub offers: Option<OffersDraft>,
    pub settings: Option<SettingsDraft>,
}
