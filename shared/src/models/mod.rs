//! Domain Models
//!
//! Draft representations held in memory while the operator walks the
//! wizard. Persisted row shapes live in the engine's store layer; these
//! types hold whatever the operator typed, in the units they typed it.

pub mod business;
pub mod location;
pub mod menu;
pub mod offer;
pub mod schedule;
pub mod settings;

// Re-exports
pub use business::BusinessRef;
pub use location::{LocationDraft, LocationForm, LocationFormPatch, LocationsDraft};
pub use menu::{
    BASE_PRICE_KEY, CategoryDraft, CategoryPatch, ItemDraft, MenuDraft, MenuStage, OptionDraft,
    OptionGroupDraft, OptionGroupKind,
};
pub use offer::{
    BundleCategoryChoice, DiscountValue, OfferConfig, OfferDraft, OfferType, OffersDraft,
};
pub use schedule::{ScheduleDraft, ScheduleEntry};
pub use settings::{SettingsDraft, SettingsPatch};
