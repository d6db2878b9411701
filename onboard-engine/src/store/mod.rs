//! Store client abstraction
//!
//! The engine consumes a generic relational-store client: per logical
//! table, row selection filtered by business (or parent) id, insertion,
//! upsert keyed by primary key, update by id, and deletion. The store
//! offers no multi-table transactions; ordering and idempotent per-entity
//! strategies in the sync layer are the only correctness mechanisms.

pub mod memory;
pub mod rows;

pub use memory::MemoryStore;
pub use rows::{
    BusinessRow, BusinessUpdate, CategoryRow, LocationRow, MenuItemRow, OfferItemRow, OfferRow,
    OptionGroupRow, OptionRow, ScheduleRow,
};

use async_trait::async_trait;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Client for the relational store backing the wizard.
///
/// All calls are asynchronous; implementations own connection handling.
/// Inserted rows carry client-generated ids, which the store echoes back.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    // -- Business record --
    async fn get_business(&self, business_id: &str) -> StoreResult<Option<BusinessRow>>;
    async fn update_business(&self, business_id: &str, patch: BusinessUpdate) -> StoreResult<()>;

    // -- Locations --
    async fn list_locations(&self, business_id: &str) -> StoreResult<Vec<LocationRow>>;
    /// Insert-or-update keyed by the row's id
    async fn upsert_location(&self, row: LocationRow) -> StoreResult<LocationRow>;

    // -- Schedules --
    async fn list_schedules(&self, business_id: &str) -> StoreResult<Vec<ScheduleRow>>;
    async fn insert_schedules(&self, rows: Vec<ScheduleRow>) -> StoreResult<()>;
    async fn delete_schedules(&self, business_id: &str) -> StoreResult<()>;

    // -- Menu categories --
    async fn list_categories(&self, business_id: &str) -> StoreResult<Vec<CategoryRow>>;
    async fn find_category_by_name(
        &self,
        business_id: &str,
        name: &str,
    ) -> StoreResult<Option<CategoryRow>>;
    async fn insert_category(&self, row: CategoryRow) -> StoreResult<CategoryRow>;

    // -- Option groups and options --
    async fn list_option_groups(&self, category_id: &str) -> StoreResult<Vec<OptionGroupRow>>;
    async fn insert_option_group(&self, row: OptionGroupRow) -> StoreResult<OptionGroupRow>;
    /// Deletes the category's groups and cascades to their options
    async fn delete_option_groups(&self, category_id: &str) -> StoreResult<()>;
    async fn list_options(&self, option_group_id: &str) -> StoreResult<Vec<OptionRow>>;
    async fn insert_option(&self, row: OptionRow) -> StoreResult<OptionRow>;

    // -- Menu items --
    async fn list_items(&self, category_id: &str) -> StoreResult<Vec<MenuItemRow>>;
    async fn insert_item(&self, row: MenuItemRow) -> StoreResult<MenuItemRow>;
    async fn delete_items(&self, category_id: &str) -> StoreResult<()>;

    // -- Offers --
    async fn list_offers(&self, business_id: &str) -> StoreResult<Vec<OfferRow>>;
    async fn insert_offer(&self, row: OfferRow) -> StoreResult<OfferRow>;
    async fn insert_offer_items(&self, rows: Vec<OfferItemRow>) -> StoreResult<()>;
    async fn list_offer_items(&self, offer_id: &str) -> StoreResult<Vec<OfferItemRow>>;
    /// Deletes the business's offers and cascades to their offer items
    async fn delete_offers(&self, business_id: &str) -> StoreResult<()>;
}
