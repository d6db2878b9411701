//! In-memory store
//!
//! Implements [`OnboardingStore`] over plain vectors behind a
//! `parking_lot::RwLock`. Used by the test suite and for local runs;
//! insertion order is preserved, listings sort by `sort_order` where the
//! row carries one.

use super::rows::{
    BusinessRow, BusinessUpdate, CategoryRow, LocationRow, MenuItemRow, OfferItemRow, OfferRow,
    OptionGroupRow, OptionRow, ScheduleRow,
};
use super::{OnboardingStore, StoreError, StoreResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Tables {
    businesses: HashMap<String, BusinessRow>,
    locations: Vec<LocationRow>,
    schedules: Vec<ScheduleRow>,
    categories: Vec<CategoryRow>,
    option_groups: Vec<OptionGroupRow>,
    options: Vec<OptionRow>,
    items: Vec<MenuItemRow>,
    offers: Vec<OfferRow>,
    offer_items: Vec<OfferItemRow>,
}

/// In-memory [`OnboardingStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a business record (tests and local runs)
    pub fn seed_business(&self, row: BusinessRow) {
        self.tables.write().businesses.insert(row.id.clone(), row);
    }
}

#[async_trait]
impl OnboardingStore for MemoryStore {
    async fn get_business(&self, business_id: &str) -> StoreResult<Option<BusinessRow>> {
        Ok(self.tables.read().businesses.get(business_id).cloned())
    }

    async fn update_business(&self, business_id: &str, patch: BusinessUpdate) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let business = tables
            .businesses
            .get_mut(business_id)
            .ok_or_else(|| StoreError::NotFound(format!("business {}", business_id)))?;
        if let Some(methods) = patch.payment_methods {
            business.payment_methods = methods;
        }
        if let Some(interval) = patch.pickup_interval_minutes {
            business.pickup_interval_minutes = interval;
        }
        if let Some(description) = patch.description {
            business.description = description;
        }
        if let Some(loyalty) = patch.loyalty_enabled {
            business.loyalty_enabled = loyalty;
        }
        if let Some(step) = patch.onboarding_step {
            business.onboarding_step = step;
        }
        if let Some(at) = patch.onboarded_at {
            business.onboarded_at = Some(at);
        }
        Ok(())
    }

    async fn list_locations(&self, business_id: &str) -> StoreResult<Vec<LocationRow>> {
        Ok(self
            .tables
            .read()
            .locations
            .iter()
            .filter(|l| l.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn upsert_location(&self, row: LocationRow) -> StoreResult<LocationRow> {
        let mut tables = self.tables.write();
        match tables.locations.iter_mut().find(|l| l.id == row.id) {
            Some(slot) => *slot = row.clone(),
            None => tables.locations.push(row.clone()),
        }
        Ok(row)
    }

    async fn list_schedules(&self, business_id: &str) -> StoreResult<Vec<ScheduleRow>> {
        Ok(self
            .tables
            .read()
            .schedules
            .iter()
            .filter(|s| s.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn insert_schedules(&self, rows: Vec<ScheduleRow>) -> StoreResult<()> {
        self.tables.write().schedules.extend(rows);
        Ok(())
    }

    async fn delete_schedules(&self, business_id: &str) -> StoreResult<()> {
        self.tables
            .write()
            .schedules
            .retain(|s| s.business_id != business_id);
        Ok(())
    }

    async fn list_categories(&self, business_id: &str) -> StoreResult<Vec<CategoryRow>> {
        let mut categories: Vec<CategoryRow> = self
            .tables
            .read()
            .categories
            .iter()
            .filter(|c| c.business_id == business_id)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    async fn find_category_by_name(
        &self,
        business_id: &str,
        name: &str,
    ) -> StoreResult<Option<CategoryRow>> {
        Ok(self
            .tables
            .read()
            .categories
            .iter()
            .find(|c| c.business_id == business_id && c.name == name)
            .cloned())
    }

    async fn insert_category(&self, row: CategoryRow) -> StoreResult<CategoryRow> {
        self.tables.write().categories.push(row.clone());
        Ok(row)
    }

    async fn list_option_groups(&self, category_id: &str) -> StoreResult<Vec<OptionGroupRow>> {
        let mut groups: Vec<OptionGroupRow> = self
            .tables
            .read()
            .option_groups
            .iter()
            .filter(|g| g.category_id == category_id)
            .cloned()
            .collect();
        groups.sort_by_key(|g| g.sort_order);
        Ok(groups)
    }

    async fn insert_option_group(&self, row: OptionGroupRow) -> StoreResult<OptionGroupRow> {
        self.tables.write().option_groups.push(row.clone());
        Ok(row)
    }

    async fn delete_option_groups(&self, category_id: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let group_ids: Vec<String> = tables
            .option_groups
            .iter()
            .filter(|g| g.category_id == category_id)
            .map(|g| g.id.clone())
            .collect();
        tables
            .options
            .retain(|o| !group_ids.contains(&o.option_group_id));
        tables.option_groups.retain(|g| g.category_id != category_id);
        Ok(())
    }

    async fn list_options(&self, option_group_id: &str) -> StoreResult<Vec<OptionRow>> {
        let mut options: Vec<OptionRow> = self
            .tables
            .read()
            .options
            .iter()
            .filter(|o| o.option_group_id == option_group_id)
            .cloned()
            .collect();
        options.sort_by_key(|o| o.sort_order);
        Ok(options)
    }

    async fn insert_option(&self, row: OptionRow) -> StoreResult<OptionRow> {
        self.tables.write().options.push(row.clone());
        Ok(row)
    }

    async fn list_items(&self, category_id: &str) -> StoreResult<Vec<MenuItemRow>> {
        Ok(self
            .tables
            .read()
            .items
            .iter()
            .filter(|i| i.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn insert_item(&self, row: MenuItemRow) -> StoreResult<MenuItemRow> {
        self.tables.write().items.push(row.clone());
        Ok(row)
    }

    async fn delete_items(&self, category_id: &str) -> StoreResult<()> {
        self.tables
            .write()
            .items
            .retain(|i| i.category_id != category_id);
        Ok(())
    }

    async fn list_offers(&self, business_id: &str) -> StoreResult<Vec<OfferRow>> {
        Ok(self
            .tables
            .read()
            .offers
            .iter()
            .filter(|o| o.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn insert_offer(&self, row: OfferRow) -> StoreResult<OfferRow> {
        self.tables.write().offers.push(row.clone());
        Ok(row)
    }

    async fn insert_offer_items(&self, rows: Vec<OfferItemRow>) -> StoreResult<()> {
        self.tables.write().offer_items.extend(rows);
        Ok(())
    }

    async fn list_offer_items(&self, offer_id: &str) -> StoreResult<Vec<OfferItemRow>> {
        Ok(self
            .tables
            .read()
            .offer_items
            .iter()
            .filter(|i| i.offer_id == offer_id)
            .cloned()
            .collect())
    }

    async fn delete_offers(&self, business_id: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let offer_ids: Vec<String> = tables
            .offers
            .iter()
            .filter(|o| o.business_id == business_id)
            .map(|o| o.id.clone())
            .collect();
        tables
            .offer_items
            .retain(|i| !offer_ids.contains(&i.offer_id));
        tables.offers.retain(|o| o.business_id != business_id);
        Ok(())
    }
}
