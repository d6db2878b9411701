//! Persisted row shapes
//!
//! Shapes of the rows the store client reads and writes. Every
//! money-bearing column is an integer minor-unit amount; option-price
//! maps are keyed by the *persisted option id*, never by option name.

use serde::{Deserialize, Serialize};
use shared::models::{OfferType, OptionGroupKind};
use std::collections::BTreeMap;

/// Junction role for a bundle's purchasable line items
pub const ROLE_BUNDLE_ITEM: &str = "bundle_item";

/// Business record; settings-of-record live here
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub pickup_interval_minutes: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub loyalty_enabled: bool,
    /// Wizard position; one past the last step once onboarding completed
    #[serde(default)]
    pub onboarding_step: u32,
    /// Completion timestamp (Unix millis); flips the business to "live"
    pub onboarded_at: Option<i64>,
}

/// Partial business update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessUpdate {
    pub payment_methods: Option<Vec<String>>,
    pub pickup_interval_minutes: Option<u32>,
    pub description: Option<String>,
    pub loyalty_enabled: Option<bool>,
    pub onboarding_step: Option<u32>,
    pub onboarded_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationRow {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub external_place_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRow {
    pub id: String,
    pub business_id: String,
    pub location_id: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionGroupRow {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub kind: OptionGroupKind,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionRow {
    pub id: String,
    pub option_group_id: String,
    pub name: String,
    /// Flat modifier in minor units (non-size groups)
    pub price_modifier: Option<i64>,
    pub sort_order: i32,
}

/// Persisted menu item.
///
/// `option_prices` is present only for items in a category with a size
/// option group: downstream consumers treat its presence as the size
/// signal, so attaching it to a base-priced item is an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItemRow {
    pub id: String,
    pub category_id: String,
    pub name: String,
    /// Minor units; minimum across size prices when sizes exist
    pub price: i64,
    /// Option id -> minor-unit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_prices: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferRow {
    pub id: String,
    pub business_id: String,
    pub offer_type: OfferType,
    pub name: String,
    /// Normalized configuration document: money in minor units, all
    /// category/item references by persisted id
    pub config: serde_json::Value,
}

/// One eligible purchasable line item of an offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferItemRow {
    pub offer_id: String,
    pub item_id: String,
    pub role: String,
}
