//! Promotional Offer Models
//!
//! Offer configs are drafted in *display* units: decimal currency and
//! category/item names, exactly as the operator entered them. The save
//! pipeline is the single place where money becomes minor-unit integers
//! and names become persisted ids.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Offer type discriminant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    Bundle,
    BuyXGetY,
    PromoCode,
    ThresholdDiscount,
}

/// How a discount is expressed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum DiscountValue {
    /// Percentage of the order/item total (30 = 30%)
    Percentage(Decimal),
    /// Fixed amount in display currency (5.50 = €5.50)
    FixedAmount(Decimal),
}

/// One category slot of a drafted bundle, referenced by display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleCategoryChoice {
    pub category_name: String,
    /// Item names the operator excluded from this slot
    #[serde(default)]
    pub excluded_items: Vec<String>,
}

/// Type-dependent offer configuration, in display units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum OfferConfig {
    Bundle {
        bundle_price: Decimal,
        categories: Vec<BundleCategoryChoice>,
    },
    BuyXGetY {
        buy_quantity: u32,
        get_quantity: u32,
        /// Discount on the "get" items (100 = free)
        discount_percent: Decimal,
    },
    PromoCode {
        code: String,
        discount: DiscountValue,
    },
    ThresholdDiscount {
        /// Minimum order total in display currency
        minimum_order: Decimal,
        discount: DiscountValue,
    },
}

impl OfferConfig {
    pub fn offer_type(&self) -> OfferType {
        match self {
            OfferConfig::Bundle { .. } => OfferType::Bundle,
            OfferConfig::BuyXGetY { .. } => OfferType::BuyXGetY,
            OfferConfig::PromoCode { .. } => OfferType::PromoCode,
            OfferConfig::ThresholdDiscount { .. } => OfferType::ThresholdDiscount,
        }
    }
}

/// A drafted offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferDraft {
    pub id: String,
    pub name: String,
    pub config: OfferConfig,
}

/// Step 4 slice of the draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OffersDraft {
    /// Tri-state: `None` means the question was not answered yet
    pub wants_offers: Option<bool>,
    pub offers: Vec<OfferDraft>,
}
