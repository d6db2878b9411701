//! Offer configuration resolver
//!
//! Offers are drafted in display units: decimal currency, category and
//! item *names*. Rows store the normalized form: minor-unit integers,
//! persisted ids. This module owns both directions of that translation.
//!
//! Resolution failures (a referenced category or item no longer exists)
//! are silent omissions, not errors: the operator's intent is still
//! satisfiable by simply not including the missing reference.

use super::money::{self, MoneyError};
use crate::store::rows::{OfferItemRow, OfferRow, ROLE_BUNDLE_ITEM};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{
    BundleCategoryChoice, CategoryDraft, DiscountValue, OfferConfig, OfferDraft,
};

/// Name -> id view of the menu produced by the menu save stage
#[derive(Debug, Clone, Default)]
pub struct SavedMenu {
    pub categories: Vec<SavedCategory>,
}

#[derive(Debug, Clone)]
pub struct SavedCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<SavedItem>,
}

#[derive(Debug, Clone)]
pub struct SavedItem {
    pub id: String,
    pub name: String,
}

impl SavedMenu {
    fn category_by_name(&self, name: &str) -> Option<&SavedCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Stored discount, money in minor units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum StoredDiscount {
    /// Percentages pass through save unchanged in magnitude
    Percentage(Decimal),
    FixedAmount(i64),
}

/// One resolved category slot of a bundle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryChoice {
    pub category_id: String,
    #[serde(default)]
    pub excluded_item_ids: Vec<String>,
}

/// Normalized offer configuration as persisted in the offer row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum StoredOfferConfig {
    Bundle {
        bundle_price: i64,
        category_choice: Vec<CategoryChoice>,
    },
    BuyXGetY {
        buy_quantity: u32,
        get_quantity: u32,
        discount_percent: Decimal,
    },
    PromoCode {
        code: String,
        discount: StoredDiscount,
    },
    ThresholdDiscount {
        minimum_order: i64,
        discount: StoredDiscount,
    },
}

/// Output of resolving one drafted offer
#[derive(Debug, Clone)]
pub struct ResolvedOffer {
    pub config: StoredOfferConfig,
    /// Flattened eligible line items (bundles only, empty otherwise)
    pub items: Vec<OfferItemRow>,
}

fn resolve_discount(discount: &DiscountValue) -> Result<StoredDiscount, MoneyError> {
    Ok(match discount {
        DiscountValue::Percentage(percent) => StoredDiscount::Percentage(*percent),
        DiscountValue::FixedAmount(amount) => {
            StoredDiscount::FixedAmount(money::to_minor_units(*amount)?)
        }
    })
}

fn denormalize_discount(discount: &StoredDiscount) -> DiscountValue {
    match discount {
        StoredDiscount::Percentage(percent) => DiscountValue::Percentage(*percent),
        StoredDiscount::FixedAmount(minor) => {
            DiscountValue::FixedAmount(money::from_minor_units(*minor))
        }
    }
}

/// Resolve one drafted offer against the saved menu.
///
/// For bundles, each selected category name maps to its persisted id and
/// excluded item names to item ids; eligible (non-excluded) items across
/// all selected slots become `{item_id, role}` junction rows so order-time
/// logic never re-derives eligibility from names.
pub fn resolve_offer(offer: &OfferDraft, menu: &SavedMenu) -> Result<ResolvedOffer, MoneyError> {
    let resolved = match &offer.config {
        OfferConfig::Bundle {
            bundle_price,
            categories,
        } => {
            let mut category_choice = Vec::new();
            let mut items = Vec::new();
            for choice in categories {
                let Some(category) = menu.category_by_name(&choice.category_name) else {
                    tracing::warn!(
                        category = %choice.category_name,
                        offer = %offer.name,
                        "bundle references unknown category, skipping"
                    );
                    continue;
                };
                let excluded_item_ids: Vec<String> = choice
                    .excluded_items
                    .iter()
                    .filter_map(|name| {
                        let found = category.items.iter().find(|i| i.name == *name);
                        if found.is_none() {
                            tracing::warn!(
                                item = %name,
                                category = %category.name,
                                "excluded item not found, skipping"
                            );
                        }
                        found.map(|i| i.id.clone())
                    })
                    .collect();
                for item in &category.items {
                    if !excluded_item_ids.contains(&item.id) {
                        items.push(OfferItemRow {
                            offer_id: offer.id.clone(),
                            item_id: item.id.clone(),
                            role: ROLE_BUNDLE_ITEM.to_string(),
                        });
                    }
                }
                category_choice.push(CategoryChoice {
                    category_id: category.id.clone(),
                    excluded_item_ids,
                });
            }
            ResolvedOffer {
                config: StoredOfferConfig::Bundle {
                    bundle_price: money::to_minor_units(*bundle_price)?,
                    category_choice,
                },
                items,
            }
        }
        OfferConfig::BuyXGetY {
            buy_quantity,
            get_quantity,
            discount_percent,
        } => ResolvedOffer {
            config: StoredOfferConfig::BuyXGetY {
                buy_quantity: *buy_quantity,
                get_quantity: *get_quantity,
                discount_percent: *discount_percent,
            },
            items: Vec::new(),
        },
        OfferConfig::PromoCode { code, discount } => ResolvedOffer {
            config: StoredOfferConfig::PromoCode {
                code: code.clone(),
                discount: resolve_discount(discount)?,
            },
            items: Vec::new(),
        },
        OfferConfig::ThresholdDiscount {
            minimum_order,
            discount,
        } => ResolvedOffer {
            config: StoredOfferConfig::ThresholdDiscount {
                minimum_order: money::to_minor_units(*minimum_order)?,
                discount: resolve_discount(discount)?,
            },
            items: Vec::new(),
        },
    };
    Ok(resolved)
}

/// Map a persisted offer row back to draft shape (load path).
///
/// Ids are looked up in the loaded draft categories; unknown ids are
/// skipped. Returns `None` when the stored config document does not
/// parse.
pub fn denormalize_offer(row: &OfferRow, categories: &[CategoryDraft]) -> Option<OfferDraft> {
    let stored: StoredOfferConfig = match serde_json::from_value(row.config.clone()) {
        Ok(stored) => stored,
        Err(error) => {
            tracing::warn!(offer = %row.id, %error, "unparseable offer config, skipping");
            return None;
        }
    };

    let config = match stored {
        StoredOfferConfig::Bundle {
            bundle_price,
            category_choice,
        } => {
            let choices = category_choice
                .iter()
                .filter_map(|choice| {
                    let category = categories.iter().find(|c| c.id == choice.category_id)?;
                    let excluded_items = choice
                        .excluded_item_ids
                        .iter()
                        .filter_map(|id| {
                            category
                                .items
                                .iter()
                                .find(|i| i.id == *id)
                                .map(|i| i.name.clone())
                        })
                        .collect();
                    Some(BundleCategoryChoice {
                        category_name: category.name.clone(),
                        excluded_items,
                    })
                })
                .collect();
            OfferConfig::Bundle {
                bundle_price: money::from_minor_units(bundle_price),
                categories: choices,
            }
        }
        StoredOfferConfig::BuyXGetY {
            buy_quantity,
            get_quantity,
            discount_percent,
        } => OfferConfig::BuyXGetY {
            buy_quantity,
            get_quantity,
            discount_percent,
        },
        StoredOfferConfig::PromoCode { code, discount } => OfferConfig::PromoCode {
            code,
            discount: denormalize_discount(&discount),
        },
        StoredOfferConfig::ThresholdDiscount {
            minimum_order,
            discount,
        } => OfferConfig::ThresholdDiscount {
            minimum_order: money::from_minor_units(minimum_order),
            discount: denormalize_discount(&discount),
        },
    };

    Some(OfferDraft {
        id: row.id.clone(),
        name: row.name.clone(),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn saved_menu() -> SavedMenu {
        SavedMenu {
            categories: vec![
                SavedCategory {
                    id: "cat-pizzas".to_string(),
                    name: "Pizzas".to_string(),
                    items: vec![
                        SavedItem {
                            id: "item-margherita".to_string(),
                            name: "Margherita".to_string(),
                        },
                        SavedItem {
                            id: "item-napoli".to_string(),
                            name: "Napoli".to_string(),
                        },
                    ],
                },
                SavedCategory {
                    id: "cat-desserts".to_string(),
                    name: "Desserts".to_string(),
                    items: vec![SavedItem {
                        id: "item-tiramisu".to_string(),
                        name: "Tiramisu".to_string(),
                    }],
                },
            ],
        }
    }

    fn bundle_offer() -> OfferDraft {
        OfferDraft {
            id: "offer-1".to_string(),
            name: "Pizza + dessert".to_string(),
            config: OfferConfig::Bundle {
                bundle_price: dec("14.90"),
                categories: vec![
                    BundleCategoryChoice {
                        category_name: "Pizzas".to_string(),
                        excluded_items: vec!["Napoli".to_string()],
                    },
                    BundleCategoryChoice {
                        category_name: "Desserts".to_string(),
                        excluded_items: Vec::new(),
                    },
                ],
            },
        }
    }

    #[test]
    fn test_bundle_resolves_names_to_ids_and_eligible_items() {
        let resolved = resolve_offer(&bundle_offer(), &saved_menu()).unwrap();

        let StoredOfferConfig::Bundle {
            bundle_price,
            category_choice,
        } = &resolved.config
        else {
            panic!("expected bundle config");
        };
        assert_eq!(*bundle_price, 1490);
        assert_eq!(category_choice.len(), 2);
        assert_eq!(category_choice[0].category_id, "cat-pizzas");
        assert_eq!(
            category_choice[0].excluded_item_ids,
            vec!["item-napoli".to_string()]
        );

        // eligible items: exactly Margherita and Tiramisu, bundle role
        let item_ids: Vec<&str> = resolved.items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(item_ids, vec!["item-margherita", "item-tiramisu"]);
        assert!(resolved.items.iter().all(|i| i.role == ROLE_BUNDLE_ITEM));
        assert!(resolved.items.iter().all(|i| i.offer_id == "offer-1"));
    }

    #[test]
    fn test_bundle_with_fully_excluded_category_yields_no_rows_for_slot() {
        let mut offer = bundle_offer();
        if let OfferConfig::Bundle { categories, .. } = &mut offer.config {
            categories[1].excluded_items = vec!["Tiramisu".to_string()];
        }
        let resolved = resolve_offer(&offer, &saved_menu()).unwrap();
        let item_ids: Vec<&str> = resolved.items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(item_ids, vec!["item-margherita"]);
    }

    #[test]
    fn test_bundle_skips_unknown_category_and_items() {
        let mut offer = bundle_offer();
        if let OfferConfig::Bundle { categories, .. } = &mut offer.config {
            categories.push(BundleCategoryChoice {
                category_name: "Gone".to_string(),
                excluded_items: Vec::new(),
            });
            categories[0].excluded_items.push("Missing".to_string());
        }
        let resolved = resolve_offer(&offer, &saved_menu()).unwrap();
        let StoredOfferConfig::Bundle {
            category_choice, ..
        } = &resolved.config
        else {
            panic!("expected bundle config");
        };
        // unknown category omitted, unknown excluded item omitted
        assert_eq!(category_choice.len(), 2);
        assert_eq!(
            category_choice[0].excluded_item_ids,
            vec!["item-napoli".to_string()]
        );
    }

    #[test]
    fn test_percentage_passes_through_unchanged() {
        let offer = OfferDraft {
            id: "offer-2".to_string(),
            name: "Welcome".to_string(),
            config: OfferConfig::PromoCode {
                code: "WELCOME10".to_string(),
                discount: DiscountValue::Percentage(dec("10")),
            },
        };
        let resolved = resolve_offer(&offer, &SavedMenu::default()).unwrap();
        assert_eq!(
            resolved.config,
            StoredOfferConfig::PromoCode {
                code: "WELCOME10".to_string(),
                discount: StoredDiscount::Percentage(dec("10")),
            }
        );
        assert!(resolved.items.is_empty());
    }

    #[test]
    fn test_fixed_amounts_and_thresholds_convert_to_minor_units_once() {
        let offer = OfferDraft {
            id: "offer-3".to_string(),
            name: "Big orders".to_string(),
            config: OfferConfig::ThresholdDiscount {
                minimum_order: dec("30.00"),
                discount: DiscountValue::FixedAmount(dec("5.00")),
            },
        };
        let resolved = resolve_offer(&offer, &SavedMenu::default()).unwrap();
        assert_eq!(
            resolved.config,
            StoredOfferConfig::ThresholdDiscount {
                minimum_order: 3000,
                discount: StoredDiscount::FixedAmount(500),
            }
        );
    }

    #[test]
    fn test_denormalize_round_trips_bundle_names() {
        use shared::models::{CategoryDraft, ItemDraft};
        use std::collections::BTreeMap;

        let resolved = resolve_offer(&bundle_offer(), &saved_menu()).unwrap();
        let row = OfferRow {
            id: "offer-1".to_string(),
            business_id: "biz-1".to_string(),
            offer_type: shared::models::OfferType::Bundle,
            name: "Pizza + dessert".to_string(),
            config: serde_json::to_value(&resolved.config).unwrap(),
        };

        let categories = vec![
            CategoryDraft {
                id: "cat-pizzas".to_string(),
                name: "Pizzas".to_string(),
                option_groups: Vec::new(),
                items: vec![
                    ItemDraft {
                        id: "item-margherita".to_string(),
                        name: "Margherita".to_string(),
                        prices: BTreeMap::new(),
                    },
                    ItemDraft {
                        id: "item-napoli".to_string(),
                        name: "Napoli".to_string(),
                        prices: BTreeMap::new(),
                    },
                ],
            },
            CategoryDraft {
                id: "cat-desserts".to_string(),
                name: "Desserts".to_string(),
                option_groups: Vec::new(),
                items: vec![ItemDraft {
                    id: "item-tiramisu".to_string(),
                    name: "Tiramisu".to_string(),
                    prices: BTreeMap::new(),
                }],
            },
        ];

        let draft = denormalize_offer(&row, &categories).unwrap();
        assert_eq!(draft.config, bundle_offer().config);
    }
}
