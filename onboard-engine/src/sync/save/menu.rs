//! Menu save strategy
//!
//! Per category: look up an existing persisted category by exact name;
//! if found, clean-slate its option groups (cascading options) and items
//! before re-inserting under the same id; else insert a new category row.
//! Categories are processed sequentially — each clean-slate must finish
//! before the next category's inserts begin, so an error mid-loop never
//! leaves interleaved partial state.

use crate::store::rows::{CategoryRow, MenuItemRow, OptionGroupRow, OptionRow};
use crate::store::OnboardingStore;
use crate::sync::resolver::{SavedCategory, SavedItem, SavedMenu};
use shared::models::{CategoryDraft, ItemDraft};
use shared::util::new_id;
use std::collections::{BTreeMap, HashMap};

use super::SaveError;

pub(super) async fn save<S: OnboardingStore>(
    store: &S,
    business_id: &str,
    categories: &[CategoryDraft],
) -> Result<SavedMenu, SaveError> {
    let mut saved = SavedMenu::default();
    for (index, category) in categories.iter().enumerate() {
        let saved_category = save_category(store, business_id, category, index as i32).await?;
        saved.categories.push(saved_category);
    }
    tracing::info!(categories = saved.categories.len(), "menu saved");
    Ok(saved)
}

async fn save_category<S: OnboardingStore>(
    store: &S,
    business_id: &str,
    category: &CategoryDraft,
    sort_order: i32,
) -> Result<SavedCategory, SaveError> {
    let category_id = match store.find_category_by_name(business_id, &category.name).await? {
        Some(existing) => {
            // clean slate before re-insert keeps re-saves idempotent
            store.delete_option_groups(&existing.id).await?;
            store.delete_items(&existing.id).await?;
            existing.id
        }
        None => {
            store
                .insert_category(CategoryRow {
                    id: new_id(),
                    business_id: business_id.to_string(),
                    name: category.name.clone(),
                    sort_order,
                })
                .await?
                .id
        }
    };

    // size option name -> persisted option id, for the item price maps
    let mut size_option_ids: HashMap<String, String> = HashMap::new();
    for (group_index, group) in category.option_groups.iter().enumerate() {
        let group_row = store
            .insert_option_group(OptionGroupRow {
                id: new_id(),
                category_id: category_id.clone(),
                name: group.name.clone(),
                kind: group.kind,
                sort_order: group_index as i32,
            })
            .await?;
        for (option_index, option) in group.options.iter().enumerate() {
            let option_row = store
                .insert_option(OptionRow {
                    id: new_id(),
                    option_group_id: group_row.id.clone(),
                    name: option.name.clone(),
                    price_modifier: option.price_modifier,
                    sort_order: option_index as i32,
                })
                .await?;
            if group.kind == shared::models::OptionGroupKind::Size {
                size_option_ids.insert(option.name.clone(), option_row.id);
            }
        }
    }

    let has_size_group = category.size_group().is_some();
    let mut saved_items = Vec::with_capacity(category.items.len());
    for item in &category.items {
        let row = store
            .insert_item(MenuItemRow {
                id: item.id.clone(),
                category_id: category_id.clone(),
                name: item.name.clone(),
                price: persisted_price(item),
                option_prices: option_price_map(item, has_size_group, &size_option_ids),
            })
            .await?;
        saved_items.push(SavedItem {
            id: row.id,
            name: item.name.clone(),
        });
    }

    Ok(SavedCategory {
        id: category_id,
        name: category.name.clone(),
        items: saved_items,
    })
}

/// The persisted flat price: minimum across size prices when sizes
/// exist, else the base price (both reduce to the map minimum)
fn persisted_price(item: &ItemDraft) -> i64 {
    item.prices.values().copied().min().unwrap_or(0)
}

/// Build the persisted option-id-keyed price map.
///
/// Attached only when the category actually has a size group: downstream
/// consumers treat its presence as the size signal, so attaching it to a
/// base-priced item would be wrong, not merely redundant.
fn option_price_map(
    item: &ItemDraft,
    has_size_group: bool,
    size_option_ids: &HashMap<String, String>,
) -> Option<BTreeMap<String, i64>> {
    if !has_size_group {
        return None;
    }
    let map: BTreeMap<String, i64> = item
        .prices
        .iter()
        .filter_map(|(name, price)| size_option_ids.get(name).map(|id| (id.clone(), *price)))
        .collect();
    (!map.is_empty()).then_some(map)
}
