//! Menu reducers
//!
//! The invariant here: after every mutation, either there is no current
//! category, or the current category and any committed copy with the same
//! id are field-for-field identical. To keep the two from diverging, each
//! nested mutation locates the committed copy by id and the current copy
//! by id independently and applies the same edit to both — no shared
//! aliasing between the copies.

use shared::draft::OnboardingDraft;
use shared::models::{CategoryDraft, CategoryPatch, ItemDraft, MenuStage, OptionGroupDraft};

/// Apply the same edit to the committed copy (if any) and the current
/// copy (if it is the one being edited)
fn update_category<F>(draft: &mut OnboardingDraft, category_id: &str, mut edit: F)
where
    F: FnMut(&mut CategoryDraft),
{
    if let Some(committed) = draft
        .menu
        .categories
        .iter_mut()
        .find(|c| c.id == category_id)
    {
        edit(committed);
    }
    if let Some(current) = draft.menu.current.as_mut()
        && current.id == category_id
    {
        edit(current);
    }
}

/// Start editing a new category
pub(super) fn add_category(draft: &mut OnboardingDraft, category: CategoryDraft) {
    draft.menu.current = Some(category);
}

pub(super) fn patch_current(draft: &mut OnboardingDraft, patch: CategoryPatch) {
    let Some(current) = draft.menu.current.as_ref() else {
        return;
    };
    let category_id = current.id.clone();
    update_category(draft, &category_id, |category| {
        if let Some(ref name) = patch.name {
            category.name = name.clone();
        }
    });
}

pub(super) fn add_option_group(
    draft: &mut OnboardingDraft,
    category_id: &str,
    group: OptionGroupDraft,
) {
    update_category(draft, category_id, |category| {
        if !category.option_groups.iter().any(|g| g.id == group.id) {
            category.option_groups.push(group.clone());
        }
    });
}

pub(super) fn replace_option_group(
    draft: &mut OnboardingDraft,
    category_id: &str,
    group: OptionGroupDraft,
) {
    update_category(draft, category_id, |category| {
        if let Some(slot) = category.option_groups.iter_mut().find(|g| g.id == group.id) {
            *slot = group.clone();
        }
    });
}

pub(super) fn remove_option_group(draft: &mut OnboardingDraft, category_id: &str, group_id: &str) {
    update_category(draft, category_id, |category| {
        category.option_groups.retain(|g| g.id != group_id);
    });
}

pub(super) fn add_item(draft: &mut OnboardingDraft, category_id: &str, item: ItemDraft) {
    update_category(draft, category_id, |category| {
        if !category.items.iter().any(|i| i.id == item.id) {
            category.items.push(item.clone());
        }
    });
}

pub(super) fn update_item(draft: &mut OnboardingDraft, category_id: &str, item: ItemDraft) {
    update_category(draft, category_id, |category| {
        if let Some(slot) = category.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item.clone();
        }
    });
}

pub(super) fn remove_item(draft: &mut OnboardingDraft, category_id: &str, item_id: &str) {
    update_category(draft, category_id, |category| {
        category.items.retain(|i| i.id != item_id);
    });
}

/// Upsert the current category into the committed list by id, clear
/// "current", and advance the menu stage to Done.
///
/// This is the only path into [`MenuStage::Done`] and the only place the
/// upsert-by-id merge happens. No-op without a current category.
pub(super) fn finalize_category(draft: &mut OnboardingDraft) {
    let Some(current) = draft.menu.current.take() else {
        return;
    };
    match draft
        .menu
        .categories
        .iter_mut()
        .find(|c| c.id == current.id)
    {
        Some(slot) => *slot = current,
        None => draft.menu.categories.push(current),
    }
    draft.menu.stage = MenuStage::Done;
}

/// Remove a committed category; clears "current" only when the ids match
pub(super) fn remove_category(draft: &mut OnboardingDraft, category_id: &str) {
    draft.menu.categories.retain(|c| c.id != category_id);
    if draft
        .menu
        .current
        .as_ref()
        .is_some_and(|c| c.id == category_id)
    {
        draft.menu.current = None;
    }
}

pub(super) fn set_stage(draft: &mut OnboardingDraft, stage: MenuStage) {
    draft.menu.stage = stage;
}

pub(super) fn replace_categories(draft: &mut OnboardingDraft, list: Vec<CategoryDraft>) {
    draft.menu.categories = list;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OptionDraft, OptionGroupKind};
    use std::collections::BTreeMap;

    fn test_category(id: &str, name: &str) -> CategoryDraft {
        CategoryDraft {
            id: id.to_string(),
            name: name.to_string(),
            option_groups: Vec::new(),
            items: Vec::new(),
        }
    }

    fn test_item(id: &str, name: &str, base_price: i64) -> ItemDraft {
        ItemDraft {
            id: id.to_string(),
            name: name.to_string(),
            prices: BTreeMap::from([("base".to_string(), base_price)]),
        }
    }

    fn size_group(id: &str) -> OptionGroupDraft {
        OptionGroupDraft {
            id: id.to_string(),
            name: "Size".to_string(),
            kind: OptionGroupKind::Size,
            options: vec![
                OptionDraft {
                    name: "S".to_string(),
                    price_modifier: None,
                },
                OptionDraft {
                    name: "L".to_string(),
                    price_modifier: None,
                },
            ],
        }
    }

    #[test]
    fn test_finalize_appends_new_category_and_clears_current() {
        let mut draft = OnboardingDraft::default();
        add_category(&mut draft, test_category("cat-1", "Pizzas"));
        finalize_category(&mut draft);

        assert_eq!(draft.menu.categories.len(), 1);
        assert!(draft.menu.current.is_none());
        assert_eq!(draft.menu.stage, MenuStage::Done);
    }

    #[test]
    fn test_finalize_same_id_replaces_never_duplicates() {
        let mut draft = OnboardingDraft::default();
        add_category(&mut draft, test_category("cat-1", "Pizzas"));
        finalize_category(&mut draft);

        // re-edit under the same id with different contents
        add_category(&mut draft, test_category("cat-1", "Pizze"));
        finalize_category(&mut draft);

        assert_eq!(draft.menu.categories.len(), 1);
        assert_eq!(draft.menu.categories[0].name, "Pizze");
    }

    #[test]
    fn test_finalize_without_current_is_noop() {
        let mut draft = OnboardingDraft::default();
        draft.menu.stage = MenuStage::Items;
        finalize_category(&mut draft);
        assert!(draft.menu.categories.is_empty());
        assert_eq!(draft.menu.stage, MenuStage::Items);
    }

    #[test]
    fn test_remove_category_clears_current_only_on_id_match() {
        let mut draft = OnboardingDraft::default();
        add_category(&mut draft, test_category("cat-1", "Pizzas"));
        finalize_category(&mut draft);
        add_category(&mut draft, test_category("cat-2", "Desserts"));

        remove_category(&mut draft, "cat-1");
        assert!(draft.menu.current.is_some());

        remove_category(&mut draft, "cat-2");
        assert!(draft.menu.current.is_none());
    }

    #[test]
    fn test_item_mutations_mirror_into_committed_copy() {
        let mut draft = OnboardingDraft::default();
        add_category(&mut draft, test_category("cat-1", "Pizzas"));
        finalize_category(&mut draft);
        // re-open the committed category for editing
        add_category(&mut draft, test_category("cat-1", "Pizzas"));

        add_item(&mut draft, "cat-1", test_item("item-1", "Margherita", 900));

        // both copies received the edit; they never diverge
        assert_eq!(draft.menu.categories[0].items.len(), 1);
        assert_eq!(draft.menu.current.as_ref().unwrap().items.len(), 1);
        assert_eq!(
            draft.menu.categories[0],
            *draft.menu.current.as_ref().unwrap()
        );
    }

    #[test]
    fn test_item_mutations_apply_to_both_copies_when_synced() {
        let mut draft = OnboardingDraft::default();
        let mut category = test_category("cat-1", "Pizzas");
        category.items.push(test_item("item-1", "Margherita", 900));
        draft.menu.categories.push(category.clone());
        draft.menu.current = Some(category);

        update_item(&mut draft, "cat-1", test_item("item-1", "Margherita", 950));

        assert_eq!(draft.menu.categories[0].items[0].prices["base"], 950);
        assert_eq!(
            draft.menu.current.as_ref().unwrap().items[0].prices["base"],
            950
        );
        assert_eq!(
            draft.menu.categories[0],
            *draft.menu.current.as_ref().unwrap()
        );
    }

    #[test]
    fn test_add_item_ignores_duplicate_id() {
        let mut draft = OnboardingDraft::default();
        add_category(&mut draft, test_category("cat-1", "Pizzas"));
        add_item(&mut draft, "cat-1", test_item("item-1", "Margherita", 900));
        add_item(&mut draft, "cat-1", test_item("item-1", "Margherita", 999));

        let current = draft.menu.current.as_ref().unwrap();
        assert_eq!(current.items.len(), 1);
        assert_eq!(current.items[0].prices["base"], 900);
    }

    #[test]
    fn test_option_group_add_replace_remove() {
        let mut draft = OnboardingDraft::default();
        add_category(&mut draft, test_category("cat-1", "Pizzas"));
        add_option_group(&mut draft, "cat-1", size_group("grp-1"));

        let mut replacement = size_group("grp-1");
        replacement.options.pop();
        replace_option_group(&mut draft, "cat-1", replacement);
        assert_eq!(
            draft.menu.current.as_ref().unwrap().option_groups[0]
                .options
                .len(),
            1
        );

        remove_option_group(&mut draft, "cat-1", "grp-1");
        assert!(
            draft
                .menu
                .current
                .as_ref()
                .unwrap()
                .option_groups
                .is_empty()
        );
    }

    #[test]
    fn test_patch_current_renames_both_copies() {
        let mut draft = OnboardingDraft::default();
        let category = test_category("cat-1", "Pizzas");
        draft.menu.categories.push(category.clone());
        draft.menu.current = Some(category);

        patch_current(
            &mut draft,
            CategoryPatch {
                name: Some("Pizze".to_string()),
            },
        );

        assert_eq!(draft.menu.categories[0].name, "Pizze");
        assert_eq!(draft.menu.current.as_ref().unwrap().name, "Pizze");
    }
}
