//! Menu Catalog Models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price-map key for an item without size differentiation
pub const BASE_PRICE_KEY: &str = "base";

/// Option group kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OptionGroupKind {
    /// Mutually exclusive single choice; determines which per-size item
    /// price applies
    Size,
    Supplement,
    Other,
}

/// One option inside a group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionDraft {
    pub name: String,
    /// Flat price modifier in minor units; unused for size options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_modifier: Option<i64>,
}

/// An option group inside a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionGroupDraft {
    pub id: String,
    pub name: String,
    pub kind: OptionGroupKind,
    pub options: Vec<OptionDraft>,
}

/// A menu item inside a category.
///
/// `prices` is keyed by [`BASE_PRICE_KEY`] when the category has no size
/// group, else by size option *name* (one entry per size option). Values
/// are minor units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDraft {
    pub id: String,
    pub name: String,
    pub prices: BTreeMap<String, i64>,
}

/// A menu category with its nested option groups and items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDraft {
    pub id: String,
    pub name: String,
    pub option_groups: Vec<OptionGroupDraft>,
    pub items: Vec<ItemDraft>,
}

impl CategoryDraft {
    /// The category's size option group, if it has one
    pub fn size_group(&self) -> Option<&OptionGroupDraft> {
        self.option_groups
            .iter()
            .find(|g| g.kind == OptionGroupKind::Size)
    }
}

/// Partial update for the category being edited
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
}

/// Menu sub-flow state: category -> options -> items -> done.
///
/// `Done` is reached only via "finalize category".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MenuStage {
    #[default]
    Category,
    Options,
    Items,
    Done,
}

/// Step 3 slice of the draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuDraft {
    /// Committed categories, in display order
    pub categories: Vec<CategoryDraft>,
    /// Category currently being edited; at most one at a time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CategoryDraft>,
    #[serde(default)]
    pub stage: MenuStage,
}
