//! Static item catalogues.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A weapon category, e.g. `{"id": "sword", "name": "Swords"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponCategory {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Item categories keyed by category id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCategoryTree(pub BTreeMap<String, ItemCategory>);

impl ItemCategoryTree {
    /// Looks up a top-level category.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ItemCategory> {
        self.0.get(id)
    }

    /// Returns the top-level categories in id order.
    pub fn categories(&self) -> impl Iterator<Item = &ItemCategory> {
        self.0.values()
    }

    /// Finds the category that contains the given subcategory.
    #[must_use]
    pub fn parent_of(&self, subcategory_id: &str) -> Option<&ItemCategory> {
        self.categories()
            .find(|c| c.subcategories.iter().any(|s| s.id == subcategory_id))
    }
}

/// A top-level item category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Nested categories.
    #[serde(default)]
    pub subcategories: Vec<ItemSubcategory>,
}

/// A nested item category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSubcategory {
    /// Subcategory identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}
