//! Menu items and the per-category item list.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::types::{ItemId, Price};

/// A single menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub available: bool,
}

impl ItemRecord {
    /// Create an item. New items are always available.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available: true,
        }
    }

    /// `"Available"` or `"Sold Out"`.
    #[must_use]
    pub const fn availability_label(&self) -> &'static str {
        availability_label(self.available)
    }
}

/// Label used in listings and activity messages for an availability flag.
#[must_use]
pub const fn availability_label(available: bool) -> &'static str {
    if available { "Available" } else { "Sold Out" }
}

/// Ordered items of one category.
///
/// Insertion order is preserved. `insert` does not check for duplicate ids;
/// lookups and deletes act on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<ItemRecord>,
}

impl ItemList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item, even if its id is already present.
    pub fn insert(&mut self, item: ItemRecord) {
        self.items.push(item);
    }

    /// Append an item unless its id is already present.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateItem` if an item with the same id exists.
    pub fn try_insert(&mut self, item: ItemRecord) -> Result<()> {
        if self.find(item.id.as_str()).is_some() {
            return Err(CatalogError::DuplicateItem(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// First item with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut ItemRecord> {
        self.items.iter_mut().find(|item| item.id.as_str() == id)
    }

    /// Remove the first item with the given id.
    ///
    /// Returns `true` if an item was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id.as_str() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Read-only view of the items in insertion order.
    #[must_use]
    pub fn to_list(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRecord> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a ItemRecord;
    type IntoIter = std::slice::Iter<'a, ItemRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
