//! A vendor's shop: menu tree, activity log, credential and status.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::activity::{ActivityLog, DEFAULT_CAPACITY};
use super::category::CategoryNode;
use super::item::{ItemRecord, availability_label};
use crate::error::{CatalogError, Result};
use crate::types::{Credential, ItemId, Price, ShopId, ShopStatus};

/// How `Shop::add_item` treats an item id that already exists in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Insert anyway. Callers are expected to check with `find_item` first.
    #[default]
    Allow,
    /// Refuse the insert with `CatalogError::DuplicateItem`.
    Reject,
}

/// Identity and status of a shop, detached from its lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopSummary {
    pub id: ShopId,
    pub name: String,
    pub status: ShopStatus,
}

/// One category in a rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub name: String,
    pub depth: usize,
    pub items: Vec<ItemRecord>,
}

/// A shop and everything it owns.
#[derive(Debug)]
pub struct Shop {
    id: ShopId,
    name: String,
    credential: Credential,
    status: ShopStatus,
    menu: CategoryNode,
    log: ActivityLog,
    duplicate_policy: DuplicatePolicy,
}

impl Shop {
    /// Create a closed shop with an empty menu.
    #[must_use]
    pub fn new(id: impl Into<ShopId>, name: impl Into<String>, password: &str) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            menu: CategoryNode::new(name.clone()),
            name,
            credential: Credential::new(password),
            status: ShopStatus::default(),
            log: ActivityLog::new(DEFAULT_CAPACITY),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Replace the activity log with an empty one of the given capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log = ActivityLog::new(capacity);
        self
    }

    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the initial status without recording activity.
    #[must_use]
    pub fn with_status(mut self, status: ShopStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &ShopId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn status(&self) -> ShopStatus {
        self.status
    }

    /// Root of the menu tree. The root is named after the shop.
    #[must_use]
    pub const fn menu(&self) -> &CategoryNode {
        &self.menu
    }

    #[must_use]
    pub const fn log(&self) -> &ActivityLog {
        &self.log
    }

    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    #[must_use]
    pub fn check_password(&self, candidate: &str) -> bool {
        self.credential.matches(candidate)
    }

    /// Add a category under the menu root.
    ///
    /// Adding an existing category changes nothing but is still logged.
    pub fn add_category(&mut self, name: &str) {
        self.menu.get_or_create_child(name);
        self.log.enqueue(format!("Category '{name}' added"));
        debug!(shop_id = %self.id, category = name, "category added");
    }

    /// Append an available item to `category`, creating the category if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateItem` only under
    /// `DuplicatePolicy::Reject` when the id already exists in this shop.
    pub fn add_item(
        &mut self,
        category: &str,
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Price,
    ) -> Result<()> {
        let item = ItemRecord::new(id, name, price);
        if self.duplicate_policy == DuplicatePolicy::Reject
            && self.find_item(item.id.as_str()).is_some()
        {
            return Err(CatalogError::DuplicateItem(item.id));
        }

        let message = format!("Added item '{}' to {category}", item.name);
        debug!(shop_id = %self.id, category, item_id = %item.id, "item added");
        self.menu
            .get_or_create_child(category)
            .items_mut()
            .insert(item);
        self.log.enqueue(message);
        Ok(())
    }

    /// Remove the first item with `id` from `category`.
    ///
    /// Returns `false` if the category or the item does not exist.
    pub fn remove_item(&mut self, category: &str, id: &str) -> bool {
        let Some(node) = self.menu.get_child_mut(category) else {
            return false;
        };
        if !node.items_mut().delete(id) {
            return false;
        }
        self.log.enqueue(format!("Removed item {id} from {category}"));
        debug!(shop_id = %self.id, category, item_id = id, "item removed");
        true
    }

    /// Find an item anywhere in the menu.
    ///
    /// Categories are searched in pre-order; the first match wins. Returns the
    /// containing category together with the item.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<(&CategoryNode, &ItemRecord)> {
        self.menu
            .preorder()
            .find_map(|(node, _)| node.items().find(id).map(|item| (node, item)))
    }

    /// Set the availability of an item in `category`.
    ///
    /// Returns `false` if the category or the item does not exist.
    pub fn toggle_availability(&mut self, category: &str, id: &str, available: bool) -> bool {
        let Some(item) = self
            .menu
            .get_child_mut(category)
            .and_then(|node| node.items_mut().find_mut(id))
        else {
            return false;
        };
        item.available = available;
        let message = format!(
            "Item '{}' marked {}",
            item.name,
            availability_label(available)
        );
        self.log.enqueue(message);
        debug!(shop_id = %self.id, category, item_id = id, available, "availability changed");
        true
    }

    /// Change the shop status.
    ///
    /// Returns `false`, without logging, if the shop already has `status`.
    pub fn set_status(&mut self, status: ShopStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.log.enqueue(format!("Shop status changed to {status}"));
        debug!(shop_id = %self.id, %status, "status changed");
        true
    }

    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.menu.get_child(name).is_some()
    }

    /// Top-level category names, ascending.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.menu.child_names()
    }

    #[must_use]
    pub fn summary(&self) -> ShopSummary {
        ShopSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status,
        }
    }

    /// The menu in pre-order, without the root.
    ///
    /// Depths start at 0 for top-level categories.
    #[must_use]
    pub fn menu_sections(&self) -> Vec<MenuSection> {
        self.menu
            .preorder()
            .skip(1)
            .map(|(node, depth)| MenuSection {
                name: node.name().to_string(),
                depth: depth - 1,
                items: node.items().to_list().to_vec(),
            })
            .collect()
    }
}
