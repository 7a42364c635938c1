//! Seed data for building a [`Registry`] at startup.
//!
//! A seed is a plain serde structure, so binaries can load it from YAML. The
//! built-in [`SeedCatalog::demo`] seed is used when no file is given.
//!
//! Seeding replays `add_category`/`add_item` on each shop, so a freshly seeded
//! shop's activity log already shows the seed actions. The seed status is set
//! directly and is not logged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{DEFAULT_CAPACITY, DuplicatePolicy, Registry, Shop};
use crate::error::Result;
use crate::types::{Price, ShopStatus};

/// Options applied to every shop built from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Activity log capacity per shop.
    pub log_capacity: usize,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_CAPACITY,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

/// A full catalog seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub shops: Vec<SeedShop>,
}

/// One shop in a seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedShop {
    pub id: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub status: ShopStatus,
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
}

/// One category and its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

/// One menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: String,
    pub name: String,
    pub price: Price,
}

impl SeedItem {
    fn new(id: &str, name: &str, cents: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: Price::from_cents(cents),
        }
    }
}

impl SeedCatalog {
    /// The built-in demo catalog: an open grill and a closed dessert shop.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            shops: vec![
                SeedShop {
                    id: "s1".to_string(),
                    name: "Tito Jims Grill".to_string(),
                    password: "hesoyam".to_string(),
                    status: ShopStatus::Open,
                    categories: vec![
                        SeedCategory {
                            name: "Meals".to_string(),
                            items: vec![
                                SeedItem::new("m1", "Chicken BBQ", 12000),
                                SeedItem::new("m2", "Pork Sisig", 8000),
                            ],
                        },
                        SeedCategory {
                            name: "Drinks".to_string(),
                            items: vec![SeedItem::new("d1", "Iced Tea", 2500)],
                        },
                    ],
                },
                SeedShop {
                    id: "s2".to_string(),
                    name: "Sweet Bites".to_string(),
                    password: "stinglikeabee".to_string(),
                    status: ShopStatus::Closed,
                    categories: vec![SeedCategory {
                        name: "Desserts".to_string(),
                        items: vec![SeedItem::new("ds1", "Chocolate Cake", 6000)],
                    }],
                },
            ],
        }
    }
}

/// Check a seed for problems without building it.
///
/// Returns one message per problem; an empty list means the seed is valid.
#[must_use]
pub fn validate_seed(seed: &SeedCatalog) -> Vec<String> {
    let mut errors = Vec::new();
    let mut shop_ids = HashSet::new();

    for (i, shop) in seed.shops.iter().enumerate() {
        if shop.id.trim().is_empty() {
            errors.push(format!("Shop at index {i} has an empty id"));
        } else if !shop_ids.insert(shop.id.as_str()) {
            errors.push(format!("Duplicate shop id: {}", shop.id));
        }
        if shop.name.trim().is_empty() {
            errors.push(format!("Shop {} has an empty name", shop.id));
        }
        if shop.password.is_empty() {
            errors.push(format!("Shop {} has an empty password", shop.id));
        }

        let mut item_ids = HashSet::new();
        for category in &shop.categories {
            if category.name.trim().is_empty() {
                errors.push(format!("Shop {} has a category with an empty name", shop.id));
            }
            for item in &category.items {
                if item.id.trim().is_empty() || item.name.trim().is_empty() {
                    errors.push(format!(
                        "Shop {} category '{}' has an item with an empty id or name",
                        shop.id, category.name
                    ));
                } else if !item_ids.insert(item.id.as_str()) {
                    errors.push(format!("Duplicate item id {} in shop {}", item.id, shop.id));
                }
            }
        }
    }

    errors
}

impl Registry {
    /// Build a registry from a seed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateShop` for repeated shop ids and
    /// `CatalogError::DuplicateItem` for repeated item ids when
    /// `options.duplicate_policy` rejects them.
    pub fn from_seed(seed: &SeedCatalog, options: &RegistryOptions) -> Result<Self> {
        let mut registry = Self::new();
        for seed_shop in &seed.shops {
            let mut shop = Shop::new(seed_shop.id.as_str(), seed_shop.name.as_str(), &seed_shop.password)
                .with_log_capacity(options.log_capacity)
                .with_duplicate_policy(options.duplicate_policy)
                .with_status(seed_shop.status);
            for category in &seed_shop.categories {
                shop.add_category(&category.name);
                for item in &category.items {
                    shop.add_item(&category.name, item.id.as_str(), item.name.as_str(), item.price)?;
                }
            }
            registry.insert(shop)?;
        }
        info!(shops = registry.len(), "catalog seeded");
        Ok(registry)
    }

    /// Build the built-in demo registry with default options.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in seed; the `Result` mirrors
    /// [`Registry::from_seed`].
    pub fn demo() -> Result<Self> {
        Self::from_seed(&SeedCatalog::demo(), &RegistryOptions::default())
    }
}
