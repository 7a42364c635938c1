//! Cross-shop search.
//!
//! Matching is a case-insensitive substring test. Shops match on name or id;
//! items match on name or id and are found by walking every shop's menu in
//! pre-order. Item scanning happens for every shop, including shops that
//! already matched by name.

use serde::Serialize;
use tracing::{debug, instrument};

use super::item::ItemRecord;
use super::registry::Registry;
use super::shop::{Shop, ShopSummary};
use crate::error::Result;
use crate::types::ShopId;

/// An item hit together with the category it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMatch {
    pub category: String,
    pub item: ItemRecord,
}

/// All item hits for one shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopItemMatches {
    pub shop_id: ShopId,
    pub shop_name: String,
    pub matches: Vec<ItemMatch>,
}

/// Result of [`Registry::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// The query as searched (trimmed).
    pub query: String,
    /// Shops whose name or id matched, in registry order.
    pub shops: Vec<ShopSummary>,
    /// Item hits grouped by shop, in registry order. Shops without hits are
    /// left out.
    pub items: Vec<ShopItemMatches>,
}

impl SearchResults {
    /// Item hits for one shop, if it had any.
    #[must_use]
    pub fn items_for(&self, shop_id: &str) -> Option<&[ItemMatch]> {
        self.items
            .iter()
            .find(|group| group.shop_id.as_str() == shop_id)
            .map(|group| group.matches.as_slice())
    }

    /// Number of shop hits plus item hits.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.shops.len() + self.items.iter().map(|g| g.matches.len()).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty() && self.items.is_empty()
    }
}

impl Registry {
    /// Search shops and items across the whole registry.
    ///
    /// A blank query returns empty results.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LockPoisoned` if a shop cannot be read.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        let query = query.trim();
        let mut results = SearchResults {
            query: query.to_string(),
            ..SearchResults::default()
        };
        if query.is_empty() {
            return Ok(results);
        }

        let needle = query.to_lowercase();
        for handle in self.list_shops() {
            let shop = handle.read()?;
            if shop_matches(&shop, &needle) {
                results.shops.push(shop.summary());
            }
            let matches = item_matches(&shop, &needle);
            if !matches.is_empty() {
                results.items.push(ShopItemMatches {
                    shop_id: shop.id().clone(),
                    shop_name: shop.name().to_string(),
                    matches,
                });
            }
        }

        debug!(
            shops = results.shops.len(),
            items = results.total_matches() - results.shops.len(),
            "search complete"
        );
        Ok(results)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn shop_matches(shop: &Shop, needle: &str) -> bool {
    contains_ignore_case(shop.name(), needle) || contains_ignore_case(shop.id().as_str(), needle)
}

fn item_matches(shop: &Shop, needle: &str) -> Vec<ItemMatch> {
    shop.menu()
        .preorder()
        .flat_map(|(node, _)| {
            node.items()
                .iter()
                .filter(move |item| {
                    contains_ignore_case(&item.name, needle)
                        || contains_ignore_case(item.id.as_str(), needle)
                })
                .map(move |item| ItemMatch {
                    category: node.name().to_string(),
                    item: item.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Price, ShopStatus};

    fn registry() -> Registry {
        let mut s1 = Shop::new("s1", "Tito Jims Grill", "hesoyam").with_status(ShopStatus::Open);
        s1.add_item("Meals", "m1", "Chicken BBQ", Price::from_cents(12000))
            .unwrap();
        s1.add_item("Meals", "m2", "Pork Sisig", Price::from_cents(8000))
            .unwrap();
        s1.add_item("Drinks", "d1", "Iced Tea", Price::from_cents(2500))
            .unwrap();
        let mut s2 = Shop::new("s2", "Sweet Bites", "stinglikeabee");
        s2.add_item("Desserts", "ds1", "Chocolate Cake", Price::from_cents(6000))
            .unwrap();

        let mut registry = Registry::new();
        registry.insert(s1).unwrap();
        registry.insert(s2).unwrap();
        registry
    }

    #[test]
    fn test_item_match_case_insensitive() {
        let results = registry().search("ICED").unwrap();
        assert!(results.shops.is_empty());
        let hits = results.items_for("s1").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Drinks");
        assert_eq!(hits[0].item.name, "Iced Tea");
        assert!(results.items_for("s2").is_none());
    }

    #[test]
    fn test_shop_match_still_scans_items() {
        let results = registry().search("s2").unwrap();
        assert_eq!(results.shops.len(), 1);
        assert_eq!(results.shops[0].id.as_str(), "s2");

        let results = registry().search("bites").unwrap();
        assert_eq!(results.shops.len(), 1);
        assert!(results.items.is_empty());

        let results = registry().search("s").unwrap();
        assert_eq!(results.shops.len(), 2);
        // Both shops match by id and still report their item hits.
        assert!(results.items_for("s1").is_some());
        assert!(results.items_for("s2").is_some());
    }

    #[test]
    fn test_item_match_by_id_in_preorder() {
        let results = registry().search("m").unwrap();
        let hits: Vec<_> = results
            .items_for("s1")
            .unwrap()
            .iter()
            .map(|m| m.item.id.as_str())
            .collect();
        assert_eq!(hits, ["m1", "m2"]);
    }

    #[test]
    fn test_preorder_order_across_categories() {
        let results = registry().search("e").unwrap();
        let categories: Vec<_> = results
            .items_for("s1")
            .unwrap()
            .iter()
            .map(|m| m.category.as_str())
            .collect();
        assert_eq!(categories, ["Drinks", "Meals"]);
    }

    #[test]
    fn test_blank_query_is_empty() {
        let results = registry().search("   ").unwrap();
        assert!(results.is_empty());
        assert_eq!(results.total_matches(), 0);
    }

    #[test]
    fn test_no_results() {
        let results = registry().search("pizza").unwrap();
        assert!(results.is_empty());
        assert_eq!(results.query, "pizza");
    }
}
