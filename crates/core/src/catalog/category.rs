//! Category tree.
//!
//! A shop's menu is a tree of [`CategoryNode`]s. The root carries the shop's
//! display name and is never treated as a category itself; its children are
//! the categories vendors create. Children are keyed by name in an ordered map,
//! so sibling names are unique and iteration is ascending by name.

use std::collections::BTreeMap;
use std::iter::FusedIterator;

use super::item::ItemList;

/// A named node in a menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryNode {
    name: String,
    children: BTreeMap<String, CategoryNode>,
    items: ItemList,
}

impl CategoryNode {
    /// Create an empty node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
            items: ItemList::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items directly in this node.
    #[must_use]
    pub const fn items(&self) -> &ItemList {
        &self.items
    }

    pub(crate) const fn items_mut(&mut self) -> &mut ItemList {
        &mut self.items
    }

    /// Return the child called `name`, creating an empty one if needed.
    ///
    /// Name matching is exact and case-sensitive.
    pub fn get_or_create_child(&mut self, name: &str) -> &mut Self {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Self::new(name))
    }

    /// Look up a direct child without creating it.
    #[must_use]
    pub fn get_child(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    pub(crate) fn get_child_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.children.get_mut(name)
    }

    /// Direct children, ascending by name.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Self> {
        self.children.values()
    }

    /// Names of the direct children, ascending.
    #[must_use]
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    /// Depth-first pre-order walk of this subtree.
    ///
    /// Yields `(node, depth)` starting with `(self, 0)`. Siblings are visited
    /// in ascending name order. Each call starts a fresh walk.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![(self, 0)],
        }
    }
}

/// Iterator returned by [`CategoryNode::preorder`].
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<(&'a CategoryNode, usize)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (&'a CategoryNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Reverse push so the smallest name pops first.
        for child in node.children.values().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((node, depth))
    }
}

impl FusedIterator for Preorder<'_> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::item::ItemRecord;
    use crate::types::Price;

    fn visit(root: &CategoryNode) -> Vec<(String, usize)> {
        root.preorder()
            .map(|(node, depth)| (node.name().to_string(), depth))
            .collect()
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut root = CategoryNode::new("Tito Jims Grill");
        root.get_or_create_child("Meals")
            .items_mut()
            .insert(ItemRecord::new("m1", "Chicken BBQ", Price::from_cents(12000)));
        let again = root.get_or_create_child("Meals");
        assert_eq!(again.items().len(), 1);
        assert_eq!(root.child_names(), ["Meals"]);
    }

    #[test]
    fn test_get_child_is_case_sensitive() {
        let mut root = CategoryNode::new("root");
        root.get_or_create_child("Drinks");
        assert!(root.get_child("Drinks").is_some());
        assert!(root.get_child("drinks").is_none());
    }

    #[test]
    fn test_preorder_ascending_siblings() {
        let mut root = CategoryNode::new("root");
        root.get_or_create_child("Meals");
        root.get_or_create_child("Drinks");
        assert_eq!(
            visit(&root),
            [
                ("root".to_string(), 0),
                ("Drinks".to_string(), 1),
                ("Meals".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_preorder_descends_before_next_sibling() {
        let mut root = CategoryNode::new("root");
        let meals = root.get_or_create_child("Meals");
        meals.get_or_create_child("Rice");
        meals.get_or_create_child("Grilled");
        root.get_or_create_child("Drinks")
            .get_or_create_child("Shakes");
        root.get_or_create_child("Zesty");

        let names: Vec<_> = visit(&root).into_iter().collect();
        assert_eq!(
            names,
            [
                ("root".to_string(), 0),
                ("Drinks".to_string(), 1),
                ("Shakes".to_string(), 2),
                ("Meals".to_string(), 1),
                ("Grilled".to_string(), 2),
                ("Rice".to_string(), 2),
                ("Zesty".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_preorder_is_restartable() {
        let mut root = CategoryNode::new("root");
        root.get_or_create_child("A");
        let mut walk = root.preorder();
        walk.next();
        assert_eq!(visit(&root).len(), 2);
        assert_eq!(walk.count(), 1);
    }

    #[test]
    fn test_preorder_single_node() {
        let root = CategoryNode::new("alone");
        assert_eq!(visit(&root), [("alone".to_string(), 0)]);
    }
}
