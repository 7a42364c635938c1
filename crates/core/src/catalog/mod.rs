//! The in-memory catalog.
//!
//! - [`item`] - `ItemRecord` and the per-category `ItemList`
//! - [`category`] - the menu tree and its pre-order walk
//! - [`activity`] - bounded recent-activity log
//! - [`shop`] - a vendor's shop and its mutating operations
//! - [`registry`] - all shops, authentication and per-shop locking
//! - [`search`] - cross-shop search

pub mod activity;
pub mod category;
pub mod item;
pub mod registry;
pub mod search;
pub mod shop;

pub use activity::{ActivityEntry, ActivityLog, DEFAULT_CAPACITY};
pub use category::{CategoryNode, Preorder};
pub use item::{ItemList, ItemRecord, availability_label};
pub use registry::{Registry, ShopHandle};
pub use search::{ItemMatch, SearchResults, ShopItemMatches};
pub use shop::{DuplicatePolicy, MenuSection, Shop, ShopSummary};
