//! The collection of all shops.
//!
//! A [`Registry`] is built once at process start (usually from a seed) and
//! then shared read-only, typically behind an `Arc`. The set of shops never
//! changes after that, so only the shops themselves need locking: each one
//! sits behind its own `RwLock` in a [`ShopHandle`]. Vendor actions hold the
//! write guard for the whole compound operation; listings and search take
//! read guards and never see a half-applied change.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use super::shop::{Shop, ShopSummary};
use crate::error::{CatalogError, Result};
use crate::types::ShopId;

/// Shared, lockable reference to one shop.
#[derive(Debug, Clone)]
pub struct ShopHandle {
    id: ShopId,
    inner: Arc<RwLock<Shop>>,
}

impl ShopHandle {
    fn new(shop: Shop) -> Self {
        Self {
            id: shop.id().clone(),
            inner: Arc::new(RwLock::new(shop)),
        }
    }

    /// The shop id. Readable without locking.
    #[must_use]
    pub const fn id(&self) -> &ShopId {
        &self.id
    }

    /// Lock the shop for reading.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LockPoisoned` if a writer panicked.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Shop>> {
        self.inner
            .read()
            .map_err(|_| CatalogError::LockPoisoned(self.id.clone()))
    }

    /// Lock the shop for writing.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LockPoisoned` if a writer panicked.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Shop>> {
        self.inner
            .write()
            .map_err(|_| CatalogError::LockPoisoned(self.id.clone()))
    }
}

/// All shops, keyed by id, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    shops: Vec<ShopHandle>,
    index: HashMap<ShopId, usize>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shop.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateShop` if the id is already taken.
    pub fn insert(&mut self, shop: Shop) -> Result<ShopHandle> {
        if self.index.contains_key(shop.id()) {
            return Err(CatalogError::DuplicateShop(shop.id().clone()));
        }
        let handle = ShopHandle::new(shop);
        self.index.insert(handle.id().clone(), self.shops.len());
        self.shops.push(handle.clone());
        debug!(shop_id = %handle.id(), "shop registered");
        Ok(handle)
    }

    /// Look up a shop by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ShopHandle> {
        self.index.get(id).and_then(|&i| self.shops.get(i))
    }

    /// Return the shop if `password` matches its credential exactly.
    ///
    /// Unknown ids and wrong passwords both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LockPoisoned` if the shop cannot be read.
    pub fn authenticate(&self, id: &str, password: &str) -> Result<Option<ShopHandle>> {
        let Some(handle) = self.get(id) else {
            debug!(shop_id = id, "login for unknown shop");
            return Ok(None);
        };
        if handle.read()?.check_password(password) {
            Ok(Some(handle.clone()))
        } else {
            warn!(shop_id = id, "invalid shop credentials");
            Ok(None)
        }
    }

    /// All shops in registration order.
    #[must_use]
    pub fn list_shops(&self) -> &[ShopHandle] {
        &self.shops
    }

    /// Summaries of all shops in registration order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LockPoisoned` if any shop cannot be read.
    pub fn summaries(&self) -> Result<Vec<ShopSummary>> {
        self.shops
            .iter()
            .map(|handle| Ok(handle.read()?.summary()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}
