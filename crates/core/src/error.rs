//! Catalog error types.
//!
//! Expected business outcomes (missing category, missing item, wrong password)
//! are reported through `Option`/`bool` returns, not through this enum. These
//! variants cover rejected input, the opt-in duplicate checks and lock failures.

use thiserror::Error;

use crate::types::{ItemId, PriceError, ShopId};

/// Errors raised by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An item with this id already exists and duplicates are rejected.
    #[error("item {0} already exists")]
    DuplicateItem(ItemId),

    /// A shop with this id is already registered.
    #[error("shop {0} already exists")]
    DuplicateShop(ShopId),

    /// A price failed validation.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// A shop lock was poisoned by a panicking writer.
    #[error("shop {0} is unavailable: lock poisoned")]
    LockPoisoned(ShopId),
}

/// Result type alias for `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;
