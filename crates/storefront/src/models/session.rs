//! Session-related types.
//!
//! Types stored in the session for vendor authentication state.

use serde::{Deserialize, Serialize};

use foodhub_core::ShopId;

/// Session-stored vendor identity.
///
/// Minimal data stored in the session to identify which shop the vendor
/// manages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentVendor {
    /// The shop the vendor logged in to.
    pub shop_id: ShopId,
    /// Shop display name at login time.
    pub shop_name: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the logged-in vendor.
    pub const CURRENT_VENDOR: &str = "current_vendor";
}
