//! Storefront models.

pub mod session;

pub use session::{CurrentVendor, keys as session_keys};
