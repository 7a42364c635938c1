//! FoodHub Core - the multi-shop catalog model.
//!
//! This crate provides the catalog used by all FoodHub components:
//! - `storefront` - JSON API for customers and vendors
//! - `cli` - Command-line tools for browsing and seed management
//!
//! # Architecture
//!
//! The core crate contains only the data model and its operations - no I/O,
//! no HTTP, no persistence. A [`Registry`] is built once at process start and
//! passed by reference to whatever serves requests.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, statuses and credentials
//! - [`catalog`] - Items, category trees, activity logs, shops, registry, search
//! - [`seed`] - Seed data and registry bootstrap
//! - [`error`] - Catalog error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod seed;
pub mod types;

pub use catalog::*;
pub use error::{CatalogError, Result};
pub use seed::{RegistryOptions, SeedCatalog, validate_seed};
pub use types::*;
