//! Application state shared across handlers.

use std::sync::Arc;

use foodhub_core::{Registry, ShopHandle};

use crate::config::StorefrontConfig;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog registry and configuration. The registry is built once before
/// the server starts and lives until it shuts down.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    registry: Registry,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, registry: Registry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, registry }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Look up a shop, mapping an unknown id to `AppError::NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no shop has this id.
    pub fn shop(&self, shop_id: &str) -> Result<&ShopHandle, AppError> {
        self.registry()
            .get(shop_id)
            .ok_or_else(|| AppError::NotFound(format!("Shop {shop_id} not found")))
    }
}
