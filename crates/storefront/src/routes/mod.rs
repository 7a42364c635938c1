//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                 - Health check
//!
//! # Customers
//! GET  /shops                                  - Shop listing
//! GET  /shops/{id}                             - Shop with its menu
//! GET  /shops/{id}/updates                     - Recent shop activity
//! GET  /search?q=...                           - Search shops and items
//!
//! # Vendor auth
//! POST /vendor/login                           - Log in with shop id and password
//! POST /vendor/logout                          - Log out
//!
//! # Vendor dashboard (requires login)
//! GET    /vendor/shop                          - Own shop, menu and updates
//! PUT    /vendor/status                        - Change shop status
//! POST   /vendor/categories                    - Add a category
//! POST   /vendor/items                         - Add an item
//! DELETE /vendor/items/{category}/{id}         - Remove an item
//! PUT    /vendor/items/{category}/{id}/availability - Mark available or sold out
//! ```

pub mod auth;
pub mod search;
pub mod shops;
pub mod vendor;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the customer-facing routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/shops", get(shops::index))
        .route("/shops/{id}", get(shops::show))
        .route("/shops/{id}/updates", get(shops::updates))
        .route("/search", get(search::search))
}

/// Create the vendor routes router.
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/shop", get(vendor::dashboard))
        .route("/status", put(vendor::set_status))
        .route("/categories", post(vendor::add_category))
        .route("/items", post(vendor::add_item))
        .route("/items/{category}/{id}", delete(vendor::remove_item))
        .route(
            "/items/{category}/{id}/availability",
            put(vendor::set_availability),
        )
}

/// Create the main routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(shop_routes())
        .nest("/vendor", vendor_routes())
}
