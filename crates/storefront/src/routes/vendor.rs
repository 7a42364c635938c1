//! Vendor dashboard route handlers.
//!
//! Every handler here requires a logged-in vendor and acts on that vendor's
//! shop only. Checks that must agree with the mutation they guard (category
//! exists, item id is free) run under the same write guard.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use foodhub_core::{ItemRecord, MenuSection, Price, ShopStatus, ShopSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireVendor;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

/// Everything a vendor sees on their dashboard.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub shop: ShopSummary,
    pub categories: Vec<MenuSection>,
    /// Activity messages, newest first.
    pub updates: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// `false` when the shop already had the requested status.
    pub changed: bool,
    pub shop: ShopSummary,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// The shop's menu after a category was added.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<MenuSection>,
}

#[derive(Debug, Deserialize)]
pub struct NewItemRequest {
    pub category: String,
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub available: bool,
}

/// Trim a form field, rejecting it if nothing is left.
fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

// =============================================================================
// Handlers
// =============================================================================

/// The logged-in vendor's shop.
///
/// GET /vendor/shop
#[instrument(skip(state, vendor), fields(shop_id = %vendor.shop_id))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireVendor(vendor): RequireVendor,
) -> Result<Json<Dashboard>> {
    let shop = state.shop(vendor.shop_id.as_str())?.read()?;
    Ok(Json(Dashboard {
        shop: shop.summary(),
        categories: shop.menu_sections(),
        updates: shop.log().recent_first().map(String::from).collect(),
    }))
}

/// Change the shop status.
///
/// PUT /vendor/status
#[instrument(skip(state, vendor), fields(shop_id = %vendor.shop_id))]
pub async fn set_status(
    State(state): State<AppState>,
    RequireVendor(vendor): RequireVendor,
    Json(request): Json<StatusRequest>,
) -> Result<Json<StatusResponse>> {
    let status: ShopStatus = request
        .status
        .parse()
        .map_err(|e: foodhub_core::StatusParseError| AppError::BadRequest(e.to_string()))?;

    let mut shop = state.shop(vendor.shop_id.as_str())?.write()?;
    let changed = shop.set_status(status);
    if changed {
        add_breadcrumb(
            "vendor",
            "Shop status changed",
            &[("shop_id", vendor.shop_id.as_str()), ("status", status.as_str())],
        );
    }

    Ok(Json(StatusResponse {
        changed,
        shop: shop.summary(),
    }))
}

/// Add a top-level category.
///
/// POST /vendor/categories
#[instrument(skip(state, vendor), fields(shop_id = %vendor.shop_id))]
pub async fn add_category(
    State(state): State<AppState>,
    RequireVendor(vendor): RequireVendor,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoriesResponse>)> {
    let name = required("Category name", &request.name)?;

    let mut shop = state.shop(vendor.shop_id.as_str())?.write()?;
    if shop.has_category(&name) {
        return Err(AppError::Conflict(format!("Category '{name}' already exists")));
    }
    shop.add_category(&name);
    add_breadcrumb(
        "vendor",
        "Category added",
        &[("shop_id", vendor.shop_id.as_str()), ("category", name.as_str())],
    );

    Ok((
        StatusCode::CREATED,
        Json(CategoriesResponse {
            categories: shop.menu_sections(),
        }),
    ))
}

/// Add an item to an existing category.
///
/// POST /vendor/items
#[instrument(skip(state, vendor), fields(shop_id = %vendor.shop_id))]
pub async fn add_item(
    State(state): State<AppState>,
    RequireVendor(vendor): RequireVendor,
    Json(request): Json<NewItemRequest>,
) -> Result<(StatusCode, Json<ItemRecord>)> {
    let category = required("Category", &request.category)?;
    let id = required("Item ID", &request.id)?;
    let name = required("Item name", &request.name)?;
    let price = Price::new(request.price).map_err(foodhub_core::CatalogError::from)?;

    let mut shop = state.shop(vendor.shop_id.as_str())?.write()?;
    if !shop.has_category(&category) {
        return Err(AppError::NotFound(format!("Category '{category}' not found")));
    }
    if shop.find_item(&id).is_some() {
        return Err(AppError::Conflict("Item ID already exists".to_string()));
    }
    shop.add_item(&category, id.as_str(), name.as_str(), price)?;
    add_breadcrumb(
        "vendor",
        "Item added",
        &[
            ("shop_id", vendor.shop_id.as_str()),
            ("category", category.as_str()),
            ("item_id", id.as_str()),
        ],
    );

    let item = shop
        .find_item(&id)
        .map(|(_, item)| item.clone())
        .ok_or_else(|| AppError::Internal(format!("item {id} missing after insert")))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove an item from a category.
///
/// DELETE /vendor/items/{category}/{id}
#[instrument(skip(state, vendor), fields(shop_id = %vendor.shop_id))]
pub async fn remove_item(
    State(state): State<AppState>,
    RequireVendor(vendor): RequireVendor,
    Path((category, id)): Path<(String, String)>,
) -> Result<StatusCode> {
    let mut shop = state.shop(vendor.shop_id.as_str())?.write()?;
    if !shop.remove_item(&category, &id) {
        return Err(AppError::NotFound(format!(
            "Item {id} not found in {category}"
        )));
    }
    add_breadcrumb(
        "vendor",
        "Item removed",
        &[
            ("shop_id", vendor.shop_id.as_str()),
            ("category", category.as_str()),
            ("item_id", id.as_str()),
        ],
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Mark an item available or sold out.
///
/// PUT /vendor/items/{category}/{id}/availability
#[instrument(skip(state, vendor), fields(shop_id = %vendor.shop_id))]
pub async fn set_availability(
    State(state): State<AppState>,
    RequireVendor(vendor): RequireVendor,
    Path((category, id)): Path<(String, String)>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<ItemRecord>> {
    let mut shop = state.shop(vendor.shop_id.as_str())?.write()?;
    if !shop.toggle_availability(&category, &id, request.available) {
        return Err(AppError::NotFound(format!(
            "Item {id} not found in {category}"
        )));
    }

    let item = shop
        .menu()
        .get_child(&category)
        .and_then(|node| node.items().find(&id))
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("item {id} missing after update")))?;
    Ok(Json(item))
}
