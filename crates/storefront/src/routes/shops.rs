//! Shop browsing route handlers (customer side).

use axum::{
    Json,
    extract::{Path, State},
};
use foodhub_core::{MenuSection, Shop, ShopId, ShopSummary};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Shop listing response.
#[derive(Debug, Serialize)]
pub struct ShopsResponse {
    pub shops: Vec<ShopSummary>,
}

/// A shop with its full menu.
#[derive(Debug, Serialize)]
pub struct ShopDetail {
    #[serde(flatten)]
    pub shop: ShopSummary,
    /// Categories in pre-order, top level at depth 0.
    pub categories: Vec<MenuSection>,
}

impl ShopDetail {
    /// Snapshot a shop for rendering.
    #[must_use]
    pub fn from_shop(shop: &Shop) -> Self {
        Self {
            shop: shop.summary(),
            categories: shop.menu_sections(),
        }
    }
}

/// Recent activity of a shop.
#[derive(Debug, Serialize)]
pub struct UpdatesResponse {
    pub shop_id: ShopId,
    /// Messages, newest first.
    pub updates: Vec<String>,
}

impl UpdatesResponse {
    #[must_use]
    pub fn from_shop(shop: &Shop) -> Self {
        Self {
            shop_id: shop.id().clone(),
            updates: shop.log().recent_first().map(String::from).collect(),
        }
    }
}

/// List all shops in registry order.
///
/// GET /shops
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<ShopsResponse>> {
    let shops = state.registry().summaries()?;
    Ok(Json(ShopsResponse { shops }))
}

/// Show one shop and its menu.
///
/// GET /shops/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(shop_id): Path<String>,
) -> Result<Json<ShopDetail>> {
    let shop = state.shop(&shop_id)?.read()?;
    Ok(Json(ShopDetail::from_shop(&shop)))
}

/// Recent updates of one shop.
///
/// GET /shops/{id}/updates
#[instrument(skip(state))]
pub async fn updates(
    State(state): State<AppState>,
    Path(shop_id): Path<String>,
) -> Result<Json<UpdatesResponse>> {
    let shop = state.shop(&shop_id)?.read()?;
    Ok(Json(UpdatesResponse::from_shop(&shop)))
}
