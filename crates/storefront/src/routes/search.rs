//! Search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use foodhub_core::SearchResults;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search shops and items across all shops.
///
/// GET /search?q=...
///
/// A blank query returns empty results.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>> {
    let results = state.registry().search(&query.q)?;
    Ok(Json(results))
}
