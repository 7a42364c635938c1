//! Vendor authentication route handlers.
//!
//! Vendors log in with their shop id and password. The shop id is then kept
//! in the session and every `/vendor` route acts on that shop.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_vendor, set_current_vendor};
use crate::models::CurrentVendor;
use crate::state::AppState;

/// Vendor login request.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub shop_id: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("shop_id", &self.shop_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Log in as a shop's vendor.
///
/// POST /vendor/login
#[instrument(skip(state, session))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CurrentVendor>> {
    let vendor = {
        let handle = state
            .registry()
            .authenticate(request.shop_id.trim(), &request.password)?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;
        let shop = handle.read()?;
        CurrentVendor {
            shop_id: shop.id().clone(),
            shop_name: shop.name().to_string(),
        }
    };

    set_current_vendor(&session, &vendor).await?;
    tracing::info!(shop_id = %vendor.shop_id, "vendor logged in");

    Ok(Json(vendor))
}

/// Log out.
///
/// POST /vendor/logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_vendor(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}
