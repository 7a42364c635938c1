//! Vendor authentication extractors.
//!
//! Provides an extractor for requiring a logged-in vendor in route handlers,
//! plus helpers for writing and clearing the session entry.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentVendor, session_keys};

/// Extractor that requires a logged-in vendor.
///
/// Rejects with `401 Unauthorized` if there is no vendor in the session.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireVendor(vendor): RequireVendor,
/// ) -> impl IntoResponse {
///     format!("Managing {}", vendor.shop_name)
/// }
/// ```
pub struct RequireVendor(pub CurrentVendor);

impl<S> FromRequestParts<S> for RequireVendor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let vendor: CurrentVendor = session
            .get(session_keys::CURRENT_VENDOR)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Vendor login required".to_string()))?;

        Ok(Self(vendor))
    }
}

/// Store the logged-in vendor in the session.
///
/// The session id is cycled to prevent fixation.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_vendor(
    session: &Session,
    vendor: &CurrentVendor,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_VENDOR, vendor).await
}

/// Clear the vendor from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_vendor(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentVendor>(session_keys::CURRENT_VENDOR)
        .await?;
    Ok(())
}
