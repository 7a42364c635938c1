//! Request correlation ids.
//!
//! Every storefront response carries an `x-request-id`. An id forwarded by a
//! proxy is reused when it is short printable ASCII. Anything else is replaced
//! with a fresh UUID v4.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest forwarded id that is reused as-is.
pub const MAX_REQUEST_ID_LEN: usize = 128;

fn is_acceptable(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic())
}

/// The id to use for a request: the forwarded header if acceptable,
/// otherwise a new UUID v4.
#[must_use]
pub fn request_id_from(headers: &HeaderMap) -> String {
    match headers.get(REQUEST_ID_HEADER).map(HeaderValue::to_str) {
        Some(Ok(id)) if is_acceptable(id) => id.to_string(),
        Some(_) => {
            tracing::debug!("Replacing malformed forwarded request id");
            Uuid::new_v4().to_string()
        }
        None => Uuid::new_v4().to_string(),
    }
}

/// Tag the request with an id in the trace span, the Sentry scope and the
/// response headers.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_from(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
