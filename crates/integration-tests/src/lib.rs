//! Integration tests for FoodHub.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server or port is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodhub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_browse` - Customer browsing and search
//! - `vendor_flow` - Vendor login and menu management
//! - `catalog_scenario` - Catalog behaviour without HTTP

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use foodhub_core::{Registry, SeedCatalog};
use foodhub_storefront::{config::StorefrontConfig, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

/// An in-process storefront with a cookie jar holding one session cookie.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Storefront over the built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::from_seed(&SeedCatalog::demo(), &StorefrontConfig::default())
    }

    /// Storefront over a custom seed.
    #[must_use]
    pub fn from_seed(seed: &SeedCatalog, config: &StorefrontConfig) -> Self {
        let registry = Registry::from_seed(seed, &config.registry_options()).unwrap();
        let state = AppState::new(config.clone(), registry);
        Self {
            router: foodhub_storefront::app(state),
            cookie: None,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty).
    pub async fn request(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap_or_default()
                .to_string();
            self.cookie = Some(pair);
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&mut self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Log in as a vendor, keeping the session cookie for later requests.
    pub async fn login(&mut self, shop_id: &str, password: &str) -> StatusCode {
        let (status, _) = self
            .post(
                "/vendor/login",
                serde_json::json!({ "shop_id": shop_id, "password": password }),
            )
            .await;
        status
    }
}

/// Names of the categories in a shop or dashboard response, in order.
#[must_use]
pub fn category_names(response: &Value) -> Vec<String> {
    response["categories"]
        .as_array()
        .map(|categories| {
            categories
                .iter()
                .filter_map(|c| c["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Item ids of the named category in a shop or dashboard response.
#[must_use]
pub fn item_ids(response: &Value, category: &str) -> Vec<String> {
    response["categories"]
        .as_array()
        .and_then(|categories| categories.iter().find(|c| c["name"] == category))
        .and_then(|c| c["items"].as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
