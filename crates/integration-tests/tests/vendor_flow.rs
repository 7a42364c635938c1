//! Integration tests for vendor login and menu management.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use foodhub_core::{DuplicatePolicy, SeedCatalog};
use foodhub_integration_tests::{TestApp, category_names, item_ids};
use foodhub_storefront::config::StorefrontConfig;
use serde_json::json;

async fn logged_in_demo() -> TestApp {
    let mut app = TestApp::demo();
    assert_eq!(app.login("s1", "hesoyam").await, StatusCode::OK);
    app
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_returns_vendor() {
    let mut app = TestApp::demo();
    let (status, body) = app
        .post("/vendor/login", json!({ "shop_id": "s1", "password": "hesoyam" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop_id"], "s1");
    assert_eq!(body["shop_name"], "Tito Jims Grill");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let mut app = TestApp::demo();

    assert_eq!(app.login("s1", "HESOYAM").await, StatusCode::UNAUTHORIZED);
    assert_eq!(app.login("s1", "stinglikeabee").await, StatusCode::UNAUTHORIZED);
    assert_eq!(app.login("s9", "hesoyam").await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_vendor_routes_require_login() {
    let mut app = TestApp::demo();

    let (status, body) = app.get("/vendor/shop").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Vendor login required");

    let (status, _) = app.put("/vendor/status", json!({ "status": "Open" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.delete("/vendor/items/Meals/m1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let mut app = logged_in_demo().await;

    let (status, _) = app.get("/vendor/shop").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.post("/vendor/logout", json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/vendor/shop").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_shows_own_shop() {
    let mut app = TestApp::demo();
    assert_eq!(app.login("s2", "stinglikeabee").await, StatusCode::OK);

    let (status, body) = app.get("/vendor/shop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shop"]["id"], "s2");
    assert_eq!(category_names(&body), vec!["Desserts"]);
    assert_eq!(body["updates"][0], "Added item 'Chocolate Cake' to Desserts");
}

// =============================================================================
// Status
// =============================================================================

#[tokio::test]
async fn test_set_status() {
    let mut app = logged_in_demo().await;

    let (status, body) = app
        .put("/vendor/status", json!({ "status": "preparing" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], true);
    assert_eq!(body["shop"]["status"], "Preparing");

    // Customers see the new status.
    let (_, shop) = app.get("/shops/s1").await;
    assert_eq!(shop["status"], "Preparing");

    let (_, updates) = app.get("/shops/s1/updates").await;
    assert_eq!(updates["updates"][0], "Shop status changed to Preparing");
}

#[tokio::test]
async fn test_set_same_status_is_not_logged() {
    let mut app = logged_in_demo().await;

    let (status, body) = app.put("/vendor/status", json!({ "status": "Open" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], false);

    let (_, updates) = app.get("/shops/s1/updates").await;
    assert_eq!(updates["updates"][0], "Added item 'Iced Tea' to Drinks");
}

#[tokio::test]
async fn test_set_invalid_status() {
    let mut app = logged_in_demo().await;

    let (status, body) = app.put("/vendor/status", json!({ "status": "busy" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid shop status: busy");
}

// =============================================================================
// Categories and items
// =============================================================================

#[tokio::test]
async fn test_add_category() {
    let mut app = logged_in_demo().await;

    let (status, body) = app
        .post("/vendor/categories", json!({ "name": "  Desserts " }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category_names(&body), vec!["Desserts", "Drinks", "Meals"]);

    let (status, _) = app
        .post("/vendor/categories", json!({ "name": "Desserts" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.post("/vendor/categories", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_item_visible_to_customers() {
    let mut app = logged_in_demo().await;

    let (status, body) = app
        .post(
            "/vendor/items",
            json!({ "category": "Meals", "id": "m3", "name": "Liempo", "price": "150.00" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "m3");
    assert_eq!(body["available"], true);

    let (_, shop) = app.get("/shops/s1").await;
    assert_eq!(item_ids(&shop, "Meals"), vec!["m1", "m2", "m3"]);

    let (_, results) = app.get("/search?q=liempo").await;
    assert_eq!(results["items"][0]["matches"][0]["item"]["id"], "m3");
}

#[tokio::test]
async fn test_add_item_rejections() {
    let mut app = logged_in_demo().await;

    // Duplicate id anywhere in the shop.
    let (status, body) = app
        .post(
            "/vendor/items",
            json!({ "category": "Meals", "id": "d1", "name": "Another Tea", "price": "20" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Item ID already exists");

    // Missing category.
    let (status, _) = app
        .post(
            "/vendor/items",
            json!({ "category": "Snacks", "id": "k1", "name": "Fishball", "price": "10" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Negative price.
    let (status, _) = app
        .post(
            "/vendor/items",
            json!({ "category": "Meals", "id": "m4", "name": "Refund", "price": "-5" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Blank name.
    let (status, _) = app
        .post(
            "/vendor/items",
            json!({ "category": "Meals", "id": "m4", "name": " ", "price": "5" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, shop) = app.get("/shops/s1").await;
    assert_eq!(item_ids(&shop, "Meals"), vec!["m1", "m2"]);
}

#[tokio::test]
async fn test_same_item_id_allowed_in_other_shop() {
    let mut app = TestApp::demo();
    assert_eq!(app.login("s2", "stinglikeabee").await, StatusCode::OK);

    let (status, _) = app
        .post(
            "/vendor/items",
            json!({ "category": "Desserts", "id": "m1", "name": "Leche Flan", "price": "45" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_remove_item() {
    let mut app = logged_in_demo().await;

    let (status, _) = app.delete("/vendor/items/Meals/m2").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, shop) = app.get("/shops/s1").await;
    assert_eq!(item_ids(&shop, "Meals"), vec!["m1"]);

    let (status, _) = app.delete("/vendor/items/Meals/m2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The item exists, but not in this category.
    let (status, _) = app.delete("/vendor/items/Meals/d1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, updates) = app.get("/shops/s1/updates").await;
    assert_eq!(updates["updates"][0], "Removed item m2 from Meals");
}

#[tokio::test]
async fn test_toggle_availability() {
    let mut app = logged_in_demo().await;

    let (status, body) = app
        .put(
            "/vendor/items/Drinks/d1/availability",
            json!({ "available": false }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);

    let (_, updates) = app.get("/shops/s1/updates").await;
    assert_eq!(updates["updates"][0], "Item 'Iced Tea' marked Sold Out");

    // Sold-out items are still found by search.
    let (_, results) = app.get("/search?q=iced").await;
    assert_eq!(results["items"][0]["matches"][0]["item"]["available"], false);

    let (status, _) = app
        .put(
            "/vendor/items/Drinks/zz/availability",
            json!({ "available": true }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_activity_log_keeps_five_newest() {
    let mut app = logged_in_demo().await;

    for name in ["A", "B", "C", "D", "E", "F"] {
        let (status, _) = app.post("/vendor/categories", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = app.get("/shops/s1/updates").await;
    let updates = body["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 5);
    assert_eq!(updates[0], "Category 'F' added");
    assert_eq!(updates[4], "Category 'B' added");
}

#[tokio::test]
async fn test_custom_log_capacity() {
    let config = StorefrontConfig {
        activity_capacity: 2,
        duplicate_policy: DuplicatePolicy::Reject,
        ..StorefrontConfig::default()
    };
    let mut app = TestApp::from_seed(&SeedCatalog::demo(), &config);

    let (_, body) = app.get("/shops/s1/updates").await;
    assert_eq!(
        body["updates"],
        json!(["Added item 'Iced Tea' to Drinks", "Category 'Drinks' added"])
    );
}
