//! Integration tests for customer browsing and search.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use foodhub_integration_tests::{TestApp, category_names, item_ids};
use serde_json::Value;

// =============================================================================
// Shops
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::demo();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));
}

#[tokio::test]
async fn test_list_shops_in_registry_order() {
    let mut app = TestApp::demo();
    let (status, body) = app.get("/shops").await;

    assert_eq!(status, StatusCode::OK);
    let shops = body["shops"].as_array().unwrap();
    assert_eq!(shops.len(), 2);
    assert_eq!(shops[0]["id"], "s1");
    assert_eq!(shops[0]["name"], "Tito Jims Grill");
    assert_eq!(shops[0]["status"], "Open");
    assert_eq!(shops[1]["id"], "s2");
    assert_eq!(shops[1]["status"], "Closed");
}

#[tokio::test]
async fn test_show_shop_menu_in_preorder() {
    let mut app = TestApp::demo();
    let (status, body) = app.get("/shops/s1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "s1");
    assert_eq!(category_names(&body), vec!["Drinks", "Meals"]);
    assert_eq!(item_ids(&body, "Meals"), vec!["m1", "m2"]);

    let drinks = &body["categories"][0];
    assert_eq!(drinks["depth"], 0);
    assert_eq!(drinks["items"][0]["name"], "Iced Tea");
    assert_eq!(drinks["items"][0]["price"], "25.00");
    assert_eq!(drinks["items"][0]["available"], true);
}

#[tokio::test]
async fn test_unknown_shop_is_not_found() {
    let mut app = TestApp::demo();
    let (status, body) = app.get("/shops/s9").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shop s9 not found");
}

#[tokio::test]
async fn test_updates_newest_first() {
    let mut app = TestApp::demo();
    let (status, body) = app.get("/shops/s1/updates").await;

    assert_eq!(status, StatusCode::OK);
    let updates: Vec<&str> = body["updates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u.as_str().unwrap())
        .collect();
    assert_eq!(
        updates,
        vec![
            "Added item 'Iced Tea' to Drinks",
            "Category 'Drinks' added",
            "Added item 'Pork Sisig' to Meals",
            "Added item 'Chicken BBQ' to Meals",
            "Category 'Meals' added",
        ]
    );
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_finds_item_in_category() {
    let mut app = TestApp::demo();
    let (status, body) = app.get("/search?q=iced").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shops"].as_array().unwrap().len(), 0);
    let groups = body["items"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["shop_id"], "s1");
    assert_eq!(groups[0]["matches"][0]["category"], "Drinks");
    assert_eq!(groups[0]["matches"][0]["item"]["id"], "d1");
}

#[tokio::test]
async fn test_search_matches_shop_name_case_insensitively() {
    let mut app = TestApp::demo();
    let (_, body) = app.get("/search?q=SWEET").await;

    let shops = body["shops"].as_array().unwrap();
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0]["id"], "s2");
}

#[tokio::test]
async fn test_search_scans_items_of_matching_shops() {
    let mut app = TestApp::demo();
    // "s" matches both shop ids and several item names.
    let (_, body) = app.get("/search?q=s").await;

    assert_eq!(body["shops"].as_array().unwrap().len(), 2);
    assert!(!body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_search_is_empty() {
    let mut app = TestApp::demo();

    for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body["shops"].as_array().unwrap().is_empty(), "{uri}");
        assert!(body["items"].as_array().unwrap().is_empty(), "{uri}");
    }
}
