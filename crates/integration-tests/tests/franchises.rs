//! End-to-end tests for the franchise surface.

use reqwest::StatusCode;
use serde_json::{Value, json};

use pizza_stub_integration_tests::TestContext;

async fn list_franchises(ctx: &TestContext, query: &str) -> Value {
    ctx.client
        .get(ctx.url(&format!("/api/franchise{query}")))
        .send()
        .await
        .expect("list request failed")
        .json()
        .await
        .expect("list response was not JSON")
}

fn franchise_names(body: &Value) -> Vec<&str> {
    body["franchises"]
        .as_array()
        .map(|franchises| {
            franchises
                .iter()
                .filter_map(|f| f["name"].as_str())
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_standard_fixtures_are_listed() {
    let ctx = TestContext::new().await;
    let body = list_franchises(&ctx, "").await;

    assert_eq!(body["total"], 8);
    assert_eq!(body["more"], false);
    let names = franchise_names(&body);
    assert!(names.contains(&"LotaPizza"));
    assert!(names.contains(&"PizzaCorp"));
    assert!(names.contains(&"topSpot"));
}

#[tokio::test]
async fn test_pagination_with_small_limit() {
    let ctx = TestContext::new().await;

    let first = list_franchises(&ctx, "?page=0&limit=3").await;
    assert_eq!(first["franchises"].as_array().map(Vec::len), Some(3));
    assert_eq!(first["more"], true);
    assert_eq!(first["totalPages"], 3);

    let last = list_franchises(&ctx, "?page=2&limit=3").await;
    assert_eq!(last["franchises"].as_array().map(Vec::len), Some(2));
    assert_eq!(last["more"], false);
}

#[tokio::test]
async fn test_name_filter() {
    let ctx = TestContext::new().await;
    let body = list_franchises(&ctx, "?name=*cheesy*").await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["franchises"][0]["name"], "CheesyBites");
    assert_eq!(body["franchises"][0]["stores"][0]["name"], "NYC");
    assert_eq!(body["franchises"][0]["stores"][0]["totalRevenue"], 1000.0);
}

// ============================================================================
// Create & delete
// ============================================================================

#[tokio::test]
async fn test_create_franchise_with_admin() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/franchise"))
        .json(&json!({"name": "Santaquin", "admins": [{"email": "f@jwt.com"}]}))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("body was not JSON");
    assert_eq!(body["name"], "Santaquin");
    assert_eq!(body["stores"], json!([]));
    assert_eq!(body["admins"][0]["name"], "Oscar George");

    let listing = list_franchises(&ctx, "?limit=100").await;
    assert!(franchise_names(&listing).contains(&"Santaquin"));
}

#[tokio::test]
async fn test_create_franchise_unknown_admin_is_not_found() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/franchise"))
        .json(&json!({"name": "Ghost Town", "admins": [{"email": "ghost@jwt.com"}]}))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_franchise() {
    let ctx = TestContext::new().await;

    // topSpot is franchise 3 in the standard fixtures.
    let resp = ctx
        .client
        .delete(ctx.url("/api/franchise/3"))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("body was not JSON");
    assert_eq!(body["message"], "franchise deleted");

    let listing = list_franchises(&ctx, "?limit=100").await;
    assert!(!franchise_names(&listing).contains(&"topSpot"));

    // Deleting again is a 404.
    let resp = ctx
        .client
        .delete(ctx.url("/api/franchise/3"))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Franchises by user
// ============================================================================

#[tokio::test]
async fn test_franchises_for_franchisee() {
    let ctx = TestContext::new().await;

    // Oscar George (user 4) administers PizzaCorp and pizzaPocket.
    let body: Value = ctx
        .client
        .get(ctx.url("/api/franchise/4"))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("response was not JSON");

    let names: Vec<&str> = body
        .as_array()
        .map(|fs| fs.iter().filter_map(|f| f["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["PizzaCorp", "pizzaPocket"]);
}

#[tokio::test]
async fn test_franchises_for_unknown_user_is_empty() {
    let ctx = TestContext::new().await;

    let body: Value = ctx
        .client
        .get(ctx.url("/api/franchise/999"))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("response was not JSON");
    assert_eq!(body, json!([]));
}

// ============================================================================
// Stores
// ============================================================================

#[tokio::test]
async fn test_create_and_delete_store() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/franchise/2/store"))
        .json(&json!({"name": "Santaquin"}))
        .send()
        .await
        .expect("create store request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let store: Value = resp.json().await.expect("body was not JSON");
    assert_eq!(store["name"], "Santaquin");
    let store_id = store["id"].as_i64().expect("store id missing");

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/franchise/2/store/{store_id}")))
        .send()
        .await
        .expect("delete store request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("body was not JSON");
    assert_eq!(body["message"], "store deleted");

    // The store is gone.
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/franchise/2/store/{store_id}")))
        .send()
        .await
        .expect("delete store request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_store_under_unknown_franchise() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/franchise/999/store"))
        .json(&json!({"name": "Nowhere"}))
        .send()
        .await
        .expect("create store request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
