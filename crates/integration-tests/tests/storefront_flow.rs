//! End-to-end tests for the storefront: browse, cart and checkout over HTTP.
//!
//! Every test starts its own server on an ephemeral port, so they can run
//! in parallel without sharing sessions.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use reqwest::StatusCode;
use serde_json::Value;
use sixam_integration_tests::{TestContext, price_field, usd};

async fn context() -> TestContext {
    TestContext::start().await.expect("Failed to start storefront")
}

async fn snapshot(ctx: &TestContext) -> Value {
    ctx.snapshot().await.expect("Failed to read session snapshot")
}

fn cart_quantities(snapshot: &Value) -> Vec<(String, u64)> {
    snapshot["state"]["cart"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["product"]["id"].as_str().unwrap().to_string(),
                item["quantity"].as_u64().unwrap(),
            )
        })
        .collect()
}

// ============================================================================
// Page & Infrastructure
// ============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = context().await;
    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_home_lists_every_vendor() {
    let ctx = context().await;
    let resp = ctx.client.get(ctx.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    for name in [
        "Fresh Market",
        "Organic Corner",
        "Pharma Plus",
        "Bakery Delight",
        "Meat Masters",
        "Seafood Express",
    ] {
        assert!(body.contains(name), "missing vendor {name}");
    }
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let ctx = context().await;
    let resp = ctx
        .client
        .get(ctx.url("/"))
        .header("x-request-id", "trace-abc")
        .send()
        .await
        .unwrap();

    let headers = resp.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert_eq!(headers["x-request-id"], "trace-abc");
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let ctx = context().await;
    let resp = ctx
        .client
        .get(ctx.url("/static/css/main.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Browsing
// ============================================================================

#[tokio::test]
async fn test_search_and_category_filter() {
    let ctx = context().await;

    ctx.post_form("/search", &[("q", "ORGANIC")]).await.unwrap();
    let snap = snapshot(&ctx).await;
    assert_eq!(snap["filtered_vendor_ids"], serde_json::json!(["2"]));

    ctx.post_form("/search", &[("q", "")]).await.unwrap();
    ctx.post_form("/category", &[("category", "Bakery")])
        .await
        .unwrap();
    let snap = snapshot(&ctx).await;
    assert_eq!(snap["filtered_vendor_ids"], serde_json::json!(["4"]));

    ctx.post_form("/category", &[("category", "All")])
        .await
        .unwrap();
    let snap = snapshot(&ctx).await;
    assert_eq!(snap["filtered_vendor_ids"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let ctx = context().await;
    let resp = ctx
        .post_form("/category", &[("category", "Hardware")])
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_vendor_is_not_found() {
    let ctx = context().await;
    let resp = ctx.post_form("/vendors/99/select", &[]).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_select_vendor_shows_products() {
    let ctx = context().await;
    let resp = ctx.post_form("/vendors/1/select", &[]).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Organic Apples"));
    assert!(body.contains("Salmon Fillet"));

    let snap = snapshot(&ctx).await;
    assert_eq!(snap["state"]["selected_vendor"]["name"], "Fresh Market");
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_cart_totals() {
    let ctx = context().await;
    ctx.post_form("/vendors/1/select", &[]).await.unwrap();
    ctx.post_form("/cart/add", &[("product_id", "p1")])
        .await
        .unwrap();
    ctx.post_form("/cart/add", &[("product_id", "p2")])
        .await
        .unwrap();
    ctx.post_form("/cart/add", &[("product_id", "p1")])
        .await
        .unwrap();

    let snap = snapshot(&ctx).await;
    assert_eq!(
        cart_quantities(&snap),
        vec![("p1".to_string(), 2), ("p2".to_string(), 1)]
    );
    assert_eq!(snap["cart_item_count"], 3);
    assert_eq!(price_field(&snap, "cart_subtotal"), usd("10.47"));
    assert_eq!(price_field(&snap, "delivery_fee"), usd("2.99"));
    assert_eq!(price_field(&snap, "order_total"), usd("13.46"));

    let resp = ctx.client.get(ctx.url("/cart/count")).send().await.unwrap();
    assert!(resp.text().await.unwrap().contains('3'));
}

#[tokio::test]
async fn test_quantity_below_one_is_ignored() {
    let ctx = context().await;
    ctx.post_form("/cart/add", &[("product_id", "p3")])
        .await
        .unwrap();
    ctx.post_form("/cart/update", &[("product_id", "p3"), ("quantity", "4")])
        .await
        .unwrap();
    ctx.post_form("/cart/update", &[("product_id", "p3"), ("quantity", "0")])
        .await
        .unwrap();

    let snap = snapshot(&ctx).await;
    assert_eq!(cart_quantities(&snap), vec![("p3".to_string(), 4)]);

    ctx.post_form("/cart/remove", &[("product_id", "p3")])
        .await
        .unwrap();
    let snap = snapshot(&ctx).await;
    assert!(cart_quantities(&snap).is_empty());
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let ctx = context().await;
    let resp = ctx
        .post_form("/cart/add", &[("product_id", "p99")])
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_switching_vendor_empties_cart() {
    let ctx = context().await;
    ctx.post_form("/vendors/1/select", &[]).await.unwrap();
    ctx.post_form("/cart/add", &[("product_id", "p1")])
        .await
        .unwrap();
    ctx.post_form("/vendors/deselect", &[]).await.unwrap();
    ctx.post_form("/vendors/2/select", &[]).await.unwrap();

    let snap = snapshot(&ctx).await;
    assert!(cart_quantities(&snap).is_empty());
    assert_eq!(price_field(&snap, "delivery_fee"), usd("3.49"));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let ctx = context().await;
    ctx.post_form("/cart/add", &[("product_id", "p1")])
        .await
        .unwrap();

    let other = reqwest::Client::builder().cookie_store(true).build().unwrap();
    let snap: Value = other
        .get(ctx.url("/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snap["cart_item_count"], 0);
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_checkout_to_confirmation() {
    let ctx = context().await;
    ctx.post_form("/vendors/3/select", &[]).await.unwrap();
    ctx.post_form("/cart/add", &[("product_id", "p4")])
        .await
        .unwrap();
    ctx.post_form("/cart/open", &[]).await.unwrap();

    let resp = ctx.post_form("/checkout/advance", &[]).await.unwrap();
    assert!(resp.text().await.unwrap().contains("Delivery Information"));
    assert_eq!(snapshot(&ctx).await["state"]["checkout_step"], "address");

    let resp = ctx
        .post_form(
            "/checkout/address",
            &[
                ("street", "12 Market St"),
                ("city", "Springfield"),
                ("zip", "12345"),
                ("delivery_window", "later"),
                ("advance", "1"),
            ],
        )
        .await
        .unwrap();
    let body = resp.text().await.unwrap();
    assert!(body.contains("Order Confirmation"));
    assert!(body.contains("12 Market St"));

    let snap = snapshot(&ctx).await;
    assert_eq!(snap["state"]["checkout_step"], "confirmation");
    assert_eq!(snap["state"]["delivery_window"], "later");
    assert_eq!(price_field(&snap, "order_total"), usd("5.48"));

    // Confirmation is terminal.
    ctx.post_form("/checkout/advance", &[]).await.unwrap();
    assert_eq!(
        snapshot(&ctx).await["state"]["checkout_step"],
        "confirmation"
    );
}

#[tokio::test]
async fn test_empty_cart_cannot_checkout() {
    let ctx = context().await;
    ctx.post_form("/cart/open", &[]).await.unwrap();
    ctx.post_form("/checkout/advance", &[]).await.unwrap();

    let snap = snapshot(&ctx).await;
    assert_eq!(snap["state"]["cart_open"], true);
    assert_eq!(snap["state"]["checkout_step"], "cart");
}

#[tokio::test]
async fn test_closing_cart_resets_checkout() {
    let ctx = context().await;
    ctx.post_form("/cart/add", &[("product_id", "p1")])
        .await
        .unwrap();
    ctx.post_form("/cart/open", &[]).await.unwrap();
    ctx.post_form("/checkout/advance", &[]).await.unwrap();
    ctx.post_form("/cart/close", &[]).await.unwrap();

    let snap = snapshot(&ctx).await;
    assert_eq!(snap["state"]["cart_open"], false);
    assert_eq!(snap["state"]["checkout_step"], "cart");
    assert_eq!(snap["cart_item_count"], 1);
}
