//! Integration tests for cart semantics, checkout, and the purchase ledger.

use axum::http::StatusCode;
use serde_json::json;

use curio_integration_tests::TestContext;

#[tokio::test]
async fn cart_is_created_lazily_and_empty() {
    let ctx = TestContext::new();
    let user = ctx.register("Alice", "alice@example.com").await;

    let (status, body) = ctx.get("/api/cart", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn add_to_cart_is_idempotent() {
    let ctx = TestContext::new();
    let seller = ctx.register("Seller", "seller@example.com").await;
    let buyer = ctx.register("Buyer", "buyer@example.com").await;
    let listing = ctx
        .create_listing(&seller.token, "Lamp", "Home", 500)
        .await;
    let payload = json!({"listingId": listing["id"]});

    let (status, body) = ctx
        .post("/api/cart/add", Some(&buyer.token), payload.clone())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().expect("items").len(), 1);

    // Adding the same listing again is a no-op
    let (status, body) = ctx
        .post("/api/cart/add", Some(&buyer.token), payload)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().expect("items").len(), 1);
}

#[tokio::test]
async fn add_unknown_listing_is_not_found() {
    let ctx = TestContext::new();
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let (status, body) = ctx
        .post(
            "/api/cart/add",
            Some(&buyer.token),
            json!({"listingId": "00000000-0000-4000-8000-000000000000"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Listing not found");
}

#[tokio::test]
async fn remove_from_cart_is_noop_when_absent() {
    let ctx = TestContext::new();
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let (status, body) = ctx
        .post(
            "/api/cart/remove",
            Some(&buyer.token),
            json!({"listingId": "00000000-0000-4000-8000-000000000000"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn resolved_cart_drops_deleted_listings() {
    let ctx = TestContext::new();
    let seller = ctx.register("Seller", "seller@example.com").await;
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let kept = ctx
        .create_listing(&seller.token, "Kept", "Home", 500)
        .await;
    let doomed = ctx
        .create_listing(&seller.token, "Doomed", "Home", 700)
        .await;

    for listing in [&kept, &doomed] {
        let (status, _) = ctx
            .post(
                "/api/cart/add",
                Some(&buyer.token),
                json!({"listingId": listing["id"]}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let doomed_id = doomed["id"].as_str().expect("id");
    let (status, _) = ctx
        .send(
            "DELETE",
            &format!("/api/listings/{doomed_id}"),
            Some(&seller.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // The resolved view silently drops the dangling entry
    let (status, body) = ctx.get("/api/cart/resolved", Some(&buyer.token)).await;
    assert_eq!(status, StatusCode::OK);
    let resolved = body.as_array().expect("array");
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0]["listing"]["title"], "Kept");
}

#[tokio::test]
async fn checkout_skips_dangling_entries_and_clears_cart() {
    let ctx = TestContext::new();
    let seller = ctx.register("Seller", "seller@example.com").await;
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let a = ctx.create_listing(&seller.token, "A", "Home", 500).await;
    let b = ctx.create_listing(&seller.token, "B", "Home", 700).await;

    for listing in [&a, &b] {
        ctx.post(
            "/api/cart/add",
            Some(&buyer.token),
            json!({"listingId": listing["id"]}),
        )
        .await;
    }

    let b_id = b["id"].as_str().expect("id");
    ctx.send(
        "DELETE",
        &format!("/api/listings/{b_id}"),
        Some(&seller.token),
        None,
    )
    .await;

    let (status, body) = ctx.post("/api/checkout", Some(&buyer.token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let purchases = body["purchases"].as_array().expect("purchases");
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0]["listing"]["title"], "A");

    // Cart is cleared atomically
    let (_, cart) = ctx.get("/api/cart", Some(&buyer.token)).await;
    assert_eq!(cart["items"], json!([]));

    // History grows by exactly one entry
    let (_, history) = ctx.get("/api/purchases", Some(&buyer.token)).await;
    assert_eq!(history.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn checkout_preserves_prior_history() {
    let ctx = TestContext::new();
    let seller = ctx.register("Seller", "seller@example.com").await;
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let first = ctx
        .create_listing(&seller.token, "First", "Home", 100)
        .await;
    ctx.post(
        "/api/cart/add",
        Some(&buyer.token),
        json!({"listingId": first["id"]}),
    )
    .await;
    ctx.post("/api/checkout", Some(&buyer.token), json!({})).await;

    let second = ctx
        .create_listing(&seller.token, "Second", "Books", 200)
        .await;
    ctx.post(
        "/api/cart/add",
        Some(&buyer.token),
        json!({"listingId": second["id"]}),
    )
    .await;
    ctx.post("/api/checkout", Some(&buyer.token), json!({})).await;

    let (_, history) = ctx.get("/api/purchases", Some(&buyer.token)).await;
    let history = history.as_array().expect("array");
    assert_eq!(history.len(), 2);
    // Append order is chronological
    assert_eq!(history[0]["listing"]["title"], "First");
    assert_eq!(history[1]["listing"]["title"], "Second");
}

#[tokio::test]
async fn purchase_snapshot_is_isolated_from_listing_edits() {
    let ctx = TestContext::new();
    let seller = ctx.register("Seller", "seller@example.com").await;
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let listing = ctx
        .create_listing(&seller.token, "Lamp", "Home", 500)
        .await;
    let id = listing["id"].as_str().expect("id");

    ctx.post(
        "/api/cart/add",
        Some(&buyer.token),
        json!({"listingId": listing["id"]}),
    )
    .await;
    ctx.post("/api/checkout", Some(&buyer.token), json!({})).await;

    // The seller reprices after the sale
    let (status, _) = ctx
        .send(
            "PUT",
            &format!("/api/listings/{id}"),
            Some(&seller.token),
            Some(json!({"price": 9999})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = ctx.get("/api/purchases", Some(&buyer.token)).await;
    assert_eq!(history.as_array().expect("array")[0]["listing"]["price"], 500);
}

#[tokio::test]
async fn checkout_with_empty_cart_returns_no_purchases() {
    let ctx = TestContext::new();
    let buyer = ctx.register("Buyer", "buyer@example.com").await;

    let (status, body) = ctx.post("/api/checkout", Some(&buyer.token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["purchases"], json!([]));
}
