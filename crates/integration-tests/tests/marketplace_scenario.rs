//! End-to-end buyer/seller walkthrough.
//!
//! Alice lists a lamp; Bob carts and buys it; Alice then deletes the
//! listing; Bob's purchase history is unaffected.

use axum::http::StatusCode;
use serde_json::json;

use curio_integration_tests::TestContext;

#[tokio::test]
async fn alice_sells_a_lamp_to_bob() {
    let ctx = TestContext::new();

    // Alice registers and lists a lamp
    let alice = ctx.register("Alice", "alice@example.com").await;
    let lamp = ctx
        .create_listing(&alice.token, "Lamp", "Home", 500)
        .await;
    assert_eq!(lamp["sellerId"], alice.user["id"]);

    // Bob registers, finds the lamp, and carts it
    let bob = ctx.register("Bob", "bob@example.com").await;
    let (_, browse) = ctx.get("/api/listings?search=lamp", None).await;
    let found = &browse["listings"].as_array().expect("listings")[0];
    assert_eq!(found["id"], lamp["id"]);

    let (status, cart) = ctx
        .post(
            "/api/cart/add",
            Some(&bob.token),
            json!({"listingId": lamp["id"]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"].as_array().expect("items").len(), 1);

    // Bob checks out
    let (status, checkout) = ctx.post("/api/checkout", Some(&bob.token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let purchases = checkout["purchases"].as_array().expect("purchases");
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0]["listing"]["title"], "Lamp");
    assert_eq!(purchases[0]["listing"]["price"], 500);

    // Bob's history shows the lamp
    let (_, history) = ctx.get("/api/purchases", Some(&bob.token)).await;
    assert_eq!(history.as_array().expect("array").len(), 1);
    assert_eq!(history.as_array().expect("array")[0]["listing"]["title"], "Lamp");

    // Alice deletes the listing after the sale
    let lamp_id = lamp["id"].as_str().expect("id");
    let (status, _) = ctx
        .send(
            "DELETE",
            &format!("/api/listings/{lamp_id}"),
            Some(&alice.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = ctx.get(&format!("/api/listings/{lamp_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Bob's history still shows the lamp, unchanged
    let (_, history) = ctx.get("/api/purchases", Some(&bob.token)).await;
    let record = &history.as_array().expect("array")[0];
    assert_eq!(record["listing"]["title"], "Lamp");
    assert_eq!(record["listing"]["price"], 500);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let ctx = TestContext::new();
    let (status, _) = ctx.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
