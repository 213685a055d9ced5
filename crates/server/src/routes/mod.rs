//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure (nested under /api)
//!
//! ```text
//! # Auth
//! POST /auth/register          - Register, returns {token, user}
//! POST /auth/login             - Login, returns {token, user}
//! GET  /auth/me                - Current user (requires auth)
//! PUT  /users/me               - Update profile (requires auth)
//!
//! # Listings
//! GET    /listings             - Browse (query: search, category)
//! GET    /listings/{id}        - Listing detail
//! POST   /listings             - Create listing (requires auth)
//! PUT    /listings/{id}        - Update listing (seller only)
//! DELETE /listings/{id}        - Delete listing (seller or admin)
//! GET    /me/listings          - Caller's own listings (requires auth)
//!
//! # Cart (requires auth)
//! GET  /cart                   - Cart contents
//! POST /cart/add               - Add listing (idempotent)
//! POST /cart/remove            - Remove listing (no-op if absent)
//! GET  /cart/resolved          - Cart resolved against the catalog
//!
//! # Checkout (requires auth)
//! POST /checkout               - Convert cart into purchase records
//! GET  /purchases              - Purchase history
//!
//! # Admin (admin only)
//! GET  /admin/data             - Aggregate snapshot
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod listings;
pub mod purchases;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}

/// Create the listing routes router.
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listings::index).post(listings::create))
        .route(
            "/{id}",
            get(listings::show)
                .put(listings::update)
                .delete(listings::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/resolved", get(cart::resolved))
}

/// Create all routes for the marketplace API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth routes
        .nest("/auth", auth_routes())
        .route("/users/me", put(auth::update_profile))
        // Listing routes
        .nest("/listings", listing_routes())
        .route("/me/listings", get(listings::mine))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout and purchase history
        .route("/checkout", post(purchases::checkout))
        .route("/purchases", get(purchases::history))
        // Admin snapshot
        .route("/admin/data", get(admin::data))
}

/// Build the complete application: API routes under `/api`, the health
/// endpoint, and the request-tracing and CORS layers.
///
/// Used by the binary and driven in-process by the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
