//! Integration tests for the Curio marketplace.
//!
//! The marketplace state is volatile and in-memory, so every test builds
//! the complete application router in-process (admin account bootstrapped,
//! empty catalog) and drives it with `tower::ServiceExt::oneshot` - no
//! sockets, no external services.
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, sessions, profile updates
//! - `catalog` - Browse/search/sort plus listing CRUD and ownership
//! - `cart_checkout` - Cart semantics, checkout, purchase ledger
//! - `admin_view` - Admin snapshot gating and shape
//! - `marketplace_scenario` - End-to-end buyer/seller walkthrough

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use curio_core::Email;
use curio_server::config::ServerConfig;
use curio_server::routes;
use curio_server::seed;
use curio_server::state::AppState;
use curio_server::store::Store;

/// Email of the bootstrapped administrator account.
pub const ADMIN_EMAIL: &str = "admin@curio.test";

/// Password of the bootstrapped administrator account.
pub const ADMIN_PASSWORD: &str = "integration-admin-secret";

/// Default password for users registered through the helpers.
pub const PASSWORD: &str = "hunter22";

/// An authenticated session returned by the register/login helpers.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: Value,
}

/// In-process application under test.
pub struct TestContext {
    app: Router,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build a fresh application: empty store, administrator bootstrapped,
    /// no demo data.
    #[must_use]
    pub fn new() -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("valid host"),
            port: 0,
            admin_email: Email::parse(ADMIN_EMAIL).expect("valid admin email"),
            admin_password: SecretString::from(ADMIN_PASSWORD),
            seed_demo: false,
        };

        let store = Store::new();
        seed::bootstrap_admin(&store, &config).expect("bootstrap admin");

        let app = routes::app(AppState::new(config, store));
        Self { app }
    }

    /// Send one request and return the status plus parsed JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).expect("serialize body")))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// GET a path, optionally authenticated.
    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send("GET", uri, token, None).await
    }

    /// POST a JSON body, optionally authenticated.
    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send("POST", uri, token, Some(body)).await
    }

    /// Register a user with the default password and return its session.
    pub async fn register(&self, name: &str, email: &str) -> Session {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({"name": name, "email": email, "password": PASSWORD}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");

        Session {
            token: body["token"].as_str().expect("token").to_owned(),
            user: body["user"].clone(),
        }
    }

    /// Login an existing user and return the fresh session.
    pub async fn login(&self, email: &str, password: &str) -> Session {
        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                serde_json::json!({"email": email, "password": password}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        Session {
            token: body["token"].as_str().expect("token").to_owned(),
            user: body["user"].clone(),
        }
    }

    /// Login the bootstrapped administrator.
    pub async fn login_admin(&self) -> Session {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Create a listing and return its JSON representation.
    pub async fn create_listing(
        &self,
        token: &str,
        title: &str,
        category: &str,
        price: i64,
    ) -> Value {
        let (status, body) = self
            .post(
                "/api/listings",
                Some(token),
                serde_json::json!({
                    "title": title,
                    "description": format!("{title} in great condition."),
                    "category": category,
                    "price": price,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create listing failed: {body}");
        body
    }
}
