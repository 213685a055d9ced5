//! Session registry.
//!
//! Maps opaque bearer tokens to authenticated user identities. Tokens have
//! no expiry and the server never invalidates them; logout is client-side
//! token discard. Multiple concurrent tokens per user are allowed.

use curio_core::UserId;

use super::Store;

/// Repository for the bearer-token session registry.
pub struct SessionRepository<'a> {
    store: &'a Store,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a token for a user.
    pub fn insert(&self, token: String, user_id: UserId) {
        self.store.write().sessions.insert(token, user_id);
    }

    /// Resolve a token to the user it authenticates.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        self.store.read().sessions.get(token).copied()
    }
}
