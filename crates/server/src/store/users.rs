//! User repository.

use chrono::Utc;

use curio_core::{Email, Role, UserId};

use super::{RepositoryError, Store};
use crate::models::User;

/// Repository for user records.
pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if another user already holds the
    /// email, compared case-insensitively.
    pub fn create(
        &self,
        name: &str,
        email: Email,
        password_digest: String,
        role: Role,
    ) -> Result<User, RepositoryError> {
        let mut tables = self.store.write();

        let key = email.normalized();
        if tables.users.iter().any(|u| u.email.normalized() == key) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let user = User {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            role,
            password_digest,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    /// Get a user by their ID.
    #[must_use]
    pub fn get_by_id(&self, id: UserId) -> Option<User> {
        self.store
            .read()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    /// Get a user by their email address, compared case-insensitively.
    #[must_use]
    pub fn get_by_email(&self, email: &Email) -> Option<User> {
        let key = email.normalized();
        self.store
            .read()
            .users
            .iter()
            .find(|u| u.email.normalized() == key)
            .cloned()
    }

    /// Update a user's profile fields.
    ///
    /// `name` is applied as given; `email` is applied only if no other user
    /// holds it (the caller has already validated both).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user does not exist.
    pub fn update_profile(
        &self,
        id: UserId,
        name: Option<String>,
        email: Option<Email>,
    ) -> Result<User, RepositoryError> {
        let mut tables = self.store.write();

        let email = email.filter(|candidate| {
            let key = candidate.normalized();
            !tables
                .users
                .iter()
                .any(|u| u.id != id && u.email.normalized() == key)
        });

        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }

        Ok(user.clone())
    }

    /// All users, in registration order.
    #[must_use]
    pub fn all(&self) -> Vec<User> {
        self.store.read().users.clone()
    }
}
