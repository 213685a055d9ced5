//! Authentication service.
//!
//! Registration, login, session minting, and profile updates. Passwords are
//! stored as one-way argon2 digests; session tokens are unguessable random
//! identifiers with no expiry (logout is client-side token discard).

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore as _;

use curio_core::{Email, Role, UserId};

use crate::models::{ProfilePatch, User};
use crate::store::users::UserRepository;
use crate::store::{RepositoryError, SessionRepository, Store};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Length of the random session token in bytes (before encoding).
const TOKEN_BYTES: usize = 32;

/// Authentication service.
///
/// Handles user registration, login, and profile management.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            users: UserRepository::new(store),
            sessions: SessionRepository::new(store),
        }
    }

    /// Register a new user and mint a session for it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyName` if the name is blank.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered,
    /// compared case-insensitively.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(String, User), AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::EmptyName);
        }

        let email = Email::parse(email)?;
        validate_password(password)?;

        let password_digest = hash_password(password)?;

        let user = self
            .users
            .create(name, email, password_digest, Role::Member)
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        let token = self.mint_session(user.id);
        Ok((token, user))
    }

    /// Login with email and password, minting a fresh session.
    ///
    /// Prior sessions for the user stay valid.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` or `AuthError::WeakPassword` for a
    /// malformed payload. Returns `AuthError::InvalidCredentials` when no
    /// user matches the email or the password is wrong — the two cases are
    /// deliberately indistinguishable.
    pub fn login(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let user = self
            .users
            .get_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_digest)?;

        let token = self.mint_session(user.id);
        Ok((token, user))
    }

    /// Resolve a bearer token to the user it authenticates.
    #[must_use]
    pub fn resolve_token(&self, token: &str) -> Option<UserId> {
        self.sessions.resolve(token)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the user doesn't exist.
    pub fn current_user(&self, user_id: UserId) -> Result<User, AuthError> {
        self.users.get_by_id(user_id).ok_or(AuthError::UserNotFound)
    }

    /// Apply a partial profile update.
    ///
    /// Only well-formed non-empty fields are applied; a blank name, a
    /// malformed email, or an email already held by another user silently
    /// keeps the prior value.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the user doesn't exist.
    pub fn update_profile(
        &self,
        user_id: UserId,
        patch: &ProfilePatch,
    ) -> Result<User, AuthError> {
        let name = patch
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(ToOwned::to_owned);

        let email = patch
            .email
            .as_deref()
            .and_then(|e| Email::parse(e).ok());

        let user = self.users.update_profile(user_id, name, email)?;
        Ok(user)
    }

    /// Mint a session token for a user and register it.
    fn mint_session(&self, user_id: UserId) -> String {
        let token = generate_token();
        self.sessions.insert(token.clone(), user_id);
        token
    }
}

/// Generate an unguessable session token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a digest.
fn verify_password(password: &str, digest: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(digest).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
