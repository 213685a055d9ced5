//! User domain types.
//!
//! These types represent validated domain objects separate from wire types.
//! The password digest lives only on the domain type and never reaches the
//! API boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curio_core::{Email, Role, UserId};

/// A marketplace user (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address. Unique case-insensitively.
    pub email: Email,
    /// Capability level (member or admin).
    pub role: Role,
    /// One-way password digest (argon2). Never serialized.
    pub password_digest: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Serializable projection of a [`User`] with the credential digest excluded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Partial profile update payload.
///
/// Only present fields are considered; each is validated and silently
/// ignored if malformed, keeping the prior value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_excludes_digest() {
        let user = User {
            id: UserId::generate(),
            name: "Alice".to_string(),
            email: Email::parse("alice@example.com").unwrap(),
            role: Role::Member,
            password_digest: "$argon2id$not-a-real-digest".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(PublicUser::from(&user)).unwrap();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["role"], "member");
        assert!(json.get("passwordDigest").is_none());
        assert!(!json.to_string().contains("argon2"));
    }
}
