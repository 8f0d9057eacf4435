//! User domain entity and its client-facing view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// `id` is empty until storage assigns one and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub registered_at: DateTime<Utc>,
    pub last_visit_at: DateTime<Utc>,
}

impl User {
    /// Create an unsaved user; timestamps stay at the epoch until signup.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Check if storage has assigned an identifier
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Attach an identifier (used when a path id targets an update)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Stamp both timestamps with the same instant
    pub fn stamp_visit(&mut self, now: DateTime<Utc>) {
        self.registered_at = now;
        self.last_visit_at = now;
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Storage-assigned identifier (24 hex characters)
    #[schema(example = "65f1a2b3c4d5e6f708192a3b")]
    pub id: String,
    /// User display name
    #[schema(example = "Alice")]
    pub name: String,
    /// User email address
    #[schema(example = "a@x.io")]
    pub email: String,
    /// Signup timestamp
    pub registered_at: DateTime<Utc>,
    /// Last visit timestamp
    pub last_visit_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            registered_at: user.registered_at,
            last_visit_at: user.last_visit_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_id_and_zero_timestamps() {
        let user = User::new("Alice", "a@x.io", "secret1");

        assert!(!user.has_id());
        assert_eq!(user.registered_at, DateTime::<Utc>::default());
        assert_eq!(user.last_visit_at, DateTime::<Utc>::default());
    }

    #[test]
    fn response_drops_password() {
        let user = User::new("Alice", "a@x.io", "secret1").with_id("65f1a2b3c4d5e6f708192a3b");
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(json["name"], "Alice");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn stamp_visit_sets_both_timestamps() {
        let mut user = User::new("Alice", "a@x.io", "secret1");
        let now = Utc::now();
        user.stamp_visit(now);

        assert_eq!(user.registered_at, now);
        assert_eq!(user.last_visit_at, now);
    }
}
