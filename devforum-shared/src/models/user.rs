use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A forum account as returned by `/users/me` and `/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The user's login name.
    pub username: String,

    /// The user's email address.
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Preferred theme (`light` or `dark`) stored server-side.
    #[serde(default)]
    pub theme_preference: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    /// Whether the account may use the `/categories/admin` routes.
    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Name to show in the UI, preferring the display name when set.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Partial profile update for `PUT /users/me`; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_preference: Option<String>,
}

impl UpdateUserRequest {
    /// True when no field would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.bio.is_none()
            && self.avatar_url.is_none()
            && self.theme_preference.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_backend_payload() {
        let payload = json!({
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "username": "ferris",
            "email": "ferris@example.com",
            "display_name": null,
            "bio": "crab",
            "avatar_url": null,
            "theme_preference": "dark",
            "is_admin": true,
            "created_at": "2024-03-01T12:00:00+00:00",
            "last_login": null
        });

        let user: User = serde_json::from_value(payload).unwrap();
        assert_eq!(user.username, "ferris");
        assert_eq!(user.bio.as_deref(), Some("crab"));
        assert_eq!(user.theme_preference.as_deref(), Some("dark"));
        assert!(user.is_admin);
        assert!(user.created_at.is_some());
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_user_minimal_payload() {
        let payload = json!({
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "username": "ferris",
            "email": "ferris@example.com"
        });

        let user: User = serde_json::from_value(payload).unwrap();
        assert!(!user.is_admin);
        assert_eq!(user.display_label(), "ferris");
    }

    #[test]
    fn test_display_label_prefers_display_name() {
        let payload = json!({
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "username": "ferris",
            "email": "ferris@example.com",
            "display_name": "Ferris the Crab"
        });

        let user: User = serde_json::from_value(payload).unwrap();
        assert_eq!(user.display_label(), "Ferris the Crab");
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let request = UpdateUserRequest {
            bio: Some("new bio".to_string()),
            ..Default::default()
        };

        assert!(!request.is_empty());
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"bio": "new bio"}));
        assert!(UpdateUserRequest::default().is_empty());
    }
}
