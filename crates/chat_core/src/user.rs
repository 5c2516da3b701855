//! User identity types
//!
//! The authenticated user record and the loosely-typed payload the external
//! auth provider reports. The provider payload is mapped into a `User`
//! through `User::from_identity`, which supplies an explicit default for
//! every optional field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback display name when the provider reports neither a display name
/// nor an email address.
const DEFAULT_DISPLAY_NAME: &str = "user";

/// An authenticated user.
///
/// Created when the auth provider reports a signed-in identity, refreshed on
/// re-authentication, and cleared from the store on sign-out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Provider-assigned stable identifier.
    pub id: String,

    /// Email address, empty string when the provider did not report one.
    pub email: String,

    /// Display name, derived when the provider did not report one.
    pub name: String,

    /// Avatar URL, if the provider reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Account creation time.
    pub created_at: DateTime<Utc>,

    /// Last sign-in time.
    pub last_sign_in: DateTime<Utc>,
}

/// Identity payload reported by the external auth provider.
///
/// Every field except `uid` is optional; providers differ in what they
/// populate.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ProviderIdentity {
    pub uid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sign_in_time: Option<DateTime<Utc>>,
}

impl ProviderIdentity {
    /// Create an identity with only the required uid set.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }
}

impl User {
    /// Synthesize a `User` from a provider identity.
    ///
    /// Defaults: missing email becomes an empty string; the name falls back
    /// to the email local-part, then to a generic placeholder; missing
    /// timestamps default to now.
    pub fn from_identity(identity: &ProviderIdentity) -> Self {
        let email = identity.email.clone().unwrap_or_default();
        let name = identity
            .display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| email_local_part(&email))
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        let now = Utc::now();
        Self {
            id: identity.uid.clone(),
            email,
            name,
            avatar_url: identity.photo_url.clone(),
            created_at: identity.creation_time.unwrap_or(now),
            last_sign_in: identity.last_sign_in_time.unwrap_or(now),
        }
    }
}

/// Extract the local-part of an email address, if there is one.
fn email_local_part(email: &str) -> Option<String> {
    let local = email.split('@').next()?.trim();
    if local.is_empty() {
        None
    } else {
        Some(local.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identity_full_payload() {
        let identity = ProviderIdentity {
            uid: "u1".to_string(),
            email: Some("ada@example.com".to_string()),
            display_name: Some("Ada".to_string()),
            photo_url: Some("https://example.com/ada.png".to_string()),
            creation_time: Some(Utc::now()),
            last_sign_in_time: Some(Utc::now()),
        };

        let user = User::from_identity(&identity);
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.avatar_url.as_deref(), Some("https://example.com/ada.png"));
    }

    #[test]
    fn test_from_identity_name_falls_back_to_email_local_part() {
        let mut identity = ProviderIdentity::new("u1");
        identity.email = Some("a@b.com".to_string());

        let user = User::from_identity(&identity);
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_from_identity_minimal_payload() {
        let identity = ProviderIdentity::new("u2");

        let user = User::from_identity(&identity);
        assert_eq!(user.id, "u2");
        assert_eq!(user.email, "");
        assert_eq!(user.name, "user");
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn test_blank_display_name_is_ignored() {
        let mut identity = ProviderIdentity::new("u3");
        identity.display_name = Some("   ".to_string());
        identity.email = Some("grace@example.com".to_string());

        let user = User::from_identity(&identity);
        assert_eq!(user.name, "grace");
    }
}
