//! The authenticated-user snapshot.
//!
//! A [`Session`] is an explicit, read-only value handed to every view and
//! to the transport layer - there is no ambient global to consult. The
//! embedding shell decides where the serialized form lives (a file for the
//! CLI, web storage for a browser shell); this module only defines the
//! shape and a deliberately lenient reader.

use serde::{Deserialize, Serialize};

use mangust_core::{Role, User};

/// Minimal identity of the logged-in user.
///
/// A projection of [`User`] carrying just what views need for headers and
/// permission checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Snapshot of an authenticated session.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The logged-in user.
    pub user: CurrentUser,
    /// Bearer token sent on every request.
    pub access_token: String,
    /// Unix timestamp when the token was obtained.
    pub obtained_at: i64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("access_token", &"[REDACTED]")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

impl Session {
    /// Create a session stamped with the current time.
    #[must_use]
    pub fn new(user: CurrentUser, access_token: String) -> Self {
        Self {
            user,
            access_token,
            obtained_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Whether the session belongs to an admin account.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// Parse a stored session.
    ///
    /// Lenient on purpose: corrupt or missing data reads as "not logged
    /// in" rather than an error, so a bad store never locks the UI out of
    /// the login flow.
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Serialize for the embedding shell's store.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session::new(
            CurrentUser {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Admin,
            },
            "tok-123".to_string(),
        )
    }

    #[test]
    fn test_json_round_trip() {
        let session = sample();
        let json = session.to_json().unwrap();
        let restored = Session::from_json(&json).unwrap();
        assert_eq!(restored.user, session.user);
        assert_eq!(restored.access_token, session.access_token);
        assert_eq!(restored.obtained_at, session.obtained_at);
    }

    #[test]
    fn test_corrupt_json_reads_as_logged_out() {
        assert!(Session::from_json("{not json").is_none());
        assert!(Session::from_json("42").is_none());
        assert!(Session::from_json("{}").is_none());
    }

    #[test]
    fn test_is_admin() {
        let mut session = sample();
        assert!(session.is_admin());
        session.user.role = Role::User;
        assert!(!session.is_admin());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug_output = format!("{:?}", sample());
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("tok-123"));
    }
}
