//! Authentication endpoints.
//!
//! Login and registration produce the [`Session`] snapshot the rest of the
//! client is constructed with. The backend's auth responses come in a
//! nested (`{"data": {...}}`) and a flat form, and the token key drifted
//! between `access_token` and `token`; both are accepted.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::conversions::convert_user;
use super::envelope::extract_entity;
use super::products::to_body;
use super::{ApiClient, ApiError};
use crate::session::{CurrentUser, Session};

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-account registration input.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl ApiClient {
    /// Log in and build a session from the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no
    /// token.
    #[instrument(skip(self, credentials), fields(request_id))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let body = self.post_json("/auth/login", &to_body(credentials)?).await?;
        session_from_auth_response(&body)
            .ok_or_else(|| ApiError::Parse("login response carried no access token".to_string()))
    }

    /// Register a new customer account.
    ///
    /// Returns a session when the backend logs the account straight in
    /// (its response carries a token), `None` when it only acknowledges.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, registration), fields(request_id))]
    pub async fn register(&self, registration: &Registration) -> Result<Option<Session>, ApiError> {
        let body = self
            .post_json("/auth/register", &to_body(registration)?)
            .await?;
        Ok(session_from_auth_response(&body))
    }

    /// Register a new admin account (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, registration), fields(request_id))]
    pub async fn register_admin(
        &self,
        registration: &Registration,
    ) -> Result<Option<Session>, ApiError> {
        let body = self
            .post_json("/admin/auth/register", &to_body(registration)?)
            .await?;
        Ok(session_from_auth_response(&body))
    }
}

/// Build a session from an auth response, tolerating the nested and flat
/// envelope forms and both token spellings.
fn session_from_auth_response(body: &Value) -> Option<Session> {
    let root = extract_entity(body);
    let token = root
        .get("access_token")
        .or_else(|| root.get("token"))
        .and_then(Value::as_str)?;
    let user = root.get("user").map(convert_user)?;
    Some(Session::new(CurrentUser::from(&user), token.to_string()))
}
