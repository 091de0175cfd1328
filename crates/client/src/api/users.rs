//! User and profile endpoints.

use serde::Serialize;
use tracing::instrument;

use mangust_core::{Page, User};

use super::conversions::convert_user;
use super::envelope::{extract_entity, page_of};
use super::products::to_body;
use super::{ApiClient, ApiError};

/// Input for updating the authenticated user's profile. Only provided
/// fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ApiClient {
    /// List every account (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn list_users(&self) -> Result<Page<User>, ApiError> {
        let body = self.get_json("/admin/users", &[]).await?;
        Ok(page_of(&body, convert_user))
    }

    /// Fetch the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let body = self.get_json("/profile", &[]).await?;
        Ok(convert_user(extract_entity(&body)))
    }

    /// Update the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn update_profile(&self, input: &UpdateProfile) -> Result<User, ApiError> {
        let body = self.put_json("/profile", &to_body(input)?).await?;
        Ok(convert_user(extract_entity(&body)))
    }
}
