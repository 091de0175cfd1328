//! Category endpoints.

use serde::Serialize;
use tracing::instrument;

use mangust_core::{Category, Page, PageRequest};

use super::conversions::convert_category;
use super::envelope::{extract_entity, page_of};
use super::products::to_body;
use super::{ApiClient, ApiError};

/// Input for creating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input for updating a category. Only provided fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ApiClient {
    /// List categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, ApiError> {
        let query = [
            ("offset", page.offset().to_string()),
            ("limit", page.limit().to_string()),
        ];
        let body = self.get_json("/categories", &query).await?;
        Ok(page_of(&body, convert_category))
    }

    /// Fetch one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_category(&self, id: &str) -> Result<Category, ApiError> {
        let body = self.get_json(&format!("/categories/{id}"), &[]).await?;
        Ok(convert_category(extract_entity(&body)))
    }

    /// Create a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn create_category(&self, input: &CreateCategory) -> Result<Category, ApiError> {
        let body = self
            .post_json("/admin/categories", &to_body(input)?)
            .await?;
        Ok(convert_category(extract_entity(&body)))
    }

    /// Update a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn update_category(
        &self,
        id: &str,
        input: &UpdateCategory,
    ) -> Result<Category, ApiError> {
        let body = self
            .put_json(&format!("/admin/categories/{id}"), &to_body(input)?)
            .await?;
        Ok(convert_category(extract_entity(&body)))
    }

    /// Delete a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.delete_json(&format!("/admin/categories/{id}")).await?;
        Ok(())
    }
}
