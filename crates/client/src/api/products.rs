//! Product endpoints.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use mangust_core::{Page, PageRequest, Product};

use super::conversions::convert_product;
use super::envelope::{extract_entity, page_of};
use super::{ApiClient, ApiError};

/// Input for creating a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input for updating a product. Only provided fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input for posting a review.
#[derive(Debug, Clone, Serialize)]
pub struct AddReview {
    pub rating: i64,
    pub comment: String,
}

impl ApiClient {
    /// List products, optionally filtered to one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn list_products(
        &self,
        category_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Product>, ApiError> {
        let mut query = vec![
            ("offset", page.offset().to_string()),
            ("limit", page.limit().to_string()),
        ];
        if let Some(category_id) = category_id {
            query.push(("categoryId", category_id.to_string()));
        }
        let body = self.get_json("/products", &query).await?;
        Ok(page_of(&body, convert_product))
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let body = self.get_json(&format!("/products/{id}"), &[]).await?;
        Ok(convert_product(extract_entity(&body)))
    }

    /// Create a product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn create_product(&self, input: &CreateProduct) -> Result<Product, ApiError> {
        let body = self
            .post_json("/admin/products", &to_body(input)?)
            .await?;
        Ok(convert_product(extract_entity(&body)))
    }

    /// Update a product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn update_product(
        &self,
        id: &str,
        input: &UpdateProduct,
    ) -> Result<Product, ApiError> {
        let body = self
            .put_json(&format!("/admin/products/{id}"), &to_body(input)?)
            .await?;
        Ok(convert_product(extract_entity(&body)))
    }

    /// Delete a product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.delete_json(&format!("/admin/products/{id}")).await?;
        Ok(())
    }

    /// Post a review and return the updated product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn add_review(&self, id: &str, input: &AddReview) -> Result<Product, ApiError> {
        let body = self
            .post_json(&format!("/admin/products/{id}/reviews"), &to_body(input)?)
            .await?;
        Ok(convert_product(extract_entity(&body)))
    }
}

/// Serialize an input struct to a JSON body.
pub(crate) fn to_body<T: Serialize>(input: &T) -> Result<Value, ApiError> {
    serde_json::to_value(input).map_err(|e| ApiError::Parse(e.to_string()))
}
