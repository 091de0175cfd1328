//! Order endpoints.

use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use mangust_core::{Order, OrderStatus, Page, PageRequest};

use super::conversions::convert_order;
use super::envelope::{extract_entity, page_of};
use super::products::to_body;
use super::{ApiClient, ApiError};

/// Input for placing an order.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrder {
    pub items: Vec<CreateOrderItem>,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: String,
    pub quantity: i64,
}

/// Filters for the admin order search. Only provided fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl ApiClient {
    /// List orders. Admins see every order; other accounts see their own.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn list_orders(&self, page: PageRequest) -> Result<Page<Order>, ApiError> {
        let query = [
            ("offset", page.offset().to_string()),
            ("limit", page.limit().to_string()),
        ];
        let body = self.get_json("/orders", &query).await?;
        Ok(page_of(&body, convert_order))
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_order(&self, id: &str) -> Result<Order, ApiError> {
        let body = self.get_json(&format!("/orders/{id}"), &[]).await?;
        Ok(convert_order(extract_entity(&body)))
    }

    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(request_id))]
    pub async fn create_order(&self, input: &CreateOrder) -> Result<Order, ApiError> {
        let body = self.post_json("/orders", &to_body(input)?).await?;
        Ok(convert_order(extract_entity(&body)))
    }

    /// Set an order's status (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let body = self
            .put_json(
                &format!("/admin/orders/{id}/status"),
                &json!({"status": status.as_str()}),
            )
            .await?;
        Ok(convert_order(extract_entity(&body)))
    }

    /// Search orders with filters (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, filter), fields(request_id))]
    pub async fn find_orders(
        &self,
        filter: &OrderFilter,
        page: PageRequest,
    ) -> Result<Page<Order>, ApiError> {
        let mut body = to_body(filter)?;
        if let Some(params) = body.as_object_mut() {
            params.insert("offset".to_string(), json!(page.offset()));
            params.insert("limit".to_string(), json!(page.limit()));
        }
        let body = self.post_json("/admin/orders/find", &body).await?;
        Ok(page_of(&body, convert_order))
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
        self.delete_json(&format!("/orders/{id}")).await?;
        Ok(())
    }
}
