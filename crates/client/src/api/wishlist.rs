//! Wishlist endpoints.

use serde_json::json;
use tracing::instrument;

use mangust_core::{Page, PageRequest, WishlistItem};

use super::conversions::convert_wishlist_item;
use super::envelope::{extract_entity, page_of};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List the authenticated user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn list_wishlist(&self, page: PageRequest) -> Result<Page<WishlistItem>, ApiError> {
        let query = [
            ("offset", page.offset().to_string()),
            ("limit", page.limit().to_string()),
        ];
        let body = self.get_json("/wishlist", &query).await?;
        Ok(page_of(&body, convert_wishlist_item))
    }

    /// Add a product to the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn add_to_wishlist(&self, product_id: &str) -> Result<WishlistItem, ApiError> {
        // Both spellings on purpose: backend revisions disagree on which
        // one they read.
        let body = self
            .post_json(
                "/wishlist",
                &json!({"product_id": product_id, "productId": product_id}),
            )
            .await?;
        Ok(convert_wishlist_item(extract_entity(&body)))
    }

    /// Remove an entry from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn remove_from_wishlist(&self, id: &str) -> Result<(), ApiError> {
        self.delete_json(&format!("/wishlist/{id}")).await?;
        Ok(())
    }
}
