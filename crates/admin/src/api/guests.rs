//! Guest (customer) read operations. The API scopes guests to the
//! authenticated restaurant and exposes no mutations for them.

use super::{ApiClient, ApiError};
use crate::api::cache::{CacheKey, CacheValue};
use crate::api::types::{Guest, GuestList};

impl ApiClient {
    /// List the restaurant's guests, cached per token for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip_all)]
    pub async fn list_guests(&self, token: &str) -> Result<Vec<Guest>, ApiError> {
        let key = CacheKey::Guests(token.to_owned());
        if let Some(CacheValue::Guests(guests)) = self.cached(&key).await {
            tracing::debug!("guests list cache hit");
            return Ok(guests);
        }

        let list: GuestList = self
            .get_result("/api/restaurants/customers/list", token, "guests")
            .await?;

        self.cache_insert(key, CacheValue::Guests(list.customers.clone()))
            .await;
        Ok(list.customers)
    }
}
