//! Offer operations: list and delete.

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::api::cache::{CacheKey, CacheValue};
use crate::api::types::{Offer, OfferList};

impl ApiClient {
    /// List the restaurant's offers, cached per token for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip_all)]
    pub async fn list_offers(&self, token: &str) -> Result<Vec<Offer>, ApiError> {
        let key = CacheKey::Offers(token.to_owned());
        if let Some(CacheValue::Offers(offers)) = self.cached(&key).await {
            tracing::debug!("offers list cache hit");
            return Ok(offers);
        }

        let list: OfferList = self
            .get_result("/api/restaurants/offers/list", token, "offers")
            .await?;

        self.cache_insert(key, CacheValue::Offers(list.offers.clone()))
            .await;
        Ok(list.offers)
    }

    /// Delete an offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self, token))]
    pub async fn delete_offer(&self, token: &str, id: &str) -> Result<Option<String>, ApiError> {
        let message = self
            .send_mutation::<()>(
                Method::DELETE,
                &format!("/api/restaurants/offers/delete/{id}"),
                token,
                None,
            )
            .await?;
        self.invalidate_offers(token).await;
        Ok(message)
    }
}
