//! Restaurant administration operations.

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::api::cache::{CacheKey, CacheValue};
use crate::api::types::{Restaurant, RestaurantList, RestaurantPayload};

/// Coordinates stamped onto every restaurant write. The geocoding
/// integration never shipped, so the API has only ever stored this
/// fixed location and existing rows depend on it staying put.
pub const PLACEHOLDER_LAT: &str = "20.5797727";
pub const PLACEHOLDER_LNG: &str = "72.9341574";

impl ApiClient {
    /// List all restaurants, cached per token for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip_all)]
    pub async fn list_restaurants(&self, token: &str) -> Result<Vec<Restaurant>, ApiError> {
        let key = CacheKey::Restaurants(token.to_owned());
        if let Some(CacheValue::Restaurants(restaurants)) = self.cached(&key).await {
            tracing::debug!("restaurants list cache hit");
            return Ok(restaurants);
        }

        let list: RestaurantList = self
            .get_result("/api/admin/restaurants/list", token, "restaurants")
            .await?;

        self.cache_insert(key, CacheValue::Restaurants(list.restaurants.clone()))
            .await;
        Ok(list.restaurants)
    }

    /// Fetch a single restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the restaurant does not
    /// exist.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_restaurant(&self, token: &str, id: &str) -> Result<Restaurant, ApiError> {
        self.get_result(
            &format!("/api/admin/restaurants/getRestaurant/{id}"),
            token,
            "restaurant",
        )
        .await
    }

    /// Create a restaurant. Overwrites `lat`/`lng` with the fixed
    /// placeholder coordinates before sending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the
    /// payload.
    #[tracing::instrument(skip_all)]
    pub async fn add_restaurant(
        &self,
        token: &str,
        payload: &RestaurantPayload,
    ) -> Result<Option<String>, ApiError> {
        let payload = with_placeholder_coordinates(payload);
        let message = self
            .send_mutation(
                Method::POST,
                "/api/admin/restaurants/addRestaurant",
                token,
                Some(&payload),
            )
            .await?;
        self.invalidate_restaurants(token).await;
        Ok(message)
    }

    /// Update an existing restaurant. Overwrites `lat`/`lng` with the
    /// fixed placeholder coordinates before sending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the
    /// payload.
    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update_restaurant(
        &self,
        token: &str,
        id: &str,
        payload: &RestaurantPayload,
    ) -> Result<Option<String>, ApiError> {
        let payload = with_placeholder_coordinates(payload);
        let message = self
            .send_mutation(
                Method::PUT,
                &format!("/api/admin/restaurants/updateRestaurant/{id}"),
                token,
                Some(&payload),
            )
            .await?;
        self.invalidate_restaurants(token).await;
        Ok(message)
    }
}

fn with_placeholder_coordinates(payload: &RestaurantPayload) -> RestaurantPayload {
    let mut payload = payload.clone();
    payload.lat = PLACEHOLDER_LAT.to_string();
    payload.lng = PLACEHOLDER_LNG.to_string();
    payload
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_coordinates_overwrite_input() {
        let payload = RestaurantPayload {
            name: "Trattoria Da Mario".to_string(),
            address: "Hauptstr. 1".to_string(),
            email: "mario@trattoria.example".to_string(),
            phone_number: "030 901820".to_string(),
            number_of_tables: "12".to_string(),
            facebook: None,
            instagram: None,
            website: None,
            logo: None,
            menu: None,
            drink: None,
            lat: "52.52".to_string(),
            lng: "13.405".to_string(),
        };
        let stamped = with_placeholder_coordinates(&payload);
        assert_eq!(stamped.lat, PLACEHOLDER_LAT);
        assert_eq!(stamped.lng, PLACEHOLDER_LNG);
        assert_eq!(stamped.name, payload.name);
    }
}
