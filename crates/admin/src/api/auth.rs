//! Authentication and own-profile operations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError, Envelope};
use crate::api::types::{Profile, ProfilePayload};

#[derive(Debug, Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResult {
    #[serde(default)]
    token: Option<String>,
}

impl ApiClient {
    /// Authenticate against the remote API and return the bearer token.
    ///
    /// A login only counts as successful when the result carries a
    /// token; a 200 envelope without one is still a rejection.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials and the
    /// usual transport/parse errors otherwise.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let envelope: Envelope<LoginResult> = self
            .inner
            .client
            .post(self.endpoint("/api/restaurants/login"))
            .json(&LoginPayload { email, password })
            .send()
            .await?
            .json()
            .await?;

        let message = envelope
            .message
            .clone()
            .unwrap_or_else(|| "login failed".to_string());

        if envelope.success != 200 {
            return Err(ApiError::Unauthorized(message));
        }

        envelope
            .result
            .and_then(|result| result.token)
            .ok_or(ApiError::Unauthorized(message))
    }

    /// Fetch the authenticated account's own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is no longer
    /// accepted.
    #[tracing::instrument(skip_all)]
    pub async fn get_profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.get_result("/api/restaurants/getProfile", token, "profile")
            .await
    }

    /// Update the authenticated account's own profile.
    ///
    /// Returns the API's status message for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the
    /// update.
    #[tracing::instrument(skip_all)]
    pub async fn update_profile(
        &self,
        token: &str,
        payload: &ProfilePayload,
    ) -> Result<Option<String>, ApiError> {
        self.send_mutation(Method::POST, "/api/admin/updateProfile", token, Some(payload))
            .await
    }
}
