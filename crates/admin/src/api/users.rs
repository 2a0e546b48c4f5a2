//! User administration operations.

use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::api::cache::{CacheKey, CacheValue};
use crate::api::types::{User, UserList, UserPayload};

impl ApiClient {
    /// List all user accounts, cached per token for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip_all)]
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let key = CacheKey::Users(token.to_owned());
        if let Some(CacheValue::Users(users)) = self.cached(&key).await {
            tracing::debug!("users list cache hit");
            return Ok(users);
        }

        let list: UserList = self
            .get_result("/api/admin/users/list", token, "users")
            .await?;

        self.cache_insert(key, CacheValue::Users(list.users.clone()))
            .await;
        Ok(list.users)
    }

    /// Fetch a single user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_user(&self, token: &str, id: &str) -> Result<User, ApiError> {
        self.get_result(&format!("/api/admin/users/getProfile/{id}"), token, "user")
            .await
    }

    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the
    /// payload.
    #[tracing::instrument(skip_all)]
    pub async fn add_user(
        &self,
        token: &str,
        payload: &UserPayload,
    ) -> Result<Option<String>, ApiError> {
        let message = self
            .send_mutation(Method::POST, "/api/admin/users/add", token, Some(payload))
            .await?;
        self.invalidate_users(token).await;
        Ok(message)
    }

    /// Update an existing user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the
    /// payload.
    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update_user(
        &self,
        token: &str,
        id: &str,
        payload: &UserPayload,
    ) -> Result<Option<String>, ApiError> {
        let message = self
            .send_mutation(
                Method::PUT,
                &format!("/api/admin/users/updateProfile/{id}"),
                token,
                Some(payload),
            )
            .await?;
        self.invalidate_users(token).await;
        Ok(message)
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self, token))]
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<Option<String>, ApiError> {
        let message = self
            .send_mutation::<()>(
                Method::DELETE,
                &format!("/api/admin/users/delete/{id}"),
                token,
                None,
            )
            .await?;
        self.invalidate_users(token).await;
        Ok(message)
    }
}
