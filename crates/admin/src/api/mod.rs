//! Remote restaurant-management API client.
//!
//! Every call is a plain REST request: bearer token in the
//! `Authorization` header, JSON bodies, and a `{ success, result, message }`
//! envelope on the way back, where `success == 200` means OK. List
//! responses are cached per token using `moka` (5-minute TTL) and
//! invalidated after the mutations that own them.

mod cache;
pub mod types;

mod auth;
mod guests;
mod offers;
mod restaurants;
mod users;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::config::ApiConfig;

use cache::{CacheKey, CacheValue};

/// Errors that can occur when interacting with the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The envelope reported a non-200 `success` code.
    #[error("API error ({status}): {message}")]
    Api { status: i64, message: String },

    /// Credentials were rejected (login returned no token).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The envelope reported success but carried no `result`.
    #[error("API response missing result for {0}")]
    MissingResult(&'static str),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the remote API rejected the bearer token, meaning the
    /// session is stale and the browser must re-authenticate.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::Api { status: 401, .. })
    }
}

/// The remote API's response envelope.
///
/// `success` is an HTTP-status-like number; `result` carries the payload
/// on success and `message` a human-readable note either way.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: i64,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its `result`, treating `success == 200`
    /// as the sole OK code.
    fn into_result(self, context: &'static str) -> Result<T, ApiError> {
        if self.success != 200 {
            return Err(ApiError::Api {
                status: self.success,
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            });
        }
        self.result.ok_or(ApiError::MissingResult(context))
    }
}

/// Client for the remote restaurant-management API.
///
/// Cheaply cloneable via `Arc`. Holds no token of its own: every call
/// takes the bearer token from the caller's session, so one client is
/// shared by all logged-in admins.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(256)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Execute an authenticated GET and unwrap the envelope's `result`.
    async fn get_result<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self
            .inner
            .client
            .get(self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?
            .json()
            .await?;

        envelope.into_result(context)
    }

    /// Execute an authenticated mutation and return the envelope's
    /// `message`, which pages surface as a notice.
    ///
    /// `success != 200` maps to `ApiError::Api`, which carries the
    /// failure message instead.
    async fn send_mutation<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&B>,
    ) -> Result<Option<String>, ApiError> {
        let mut request = self
            .inner
            .client
            .request(method, self.endpoint(path))
            .bearer_auth(token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let envelope: Envelope<serde_json::Value> = request.send().await?.json().await?;

        if envelope.success != 200 {
            return Err(ApiError::Api {
                status: envelope.success,
                message: envelope
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            });
        }

        Ok(envelope.message)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    async fn cached(&self, key: &CacheKey) -> Option<CacheValue> {
        self.inner.cache.get(key).await
    }

    async fn cache_insert(&self, key: CacheKey, value: CacheValue) {
        self.inner.cache.insert(key, value).await;
    }

    /// Invalidate the cached users list for a token.
    pub async fn invalidate_users(&self, token: &str) {
        self.inner
            .cache
            .invalidate(&CacheKey::Users(token.to_owned()))
            .await;
    }

    /// Invalidate the cached restaurants list for a token.
    pub async fn invalidate_restaurants(&self, token: &str) {
        self.inner
            .cache
            .invalidate(&CacheKey::Restaurants(token.to_owned()))
            .await;
    }

    /// Invalidate the cached offers list for a token.
    pub async fn invalidate_offers(&self, token: &str) {
        self.inner
            .cache
            .invalidate(&CacheKey::Offers(token.to_owned()))
            .await;
    }

    /// Drop every cached list for a token. Called on logout so a
    /// re-login with the same token never sees pre-logout data.
    pub async fn invalidate_session(&self, token: &str) {
        self.invalidate_users(token).await;
        self.invalidate_restaurants(token).await;
        self.invalidate_offers(token).await;
        self.inner
            .cache
            .invalidate(&CacheKey::Guests(token.to_owned()))
            .await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_unwraps_result() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":200,"result":{"token":"abc"},"message":"ok"}"#)
                .unwrap();
        let result = envelope.into_result("login").unwrap();
        assert_eq!(result["token"], "abc");
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":401,"message":"invalid credentials"}"#).unwrap();
        let err = envelope.into_result("login").unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_envelope_success_without_result_is_error() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":200}"#).unwrap();
        assert!(matches!(
            envelope.into_result("profile"),
            Err(ApiError::MissingResult("profile"))
        ));
    }

    #[test]
    fn test_envelope_failure_without_message_has_fallback() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":500}"#).unwrap();
        let err = envelope.into_result("users").unwrap_err();
        assert_eq!(err.to_string(), "API error (500): request failed");
    }

    #[test]
    fn test_is_unauthorized_covers_both_shapes() {
        assert!(ApiError::Unauthorized("invalid credentials".to_string()).is_unauthorized());
        assert!(
            ApiError::Api {
                status: 401,
                message: "token expired".to_string(),
            }
            .is_unauthorized()
        );
        assert!(
            !ApiError::Api {
                status: 500,
                message: "oops".to_string(),
            }
            .is_unauthorized()
        );
        assert!(!ApiError::MissingResult("users").is_unauthorized());
    }

    fn test_client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8090".to_string(),
        })
    }

    #[tokio::test]
    async fn test_invalidate_users_scopes_by_token() {
        let client = test_client();
        client
            .cache_insert(
                CacheKey::Users("token-a".to_string()),
                CacheValue::Users(Vec::new()),
            )
            .await;
        client
            .cache_insert(
                CacheKey::Users("token-b".to_string()),
                CacheValue::Users(Vec::new()),
            )
            .await;

        client.invalidate_users("token-a").await;

        assert!(
            client
                .cached(&CacheKey::Users("token-a".to_string()))
                .await
                .is_none()
        );
        assert!(
            client
                .cached(&CacheKey::Users("token-b".to_string()))
                .await
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_invalidate_session_drops_every_list_for_token() {
        let client = test_client();
        client
            .cache_insert(
                CacheKey::Restaurants("token-a".to_string()),
                CacheValue::Restaurants(Vec::new()),
            )
            .await;
        client
            .cache_insert(
                CacheKey::Guests("token-a".to_string()),
                CacheValue::Guests(Vec::new()),
            )
            .await;
        client
            .cache_insert(
                CacheKey::Guests("token-b".to_string()),
                CacheValue::Guests(Vec::new()),
            )
            .await;

        client.invalidate_session("token-a").await;

        assert!(
            client
                .cached(&CacheKey::Restaurants("token-a".to_string()))
                .await
                .is_none()
        );
        assert!(
            client
                .cached(&CacheKey::Guests("token-a".to_string()))
                .await
                .is_none()
        );
        assert!(
            client
                .cached(&CacheKey::Guests("token-b".to_string()))
                .await
                .is_some()
        );
    }
}
