//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the remote API client (which
/// carries the list cache).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    api: ApiClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        let api = ApiClient::new(&config.api);

        Self {
            inner: Arc::new(AppStateInner { api }),
        }
    }

    /// Get a reference to the remote API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }
}
