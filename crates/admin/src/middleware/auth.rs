//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a logged-in session in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentSession, session_keys};

/// Extractor that requires a logged-in session.
///
/// If no session is present, HTML requests are redirected to the login
/// page and API requests get a 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireSession(current): RequireSession,
/// ) -> impl IntoResponse {
///     // current.token authenticates calls to the remote API
/// }
/// ```
pub struct RequireSession(pub CurrentSession);

/// Error returned when authentication is required but no session exists.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthorized)?;

        let current: CurrentSession = session
            .get(session_keys::CURRENT_SESSION)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| {
                let is_api = parts.uri.path().starts_with("/api/");
                if is_api {
                    AuthRejection::Unauthorized
                } else {
                    AuthRejection::RedirectToLogin
                }
            })?;

        Ok(Self(current))
    }
}

/// Extractor that optionally reads the current session.
///
/// Unlike `RequireSession`, this does not reject the request when the
/// visitor is not logged in. The login page uses it to bounce
/// already-authenticated visitors to the dashboard.
pub struct OptionalSession(pub Option<CurrentSession>);

impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let current = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentSession>(session_keys::CURRENT_SESSION)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(current))
    }
}

/// Helper to store the current session after a successful login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_session(
    session: &Session,
    current: &CurrentSession,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_SESSION, current)
        .await
}

/// Helper to clear the current session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_session(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentSession>(session_keys::CURRENT_SESSION).await?;
    session.flush().await?;
    Ok(())
}
