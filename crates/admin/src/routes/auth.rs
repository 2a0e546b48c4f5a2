//! Authentication route handlers.
//!
//! Login exchanges credentials for the remote API's bearer token and
//! stores it in the session; logout destroys the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use super::MessageQuery;
use crate::api::ApiError;
use crate::filters;
use crate::middleware::auth::OptionalSession;
use crate::middleware::{clear_current_session, set_current_session};
use crate::models::CurrentSession;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the login page.
///
/// Already-authenticated visitors go straight to the dashboard.
pub async fn login_page(
    OptionalSession(current): OptionalSession,
    Query(query): Query<MessageQuery>,
) -> Response {
    if current.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    let error = query.error.as_deref().map(|code| {
        match code {
            "credentials" => "Invalid email or password.",
            "session" => "Your session has expired, please sign in again.",
            _ => "Login failed, please try again.",
        }
        .to_string()
    });

    LoginTemplate {
        error,
        success: query.success,
    }
    .into_response()
}

/// Handle login form submission.
///
/// A login only succeeds when the remote API returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.api().login(&form.email, &form.password).await {
        Ok(token) => {
            let current = CurrentSession { token };

            if let Err(e) = set_current_session(&session, &current).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/login?error=session").into_response();
            }

            Redirect::to("/dashboard").into_response()
        }
        Err(ApiError::Unauthorized(message)) => {
            tracing::warn!("Login rejected: {}", message);
            Redirect::to("/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            Redirect::to("/login?error=failed").into_response()
        }
    }
}

/// Handle logout.
///
/// Destroys the session and drops the token's cached lists; the remote
/// API token itself simply expires on its own.
pub async fn logout(
    State(state): State<AppState>,
    OptionalSession(current): OptionalSession,
    session: Session,
) -> Response {
    if let Some(current) = current {
        state.api().invalidate_session(&current.token).await;
    }

    if let Err(e) = clear_current_session(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    Redirect::to("/login").into_response()
}
