//! Guest list route handler. Read-only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use super::MessageQuery;
use crate::api::types::Guest;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;

/// Guest list template.
#[derive(Template, WebTemplate)]
#[template(path = "guests/index.html")]
pub struct GuestsTemplate {
    pub guests: Vec<Guest>,
    pub error: Option<String>,
}

/// Display the guest list.
pub async fn index(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let (guests, error) = match state.api().list_guests(&current.token).await {
        Ok(guests) => (guests, query.error),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            tracing::error!("Failed to list guests: {}", e);
            (Vec::new(), Some("Could not load guests.".to_string()))
        }
    };

    Ok(GuestsTemplate { guests, error }.into_response())
}
