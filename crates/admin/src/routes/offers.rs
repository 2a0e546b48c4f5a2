//! Offer route handlers: list and delete.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use super::{MessageQuery, redirect_with_error, redirect_with_success};
use crate::api::ApiError;
use crate::api::types::Offer;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;

/// Offer list template.
#[derive(Template, WebTemplate)]
#[template(path = "offers/index.html")]
pub struct OffersTemplate {
    pub offers: Vec<Offer>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the offer list.
pub async fn index(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let (offers, error) = match state.api().list_offers(&current.token).await {
        Ok(offers) => (offers, query.error),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            tracing::error!("Failed to list offers: {}", e);
            (Vec::new(), Some("Could not load offers.".to_string()))
        }
    };

    Ok(OffersTemplate {
        offers,
        error,
        success: query.success,
    }
    .into_response())
}

/// Handle offer deletion.
pub async fn delete(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.api().delete_offer(&current.token, &id).await {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/offers", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error("/dashboard/offers", &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
