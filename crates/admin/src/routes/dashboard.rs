//! Dashboard overview.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::api::ApiError;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;

/// Dashboard overview template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub user_count: usize,
    pub restaurant_count: usize,
    pub guest_count: usize,
    pub offer_count: usize,
}

/// Display the dashboard overview with entity counts.
///
/// Each count degrades to zero when its list call fails so one flaky
/// endpoint never blanks the whole page; a rejected token is the
/// exception and bounces back to the login page.
pub async fn index(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
) -> Result<Response, AppError> {
    let token = &current.token;
    let (users, restaurants, guests, offers) = tokio::join!(
        state.api().list_users(token),
        state.api().list_restaurants(token),
        state.api().list_guests(token),
        state.api().list_offers(token),
    );

    Ok(DashboardTemplate {
        user_count: count_or_zero(users.map(|list| list.len()), "users")?,
        restaurant_count: count_or_zero(restaurants.map(|list| list.len()), "restaurants")?,
        guest_count: count_or_zero(guests.map(|list| list.len()), "guests")?,
        offer_count: count_or_zero(offers.map(|list| list.len()), "offers")?,
    }
    .into_response())
}

fn count_or_zero(result: Result<usize, ApiError>, entity: &str) -> Result<usize, AppError> {
    match result {
        Ok(count) => Ok(count),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            tracing::error!("Failed to count {}: {}", entity, e);
            Ok(0)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_count_or_zero_degrades_on_server_error() {
        let result: Result<usize, ApiError> = Err(ApiError::Api {
            status: 500,
            message: "oops".to_string(),
        });
        assert_eq!(count_or_zero(result, "users").unwrap(), 0);
    }

    #[test]
    fn test_count_or_zero_propagates_rejected_token() {
        let result: Result<usize, ApiError> = Err(ApiError::Api {
            status: 401,
            message: "token expired".to_string(),
        });
        assert!(matches!(
            count_or_zero(result, "users"),
            Err(AppError::Api(e)) if e.is_unauthorized()
        ));
    }
}
