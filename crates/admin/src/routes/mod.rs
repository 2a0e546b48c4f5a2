//! HTTP route handlers for the admin dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                  - Redirect to dashboard
//! GET  /health                            - Health check
//!
//! # Auth
//! GET  /login                             - Login page
//! POST /login                             - Login action
//! POST /logout                            - Logout action
//!
//! # Dashboard (requires session)
//! GET  /dashboard                         - Overview
//! GET  /dashboard/profile                 - Own profile form
//! POST /dashboard/profile                 - Update own profile
//!
//! # Users
//! GET  /dashboard/users                   - User list
//! GET  /dashboard/users/add               - Add user form
//! POST /dashboard/users/add               - Create user
//! GET  /dashboard/users/edit/{id}         - Edit user form
//! POST /dashboard/users/edit/{id}         - Update user
//! POST /dashboard/users/delete/{id}       - Delete user
//!
//! # Restaurants
//! GET  /dashboard/restaurants             - Restaurant list
//! GET  /dashboard/restaurants/add         - Add restaurant form
//! POST /dashboard/restaurants/add         - Create restaurant
//! GET  /dashboard/restaurants/edit/{id}   - Edit restaurant form
//! POST /dashboard/restaurants/edit/{id}   - Update restaurant
//!
//! # Guests (read-only)
//! GET  /dashboard/guests                  - Guest list
//!
//! # Offers
//! GET  /dashboard/offers                  - Offer list
//! POST /dashboard/offers/delete/{id}      - Delete offer
//! ```

pub mod auth;
pub mod dashboard;
pub mod guests;
pub mod offers;
pub mod profile;
pub mod restaurants;
pub mod users;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Build a redirect to `path` carrying a success notice.
///
/// The notice is the remote API's status message, passed through
/// urlencoded verbatim.
#[must_use]
pub fn redirect_with_success(path: &str, message: Option<&str>) -> Redirect {
    message.map_or_else(
        || Redirect::to(path),
        |message| {
            let url = format!("{path}?success={}", urlencoding::encode(message));
            Redirect::to(&url)
        },
    )
}

/// Build a redirect to `path` carrying an error notice.
#[must_use]
pub fn redirect_with_error(path: &str, message: &str) -> Redirect {
    let url = format!("{path}?error={}", urlencoding::encode(message));
    Redirect::to(&url)
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the dashboard routes router (all require a session).
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::index))
        .route(
            "/dashboard/profile",
            get(profile::profile_page).post(profile::update_profile),
        )
        .route("/dashboard/users", get(users::index))
        .route(
            "/dashboard/users/add",
            get(users::add_page).post(users::add),
        )
        .route(
            "/dashboard/users/edit/{id}",
            get(users::edit_page).post(users::edit),
        )
        .route("/dashboard/users/delete/{id}", post(users::delete))
        .route("/dashboard/restaurants", get(restaurants::index))
        .route(
            "/dashboard/restaurants/add",
            get(restaurants::add_page).post(restaurants::add),
        )
        .route(
            "/dashboard/restaurants/edit/{id}",
            get(restaurants::edit_page).post(restaurants::edit),
        )
        .route("/dashboard/guests", get(guests::index))
        .route("/dashboard/offers", get(offers::index))
        .route("/dashboard/offers/delete/{id}", post(offers::delete))
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .merge(auth_routes())
        .merge(dashboard_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_with_success_encodes_message() {
        let redirect = redirect_with_success("/dashboard/users", Some("User added successfully"));
        let response = axum::response::IntoResponse::into_response(redirect);
        let location = response
            .headers()
            .get(axum::http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert_eq!(
            location,
            "/dashboard/users?success=User%20added%20successfully"
        );
    }

    #[test]
    fn test_redirect_without_message_is_plain() {
        let redirect = redirect_with_success("/dashboard/offers", None);
        let response = axum::response::IntoResponse::into_response(redirect);
        let location = response
            .headers()
            .get(axum::http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert_eq!(location, "/dashboard/offers");
    }
}
