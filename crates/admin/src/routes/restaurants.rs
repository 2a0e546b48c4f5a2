//! Restaurant administration route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use gastrohub_core::{Email, PhoneNumber};

use super::{MessageQuery, redirect_with_error, redirect_with_success};
use crate::api::ApiError;
use crate::api::types::{Restaurant, RestaurantPayload};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;
const ADDRESS_MAX_LENGTH: usize = 255;

/// Restaurant create/edit form data.
#[derive(Debug, Deserialize)]
pub struct RestaurantForm {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub number_of_tables: String,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub menu: Option<String>,
    #[serde(default)]
    pub drink: Option<String>,
}

/// Restaurant list template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurants/index.html")]
pub struct RestaurantsTemplate {
    pub restaurants: Vec<Restaurant>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Add restaurant form template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurants/add.html")]
pub struct AddRestaurantTemplate {
    pub error: Option<String>,
}

/// Edit restaurant form template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurants/edit.html")]
pub struct EditRestaurantTemplate {
    pub restaurant: Restaurant,
    pub phone_value: String,
    pub tables_value: String,
    pub error: Option<String>,
}

/// Display the restaurant list.
pub async fn index(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let (restaurants, error) = match state.api().list_restaurants(&current.token).await {
        Ok(restaurants) => (restaurants, query.error),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            tracing::error!("Failed to list restaurants: {}", e);
            (Vec::new(), Some("Could not load restaurants.".to_string()))
        }
    };

    Ok(RestaurantsTemplate {
        restaurants,
        error,
        success: query.success,
    }
    .into_response())
}

/// Display the add-restaurant form.
pub async fn add_page(
    RequireSession(_current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    AddRestaurantTemplate { error: query.error }
}

/// Handle restaurant creation.
pub async fn add(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Form(form): Form<RestaurantForm>,
) -> Result<Response, AppError> {
    let payload = match validate(&form) {
        Ok(payload) => payload,
        Err(message) => {
            return Ok(
                redirect_with_error("/dashboard/restaurants/add", &message).into_response(),
            );
        }
    };

    match state.api().add_restaurant(&current.token, &payload).await {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/restaurants", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error("/dashboard/restaurants/add", &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Display the edit-restaurant form, prefilled from the API.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Path(id): Path<String>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let restaurant = match state.api().get_restaurant(&current.token, &id).await {
        Ok(restaurant) => restaurant,
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(ApiError::Api { .. } | ApiError::MissingResult(_)) => {
            return Ok(
                redirect_with_error("/dashboard/restaurants", "Restaurant not found.")
                    .into_response(),
            );
        }
        Err(e) => return Err(e.into()),
    };

    let phone_value = restaurant
        .phone_number
        .as_ref()
        .map(|phone| phone.original.clone())
        .unwrap_or_default();
    let tables_value = restaurant
        .number_of_tables
        .map(|tables| tables.to_string())
        .unwrap_or_default();

    Ok(EditRestaurantTemplate {
        restaurant,
        phone_value,
        tables_value,
        error: query.error,
    }
    .into_response())
}

/// Handle restaurant update.
pub async fn edit(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Path(id): Path<String>,
    Form(form): Form<RestaurantForm>,
) -> Result<Response, AppError> {
    let edit_path = format!("/dashboard/restaurants/edit/{id}");

    let payload = match validate(&form) {
        Ok(payload) => payload,
        Err(message) => return Ok(redirect_with_error(&edit_path, &message).into_response()),
    };

    match state
        .api()
        .update_restaurant(&current.token, &id, &payload)
        .await
    {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/restaurants", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error(&edit_path, &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Validate the form and build the API payload.
///
/// `lat`/`lng` are left empty here; the API client stamps the fixed
/// placeholder coordinates onto every write.
fn validate(form: &RestaurantForm) -> Result<RestaurantPayload, String> {
    let name = form.name.trim();
    let name_length = name.chars().count();
    if name_length < NAME_MIN_LENGTH || name_length > NAME_MAX_LENGTH {
        return Err(format!(
            "Name must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters."
        ));
    }

    // An empty address is allowed.
    let address = form.address.trim();
    if address.chars().count() > ADDRESS_MAX_LENGTH {
        return Err(format!(
            "Address must be at most {ADDRESS_MAX_LENGTH} characters."
        ));
    }

    let email = Email::parse(&form.email).map_err(|e| format!("Invalid email: {e}"))?;

    let phone =
        PhoneNumber::parse(&form.phone).map_err(|e| format!("Invalid phone number: {e}"))?;

    let tables = form.number_of_tables.trim();
    if tables.is_empty() || tables.parse::<u32>().is_err() {
        return Err("Number of tables must be a whole number.".to_string());
    }

    Ok(RestaurantPayload {
        name: name.to_string(),
        address: address.to_string(),
        email: email.into_inner(),
        phone_number: phone.original,
        number_of_tables: tables.to_string(),
        facebook: non_blank(form.facebook.as_deref()),
        instagram: non_blank(form.instagram.as_deref()),
        website: non_blank(form.website.as_deref()),
        logo: non_blank(form.logo.as_deref()),
        menu: non_blank(form.menu.as_deref()),
        drink: non_blank(form.drink.as_deref()),
        lat: String::new(),
        lng: String::new(),
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> RestaurantForm {
        RestaurantForm {
            name: "Trattoria Da Mario".to_string(),
            address: "Hauptstr. 1, 10115 Berlin".to_string(),
            email: "mario@trattoria.example".to_string(),
            phone: "030 901820".to_string(),
            number_of_tables: "12".to_string(),
            facebook: Some(String::new()),
            instagram: None,
            website: Some("https://trattoria.example".to_string()),
            logo: None,
            menu: None,
            drink: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let payload = validate(&valid_form()).unwrap();
        assert_eq!(payload.number_of_tables, "12");
        assert!(payload.facebook.is_none());
        assert_eq!(
            payload.website.as_deref(),
            Some("https://trattoria.example")
        );
    }

    #[test]
    fn test_validate_accepts_blank_address() {
        let mut form = valid_form();
        form.address = "   ".to_string();
        let payload = validate(&form).unwrap();
        assert_eq!(payload.address, "");
    }

    #[test]
    fn test_validate_counts_name_length_in_characters() {
        let mut form = valid_form();
        form.name = "Äö".to_string();
        assert!(validate(&form).is_err());
        form.name = "Café".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_numeric_tables() {
        let mut form = valid_form();
        form.number_of_tables = "a dozen".to_string();
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_validate_rejects_overlong_address() {
        let mut form = valid_form();
        form.address = "x".repeat(ADDRESS_MAX_LENGTH + 1);
        assert!(validate(&form).is_err());
    }
}
