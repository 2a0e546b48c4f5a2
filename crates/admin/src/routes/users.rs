//! User administration route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use gastrohub_core::{DateOfBirth, Email, PhoneNumber};

use super::{MessageQuery, redirect_with_error, redirect_with_success};
use crate::api::ApiError;
use crate::api::types::{User, UserPayload};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;
const PASSWORD_MIN_LENGTH: usize = 8;

/// User create/edit form data.
///
/// `dob` arrives as `YYYY-MM-DD` from the date input; empty strings mean
/// the field was left blank.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// User list template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersTemplate {
    pub users: Vec<User>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Add user form template.
#[derive(Template, WebTemplate)]
#[template(path = "users/add.html")]
pub struct AddUserTemplate {
    pub error: Option<String>,
}

/// Edit user form template.
#[derive(Template, WebTemplate)]
#[template(path = "users/edit.html")]
pub struct EditUserTemplate {
    pub user: User,
    pub dob_value: String,
    pub phone_value: String,
    pub error: Option<String>,
}

/// Display the user list.
///
/// Degrades to an empty table with an error banner when the API call
/// fails, except on a stale token, which bounces back to the login page.
pub async fn index(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let (users, error) = match state.api().list_users(&current.token).await {
        Ok(users) => (users, query.error),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            (Vec::new(), Some("Could not load users.".to_string()))
        }
    };

    Ok(UsersTemplate {
        users,
        error,
        success: query.success,
    }
    .into_response())
}

/// Display the add-user form.
pub async fn add_page(
    RequireSession(_current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    AddUserTemplate { error: query.error }
}

/// Handle user creation.
pub async fn add(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let payload = match validate(&form, true) {
        Ok(payload) => payload,
        Err(message) => {
            return Ok(redirect_with_error("/dashboard/users/add", &message).into_response());
        }
    };

    match state.api().add_user(&current.token, &payload).await {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/users", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error("/dashboard/users/add", &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Display the edit-user form, prefilled from the API.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Path(id): Path<String>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let user = match state.api().get_user(&current.token, &id).await {
        Ok(user) => user,
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(ApiError::Api { .. } | ApiError::MissingResult(_)) => {
            return Ok(redirect_with_error("/dashboard/users", "User not found.").into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let dob_value = user
        .dob
        .map(DateOfBirth::to_form_string)
        .unwrap_or_default();
    let phone_value = user
        .phone_number
        .as_ref()
        .map(|phone| phone.original.clone())
        .unwrap_or_default();

    Ok(EditUserTemplate {
        user,
        dob_value,
        phone_value,
        error: query.error,
    }
    .into_response())
}

/// Handle user update.
pub async fn edit(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Path(id): Path<String>,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let edit_path = format!("/dashboard/users/edit/{id}");

    let payload = match validate(&form, false) {
        Ok(payload) => payload,
        Err(message) => return Ok(redirect_with_error(&edit_path, &message).into_response()),
    };

    match state.api().update_user(&current.token, &id, &payload).await {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/users", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error(&edit_path, &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle user deletion.
pub async fn delete(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.api().delete_user(&current.token, &id).await {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/users", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error("/dashboard/users", &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Validate the form and build the API payload.
///
/// `require_password` holds for creates; updates leave the password
/// untouched.
fn validate(form: &UserForm, require_password: bool) -> Result<UserPayload, String> {
    let name = form.name.trim();
    let name_length = name.chars().count();
    if name_length < NAME_MIN_LENGTH || name_length > NAME_MAX_LENGTH {
        return Err(format!(
            "Name must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters."
        ));
    }

    let email = Email::parse(&form.email).map_err(|e| format!("Invalid email: {e}"))?;

    let phone =
        PhoneNumber::parse(&form.phone).map_err(|e| format!("Invalid phone number: {e}"))?;

    let dob = match form.dob.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => {
            Some(DateOfBirth::parse(value).map_err(|e| format!("Invalid date of birth: {e}"))?)
        }
    };

    let password = match form.password.as_deref() {
        None | Some("") if require_password => {
            return Err("Password is required.".to_string());
        }
        None | Some("") => None,
        Some(password) if password.len() < PASSWORD_MIN_LENGTH => {
            return Err(format!(
                "Password must be at least {PASSWORD_MIN_LENGTH} characters."
            ));
        }
        Some(password) => Some(password.to_string()),
    };

    Ok(UserPayload {
        name: name.to_string(),
        email: email.into_inner(),
        phone_number: phone.original,
        dob,
        password,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> UserForm {
        UserForm {
            name: "Max Mustermann".to_string(),
            email: "max@example.com".to_string(),
            phone: "030 901820".to_string(),
            dob: Some("1990-05-17".to_string()),
            password: Some("hunter2hunter2".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let payload = validate(&valid_form(), true).unwrap();
        assert_eq!(payload.name, "Max Mustermann");
        assert_eq!(payload.phone_number, "030 901820");
        assert!(payload.dob.is_some());
        assert_eq!(payload.password.as_deref(), Some("hunter2hunter2"));
    }

    #[test]
    fn test_validate_rejects_short_name() {
        let mut form = valid_form();
        form.name = "Ab".to_string();
        assert!(validate(&form, true).is_err());
    }

    #[test]
    fn test_validate_counts_name_length_in_characters() {
        let mut form = valid_form();
        // Two characters but four bytes; still too short.
        form.name = "Äö".to_string();
        assert!(validate(&form, true).is_err());
        form.name = "Äöü".to_string();
        assert!(validate(&form, true).is_ok());
    }

    #[test]
    fn test_validate_requires_password_on_create_only() {
        let mut form = valid_form();
        form.password = None;
        assert!(validate(&form, true).is_err());
        let payload = validate(&form, false).unwrap();
        assert!(payload.password.is_none());
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let mut form = valid_form();
        form.password = Some("short".to_string());
        assert!(validate(&form, true).is_err());
    }

    #[test]
    fn test_validate_treats_blank_dob_as_none() {
        let mut form = valid_form();
        form.dob = Some("  ".to_string());
        let payload = validate(&form, false).unwrap();
        assert!(payload.dob.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert!(validate(&form, true).is_err());
    }
}
