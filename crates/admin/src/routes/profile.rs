//! Own-profile route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use gastrohub_core::{Email, PhoneNumber};

use super::{MessageQuery, redirect_with_error, redirect_with_success};
use crate::api::ApiError;
use crate::api::types::{Profile, ProfilePayload};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireSession;
use crate::state::AppState;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Profile form data.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/index.html")]
pub struct ProfileTemplate {
    pub profile: Profile,
    pub phone_value: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the profile form, prefilled from the API.
pub async fn profile_page(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let profile = state.api().get_profile(&current.token).await?;

    let phone_value = profile
        .phone_number
        .as_ref()
        .map(|phone| phone.original.clone())
        .unwrap_or_default();

    Ok(ProfileTemplate {
        profile,
        phone_value,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Handle profile update.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireSession(current): RequireSession,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let payload = match validate(&form) {
        Ok(payload) => payload,
        Err(message) => {
            return Ok(redirect_with_error("/dashboard/profile", &message).into_response());
        }
    };

    match state.api().update_profile(&current.token, &payload).await {
        Ok(message) => Ok(
            redirect_with_success("/dashboard/profile", message.as_deref()).into_response(),
        ),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(ApiError::Api { message, .. }) => {
            Ok(redirect_with_error("/dashboard/profile", &message).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

fn validate(form: &ProfileForm) -> Result<ProfilePayload, String> {
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

    let address = form
        .address
        .as_deref()
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string);

    Ok(ProfilePayload {
        name: name.to_string(),
        email: email.into_inner(),
        phone_number: phone.original,
        address,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_blank_address_becomes_none() {
        let form = ProfileForm {
            name: "Gastrohub Admin".to_string(),
            email: "admin@gastrohub.app".to_string(),
            phone: "+49 30 901820".to_string(),
            address: Some("  ".to_string()),
        };
        let payload = validate(&form).unwrap();
        assert!(payload.address.is_none());
    }

    #[test]
    fn test_validate_counts_name_length_in_characters() {
        let form = ProfileForm {
            name: "Äö".to_string(),
            email: "admin@gastrohub.app".to_string(),
            phone: "+49 30 901820".to_string(),
            address: None,
        };
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_phone() {
        let form = ProfileForm {
            name: "Gastrohub Admin".to_string(),
            email: "admin@gastrohub.app".to_string(),
            phone: String::new(),
            address: None,
        };
        assert!(validate(&form).is_err());
    }
}
