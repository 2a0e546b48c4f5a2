//! Wire types for the remote restaurant-management API.
//!
//! Field names follow the API's JSON exactly (a mix of camelCase and
//! snake_case), with serde renames where Rust naming differs.

use serde::{Deserialize, Serialize};

use gastrohub_core::{DateOfBirth, GuestId, OfferId, PhoneNumber, RestaurantId, UserId};

// =============================================================================
// Users
// =============================================================================

/// An admin-manageable user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default)]
    pub dob: Option<DateOfBirth>,
}

/// Write payload for creating or updating a user.
///
/// `dob` serializes as an epoch-milliseconds string, which is the wire
/// format the API stores.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateOfBirth>,
    /// Only present on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `result` shape of `GET /api/admin/users/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
}

// =============================================================================
// Restaurants
// =============================================================================

/// A restaurant profile as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default)]
    pub number_of_tables: Option<i64>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Logo/avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub menu: Option<String>,
    #[serde(default)]
    pub drink: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
}

/// Write payload for creating or updating a restaurant.
///
/// `number_of_tables` is a string on the wire even though responses carry
/// it as a number; `lat`/`lng` are overwritten by the client before every
/// send (see `ApiClient::add_restaurant`).
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPayload {
    pub name: String,
    pub address: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub number_of_tables: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink: Option<String>,
    pub lat: String,
    pub lng: String,
}

/// `result` shape of `GET /api/admin/restaurants/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantList {
    pub restaurants: Vec<Restaurant>,
}

// =============================================================================
// Profile (the logged-in restaurant account)
// =============================================================================

/// The authenticated account's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<PhoneNumber>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Write payload for `POST /api/admin/updateProfile`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// =============================================================================
// Guests
// =============================================================================

/// A guest (the API calls them customers) - read-only list entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<PhoneNumber>,
    /// Number of recorded visits.
    #[serde(default)]
    pub visits: Option<i64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// `result` shape of `GET /api/restaurants/customers/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestList {
    pub customers: Vec<Guest>,
}

// =============================================================================
// Offers
// =============================================================================

/// A promotional offer. Read-mostly; supports delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(rename = "validFrom", default)]
    pub valid_from: Option<String>,
    #[serde(rename = "validUntil", default)]
    pub valid_until: Option<String>,
}

/// `result` shape of `GET /api/restaurants/offers/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferList {
    pub offers: Vec<Offer>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_deserializes_wrapped_phone() {
        // phoneNumber arrives as an object; forms unwrap `.original`
        let json = r#"{
            "id": "r1",
            "name": "Trattoria Da Mario",
            "address": "Hauptstr. 1",
            "email": "mario@trattoria.example",
            "phoneNumber": {"original": "030 901820"},
            "number_of_tables": 12,
            "image": "https://cdn.example/logo.png"
        }"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(restaurant.phone_number.unwrap().original, "030 901820");
        assert_eq!(restaurant.number_of_tables, Some(12));
    }

    #[test]
    fn test_user_payload_serializes_dob_as_millis() {
        let payload = UserPayload {
            name: "Max".to_string(),
            email: "max@example.com".to_string(),
            phone_number: "030 901820".to_string(),
            dob: Some(gastrohub_core::DateOfBirth::parse("1970-01-02").unwrap()),
            password: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["dob"], "86400000");
        assert_eq!(json["phoneNumber"], "030 901820");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_guest_list_unwraps_customers_key() {
        let json = r#"{"customers":[{"id":"g1","name":"Anna","visits":3}]}"#;
        let list: GuestList = serde_json::from_str(json).unwrap();
        assert_eq!(list.customers.len(), 1);
        assert_eq!(list.customers.first().unwrap().visits, Some(3));
    }
}
