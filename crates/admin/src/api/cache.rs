//! Cache types for remote API list responses.
//!
//! List responses are cached per bearer token: the remote API scopes
//! guests and offers to the authenticated restaurant, so entries must
//! never be shared across sessions.

use crate::api::types::{Guest, Offer, Restaurant, User};

/// Cache key for list endpoints. Each variant carries the bearer token
/// the list was fetched with.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Users(String),
    Restaurants(String),
    Guests(String),
    Offers(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Users(Vec<User>),
    Restaurants(Vec<Restaurant>),
    Guests(Vec<Guest>),
    Offers(Vec<Offer>),
}
