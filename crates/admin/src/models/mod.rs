//! Data models for the admin dashboard.

pub mod session;

pub use session::{CurrentSession, keys as session_keys};
