//! HTTP middleware: sessions and authentication.

pub mod auth;
pub mod session;

pub use auth::{RequireSession, clear_current_session, set_current_session};
pub use session::create_session_layer;
