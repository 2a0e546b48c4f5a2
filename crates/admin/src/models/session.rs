//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

/// Session-stored authentication state.
///
/// The dashboard keeps no user database of its own; holding the remote
/// API's bearer token is what "logged in" means here. The token is
/// stored as a plain `String` because the session store requires
/// `Serialize`, so it must never appear in logs (serialization for the
/// store itself is fine, `Debug` is not derived).
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentSession {
    /// Bearer token issued by the remote API at login.
    pub token: String,
}

impl std::fmt::Debug for CurrentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentSession")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current login's bearer token.
    pub const CURRENT_SESSION: &str = "current_session";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let current = CurrentSession {
            token: "very-secret-token".to_string(),
        };
        let output = format!("{current:?}");
        assert!(!output.contains("very-secret-token"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn test_session_roundtrip() {
        let current = CurrentSession {
            token: "abc123".to_string(),
        };
        let json = serde_json::to_string(&current).unwrap();
        let back: CurrentSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, "abc123");
    }
}
