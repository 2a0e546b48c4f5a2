//! Integration tests for Gastrohub.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the admin server
//! cargo run -p gastrohub-admin
//!
//! # Run integration tests against it
//! cargo test -p gastrohub-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running admin server over HTTP; set `ADMIN_BASE_URL`
//! to point them somewhere other than `http://localhost:3001`. The login
//! flow tests additionally need `TEST_ADMIN_EMAIL` and
//! `TEST_ADMIN_PASSWORD` for an account the remote API accepts.
