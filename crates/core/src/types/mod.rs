//! Core types for Gastrohub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod dob;
pub mod email;
pub mod id;
pub mod phone;

pub use dob::{DateOfBirth, DateOfBirthError};
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{PhoneNumber, PhoneNumberError};
