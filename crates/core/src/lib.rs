//! Gastrohub Core - Shared types library.
//!
//! This crate provides common types used across the Gastrohub components:
//! - `admin` - Restaurant-management administration dashboard
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers,
//!   and dates of birth

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
