//! Gastrohub Admin library.
//!
//! Server-rendered administration dashboard for the Gastrohub
//! restaurant-management platform. The dashboard holds no data of its
//! own: it authenticates against the remote REST API, keeps the issued
//! bearer token in a session cookie, and proxies all reads and writes
//! through that API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
