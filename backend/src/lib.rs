//! Authgate Backend Library
//!
//! Credential check, token issuance and role-based access control.
//! This library exposes the backend modules for use in tests and the binary.

pub mod auth;
pub mod config;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
