//! Authgate Shared Library
//!
//! This crate contains the types shared between the backend and its clients:
//! the closed role set, the redacted user view, request/response bodies and
//! the domain error enums.

pub mod errors;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::{Role, UserId, UserSummary};
pub use types::*;
