//! Repositories
//!
//! Provides the data access layer. Storage is in memory and does not
//! survive a restart.

pub mod user;

pub use user::{UserRecord, UserRepository};
