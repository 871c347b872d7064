//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: JWT keys are created once
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::UserRepository;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: UserRepository,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new application state with an empty credential store
    pub fn new(config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret);

        Self {
            users: UserRepository::new(),
            config: Arc::new(config),
            jwt,
        }
    }

    /// Get a reference to the credential store
    #[inline]
    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the JWT service
    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
