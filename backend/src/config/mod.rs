//! Configuration management for the Authgate backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: AUTHGATE__)
//! 4. The plain `PORT` and `JWT_SECRET` variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// JWT configuration
///
/// Only the signing secret is configurable; the token lifetime is fixed.
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig").field("secret", &"<redacted>").finish()
    }
}

/// Demo account seeding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            jwt: JwtConfig {
                secret: "development-secret-change-in-production".to_string(),
            },
            seed: SeedConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with AUTHGATE__ prefix
    /// 4. `PORT` / `JWT_SECRET`
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., AUTHGATE__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("AUTHGATE").separator("__"))
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("jwt.secret", env::var("JWT_SECRET").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Configuration problems that must block a production start
    pub fn production_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.jwt.secret.contains("development") || self.jwt.secret.len() < 32 {
            errors.push("JWT secret must be at least 32 characters and not contain 'development'");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.seed.enabled);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_default_secret_fails_production_checks() {
        assert_eq!(AppConfig::default().production_errors().len(), 1);

        let mut config = AppConfig::default();
        config.jwt.secret = "a".repeat(48);
        assert!(config.production_errors().is_empty());
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        let config = AppConfig::default();
        assert!(!format!("{:?}", config).contains("development-secret"));
    }
}
