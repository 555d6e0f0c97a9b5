// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Provides HTTP port, environment name, and CORS origin settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Environment-based server configuration
//!
//! The engine itself is configuration-free; everything here belongs to the
//! HTTP adapter around it (bind port, CORS origins, environment name).

use anyhow::{Context, Result};
use std::env;
use tracing::warn;

/// Default origins for local frontend development, matching the dev servers
/// the bundled frontend runs on.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://localhost:5173";

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or "*" for any origin
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the assessment API
    pub http_port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparseable
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", "8080")?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: env_var_or("ENVIRONMENT", "development")?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS)?,
            },
        };

        Ok(config)
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "PulsePlan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}",
            self.http_port, self.environment, self.cors.allowed_origins
        )
    }
}

/// Read an environment variable with a fallback default
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or_default() {
        let value = env_var_or("PULSEPLAN_DOES_NOT_EXIST", "fallback").unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_summary_contains_port() {
        let config = ServerConfig {
            http_port: 9090,
            environment: "test".into(),
            cors: CorsConfig {
                allowed_origins: "*".into(),
            },
        };
        assert!(config.summary().contains("9090"));
        assert!(config.summary().contains("test"));
    }
}
