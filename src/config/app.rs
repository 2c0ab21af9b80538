//! Application-level configuration.

use serde::Deserialize;

/// Environment name that relaxes validation.
pub const DEVELOPMENT_ENV: &str = "development";

/// Application-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment name shown in logs.
    pub name: String,
    /// Environment: "development", "staging", or "production".
    pub env: String,
}

impl AppConfig {
    /// Anything other than "development" is validated strictly.
    pub fn is_production(&self) -> bool {
        self.env != DEVELOPMENT_ENV
    }
}
