//! Configuration loading and validation.
//!
//! Uses serde_yaml to load YAML configuration files. The strategy profile and
//! system max leverage can be overridden with environment variables.

mod app;
mod duration;
mod error;
mod prompt;
mod strategy;

pub use app::{AppConfig, DEVELOPMENT_ENV};
pub use error::ConfigError;
pub use prompt::PromptConfig;
pub use strategy::StrategyConfig;

use serde::Deserialize;
use std::{env, fs};
use tracing::info;

use crate::prompt::StrategyPromptContext;
use crate::strategy::{ProfileId, StrategyParams};

/// Overrides `strategy.profile`.
pub const PROFILE_ENV: &str = "STRATEGY_PROFILE";
/// Overrides `strategy.system_max_leverage`.
pub const MAX_LEVERAGE_ENV: &str = "SYSTEM_MAX_LEVERAGE";

/// Root configuration structure.
///
/// Required sections: app, strategy.
/// Optional sections: prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Profile selection and leverage ceiling.
    pub strategy: StrategyConfig,
    /// Prompt context values (optional).
    pub prompt: Option<PromptConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads `.env` first (if present), then the YAML file, then applies
    /// `STRATEGY_PROFILE` and `SYSTEM_MAX_LEVERAGE` overrides.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with(path, |key: &str| env::var(key).ok())
    }

    /// Like [`Config::load`], with override values resolved through `lookup`.
    ///
    /// `lookup` receives [`PROFILE_ENV`] and [`MAX_LEVERAGE_ENV`] and is
    /// consulted after the file is parsed and before validation.
    pub fn load_with<F>(path: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides resolved through `lookup`. Blank values are ignored.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(profile) = lookup(PROFILE_ENV).filter(|v| !v.trim().is_empty()) {
            info!(profile = %profile, "Strategy profile overridden");
            self.strategy.profile = profile;
        }

        if let Some(raw) = lookup(MAX_LEVERAGE_ENV).filter(|v| !v.trim().is_empty()) {
            let leverage = raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Validation(format!(
                    "system max leverage override ({}) must be a positive integer, got {:?}",
                    MAX_LEVERAGE_ENV, raw
                ))
            })?;
            info!(leverage, "System max leverage overridden");
            self.strategy.system_max_leverage = leverage;
        }

        Ok(())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.strategy.system_max_leverage == 0 {
            return Err(ConfigError::Validation(
                "strategy.system_max_leverage must be positive".into(),
            ));
        }

        self.profile_id()?;

        if let Some(ref prompt) = self.prompt {
            if prompt.max_positions == Some(0) {
                return Err(ConfigError::Validation(
                    "prompt.max_positions must be positive".into(),
                ));
            }
        }

        // Outside development the rendered monitor cadence must be the real one.
        if self.app.is_production() {
            let monitor_interval_set = self
                .prompt
                .as_ref()
                .is_some_and(|prompt| !prompt.monitor_interval.is_zero());
            if !monitor_interval_set {
                return Err(ConfigError::Validation(format!(
                    "prompt.monitor_interval is required when app.env is not {:?}",
                    DEVELOPMENT_ENV
                )));
            }
        }

        Ok(())
    }

    /// The configured profile identifier.
    pub fn profile_id(&self) -> Result<ProfileId, ConfigError> {
        Ok(self.strategy.profile.parse()?)
    }

    /// Derive the parameter record of the configured profile.
    pub fn derive(&self) -> Result<StrategyParams, ConfigError> {
        let profile = self.profile_id()?.profile();
        Ok(profile.derive(self.strategy.system_max_leverage)?)
    }

    /// Prompt context built from the configured values.
    ///
    /// Runtime values such as the current time and open position count are
    /// left for the caller to fill in.
    pub fn prompt_context(&self) -> StrategyPromptContext {
        let mut context =
            StrategyPromptContext::new().with_system_max_leverage(self.strategy.system_max_leverage);

        if let Some(ref prompt) = self.prompt {
            if !prompt.cycle_interval.is_zero() {
                context = context.with_cycle_interval(prompt.cycle_interval);
            }
            if !prompt.monitor_interval.is_zero() {
                context = context.with_monitor_interval(prompt.monitor_interval);
            }
            context.max_positions = prompt.max_positions;
        }

        context
    }
}

#[cfg(test)]
mod tests;
