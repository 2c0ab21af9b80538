//! Command-line arguments of the `leverage-strategy` binary.
//!
//! Flags use the `--name=value` form. `--profile=` and `--max-leverage=` are
//! layered over the environment and the config file, each on its own.

use thiserror::Error;

use crate::config::{MAX_LEVERAGE_ENV, PROFILE_ENV};

pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Output format of the derived strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Instruction block for the AI agent.
    Text,
    /// Parameter record for the position monitor.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: String,
    pub profile: Option<String>,
    pub max_leverage: Option<String>,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    pub format: OutputFormat,
    pub list: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            profile: None,
            max_leverage: None,
            log_level: None,
            format: OutputFormat::Text,
            list: false,
        }
    }
}

impl CliArgs {
    /// Parses arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cli = CliArgs::default();

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--list" {
                cli.list = true;
                continue;
            }

            let Some((name, value)) = arg.strip_prefix("--").and_then(|a| a.split_once('=')) else {
                return Err(CliError::UnknownArgument(arg.to_string()));
            };

            match name {
                "config" => cli.config_path = value.to_string(),
                "profile" => cli.profile = Some(value.to_string()),
                "max-leverage" => cli.max_leverage = Some(value.to_string()),
                "log-level" => cli.log_level = Some(value.to_string()),
                "format" => cli.format = parse_format(value)?,
                _ => return Err(CliError::UnknownArgument(arg.to_string())),
            }
        }

        Ok(cli)
    }

    /// Override lookup for [`crate::config::Config::load_with`].
    ///
    /// A non-blank flag wins; otherwise the key is resolved through
    /// `fallback` (the process environment in the binary).
    pub fn override_lookup<'a, F>(&'a self, fallback: F) -> impl Fn(&str) -> Option<String> + 'a
    where
        F: Fn(&str) -> Option<String> + 'a,
    {
        move |key: &str| {
            let flag = match key {
                PROFILE_ENV => self.profile.as_ref(),
                MAX_LEVERAGE_ENV => self.max_leverage.as_ref(),
                _ => None,
            };
            flag.filter(|v| !v.trim().is_empty())
                .cloned()
                .or_else(|| fallback(key))
        }
    }
}

fn parse_format(value: &str) -> Result<OutputFormat, CliError> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}
