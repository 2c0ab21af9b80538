//! Prompt context settings.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Values interpolated into the AI instruction block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// How often the AI agent runs a decision cycle (e.g. "5m").
    #[serde(default, with = "duration")]
    pub cycle_interval: Duration,
    /// Position monitor polling interval (default: 10s).
    #[serde(default, with = "duration")]
    pub monitor_interval: Duration,
    /// Maximum number of concurrently open positions.
    pub max_positions: Option<usize>,
}
