//! Runtime context interpolated into strategy instructions.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default polling interval of the position monitor.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(10);

/// Caller-supplied execution context. Every field is optional; absent fields
/// drop their line from the rendered text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyPromptContext {
    /// Wall-clock time of the decision cycle.
    pub current_time: Option<DateTime<Utc>>,
    /// How often the AI agent is invoked.
    pub cycle_interval: Option<Duration>,
    /// How often the position monitor polls (defaults to 10s).
    pub monitor_interval: Option<Duration>,
    pub open_positions: Option<usize>,
    pub max_positions: Option<usize>,
    pub system_max_leverage: Option<u32>,
}

impl StrategyPromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current_time(mut self, time: DateTime<Utc>) -> Self {
        self.current_time = Some(time);
        self
    }

    pub fn with_cycle_interval(mut self, interval: Duration) -> Self {
        self.cycle_interval = Some(interval);
        self
    }

    pub fn with_monitor_interval(mut self, interval: Duration) -> Self {
        self.monitor_interval = Some(interval);
        self
    }

    pub fn with_positions(mut self, open: usize, max: usize) -> Self {
        self.open_positions = Some(open);
        self.max_positions = Some(max);
        self
    }

    pub fn with_system_max_leverage(mut self, leverage: u32) -> Self {
        self.system_max_leverage = Some(leverage);
        self
    }

    pub fn monitor_interval(&self) -> Duration {
        self.monitor_interval
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_MONITOR_INTERVAL)
    }
}
