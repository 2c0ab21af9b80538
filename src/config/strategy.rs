//! Strategy selection.

use serde::Deserialize;

/// Which risk profile to run and the leverage ceiling it scales from.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyConfig {
    /// Profile identifier, e.g. "balanced" or "swing-trend".
    pub profile: String,
    /// System-wide maximum leverage allowed by the deployment.
    pub system_max_leverage: u32,
}
