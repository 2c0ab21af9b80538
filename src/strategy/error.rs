//! Strategy error types.

/// Strategy derivation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("unknown strategy profile: {0}")]
    UnknownProfile(String),
    #[error("system max leverage must be positive, got {0}")]
    InvalidMaxLeverage(u32),
}
