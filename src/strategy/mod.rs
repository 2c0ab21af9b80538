//! Risk profile derivation.
//!
//! Every profile is a `StrategyProfile` record; `StrategyProfile::derive`
//! scales its leverage bounds from the system max leverage and copies the
//! profile's constant tables into a fresh `StrategyParams`.

mod error;
mod params;
mod profile;
mod profiles;
mod registry;

pub use error::StrategyError;
pub use params::{
    EntryRules, LeverageBucket, LeverageBuckets, PartialTakeProfit, SignalStrength, StopLoss,
    StrategyParams, TakeProfitStage, TierMap, TimeExit, TrailingStop, TrailingStopLevel,
    VolatilityAdjustment, VolatilityFactors, VolatilityRegime,
};
pub use profile::{LeverageCeiling, PercentRange, ScaledLeverage, StrategyProfile};
pub use registry::{ProfileId, derive_strategy, lookup, profiles};
