//! Shared schema for risk profiles and the derivation routine.

use tracing::debug;

use super::params::{
    EntryRules, PartialTakeProfit, StopLoss, StrategyParams, TierMap, TimeExit, TrailingStop,
    VolatilityAdjustment, ceil_percent,
};
use super::{ProfileId, StrategyError};

/// A leverage bound scaled from the system maximum, never below `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledLeverage {
    /// Fraction of the system max leverage, in percent.
    pub percent: u32,
    pub floor: u32,
}

impl ScaledLeverage {
    pub fn resolve(&self, system_max_leverage: u32) -> u32 {
        ceil_percent(system_max_leverage, self.percent).max(self.floor)
    }
}

/// Upper leverage bound of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeverageCeiling {
    Scaled(ScaledLeverage),
    /// Use the system max leverage as is.
    System,
}

impl LeverageCeiling {
    pub fn resolve(&self, system_max_leverage: u32) -> u32 {
        match self {
            LeverageCeiling::Scaled(scaled) => scaled.resolve(system_max_leverage),
            LeverageCeiling::System => system_max_leverage,
        }
    }

    pub fn floor(&self) -> u32 {
        match self {
            LeverageCeiling::Scaled(scaled) => scaled.floor,
            LeverageCeiling::System => 1,
        }
    }
}

/// Position size range in percent of tradable capital, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentRange {
    pub min: u32,
    pub max: u32,
}

impl PercentRange {
    fn label(&self) -> String {
        format!("{}-{}%", self.min, self.max)
    }
}

/// Static description of a risk profile.
///
/// Only the leverage bounds depend on the system max leverage; every other
/// table is copied into the derived record as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyProfile {
    pub id: ProfileId,
    pub name: &'static str,
    pub description: &'static str,

    pub leverage_min: ScaledLeverage,
    pub leverage_max: LeverageCeiling,
    /// Where the `good` tier sits between min and max leverage, in percent.
    pub good_tier_percent: u32,

    pub position_size_min: u32,
    pub position_size_max: u32,
    pub position_size_tiers: TierMap<PercentRange>,

    pub stop_loss: StopLoss,
    pub trailing_stop: TrailingStop,
    pub partial_take_profit: PartialTakeProfit,
    pub peak_drawdown_protection: f64,
    pub volatility_adjustment: VolatilityAdjustment,
    pub time_exit: Option<TimeExit>,

    pub entry_condition: &'static str,
    pub trending_entry: &'static str,
    pub ranging_entry: &'static str,
    pub risk_tolerance: &'static str,
    pub trading_style: &'static str,

    pub enable_code_level_protection: bool,
}

impl StrategyProfile {
    /// Derives the parameter record for the given system max leverage.
    pub fn derive(&self, system_max_leverage: u32) -> Result<StrategyParams, StrategyError> {
        if system_max_leverage == 0 {
            return Err(StrategyError::InvalidMaxLeverage(system_max_leverage));
        }

        let leverage_min = self.leverage_min.resolve(system_max_leverage);
        let leverage_max = self.leverage_max.resolve(system_max_leverage);
        let good = leverage_min
            + ceil_percent(
                leverage_max.saturating_sub(leverage_min),
                self.good_tier_percent,
            );

        debug!(
            profile = %self.id,
            system_max_leverage,
            leverage_min,
            leverage_max,
            code_level_protection = self.enable_code_level_protection,
            "Derived strategy parameters"
        );

        Ok(StrategyParams {
            name: self.name.to_string(),
            description: self.description.to_string(),
            leverage_min,
            leverage_max,
            leverage_recommend: TierMap {
                normal: leverage_min,
                good,
                strong: leverage_max,
            },
            position_size_min: self.position_size_min,
            position_size_max: self.position_size_max,
            position_size_recommend: TierMap {
                normal: self.position_size_tiers.normal.label(),
                good: self.position_size_tiers.good.label(),
                strong: self.position_size_tiers.strong.label(),
            },
            stop_loss: self.stop_loss,
            trailing_stop: self.trailing_stop,
            partial_take_profit: self.partial_take_profit,
            peak_drawdown_protection: self.peak_drawdown_protection,
            volatility_adjustment: self.volatility_adjustment,
            time_exit: self.time_exit,
            entry_condition: self.entry_condition.to_string(),
            entry_rules: EntryRules {
                trending: self.trending_entry.to_string(),
                ranging: self.ranging_entry.to_string(),
            },
            risk_tolerance: self.risk_tolerance.to_string(),
            trading_style: self.trading_style.to_string(),
            enable_code_level_protection: self.enable_code_level_protection,
        })
    }
}
