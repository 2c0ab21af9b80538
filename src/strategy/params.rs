//! Derived strategy parameter record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal strength tier used to pick leverage and position size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    Normal,
    Good,
    Strong,
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStrength::Normal => write!(f, "normal"),
            SignalStrength::Good => write!(f, "good"),
            SignalStrength::Strong => write!(f, "strong"),
        }
    }
}

/// One value per signal strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierMap<T> {
    pub normal: T,
    pub good: T,
    pub strong: T,
}

impl<T> TierMap<T> {
    pub fn get(&self, tier: SignalStrength) -> &T {
        match tier {
            SignalStrength::Normal => &self.normal,
            SignalStrength::Good => &self.good,
            SignalStrength::Strong => &self.strong,
        }
    }
}

/// Leverage bucket a position falls into within `[leverage_min, leverage_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageBucket {
    Low,
    Mid,
    High,
}

/// Stop-loss threshold per leverage bucket, as negative unrealized PnL percent.
///
/// Ordering across buckets is a property of the profile: risk-averse profiles
/// tighten the stop as leverage rises, aggressive ones widen it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopLoss {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl StopLoss {
    pub fn for_bucket(&self, bucket: LeverageBucket) -> f64 {
        match bucket {
            LeverageBucket::Low => self.low,
            LeverageBucket::Mid => self.mid,
            LeverageBucket::High => self.high,
        }
    }
}

/// Once unrealized profit reaches `trigger`, the stop floor rises to `stop_at`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingStopLevel {
    pub trigger: f64,
    pub stop_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingStop {
    pub level1: TrailingStopLevel,
    pub level2: TrailingStopLevel,
    pub level3: TrailingStopLevel,
}

impl TrailingStop {
    pub fn levels(&self) -> [TrailingStopLevel; 3] {
        [self.level1, self.level2, self.level3]
    }
}

/// Close `close_percent` of the remaining position once profit reaches `trigger`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitStage {
    pub trigger: f64,
    pub close_percent: f64,
}

/// Three take-profit stages. Stage 3 always closes whatever remains (100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialTakeProfit {
    pub stage1: TakeProfitStage,
    pub stage2: TakeProfitStage,
    pub stage3: TakeProfitStage,
}

impl PartialTakeProfit {
    pub fn stages(&self) -> [TakeProfitStage; 3] {
        [self.stage1, self.stage2, self.stage3]
    }
}

/// Market volatility regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityRegime {
    High,
    Normal,
    Low,
}

/// Multipliers applied to the chosen leverage and position size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityFactors {
    pub leverage_factor: f64,
    pub position_factor: f64,
}

impl VolatilityFactors {
    pub const IDENTITY: VolatilityFactors = VolatilityFactors {
        leverage_factor: 1.0,
        position_factor: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityAdjustment {
    pub high_volatility: VolatilityFactors,
    pub normal_volatility: VolatilityFactors,
    pub low_volatility: VolatilityFactors,
}

impl VolatilityAdjustment {
    pub fn factors(&self, regime: VolatilityRegime) -> VolatilityFactors {
        match regime {
            VolatilityRegime::High => self.high_volatility,
            VolatilityRegime::Normal => self.normal_volatility,
            VolatilityRegime::Low => self.low_volatility,
        }
    }
}

/// Close a position that is still in profit after being held this long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeExit {
    pub after_minutes: u32,
    pub min_profit_percent: f64,
}

/// Entry rules for trending and range-bound markets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRules {
    pub trending: String,
    pub ranging: String,
}

/// Upper bounds (inclusive) of the low and mid leverage buckets.
///
/// Leverage above `mid_max` falls into the high bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverageBuckets {
    pub min: u32,
    pub low_max: u32,
    pub mid_max: u32,
    pub max: u32,
}

impl LeverageBuckets {
    /// Splits `[min, max]` at the 33% and 67% points, rounding up.
    pub fn split(min: u32, max: u32) -> Self {
        let span = max.saturating_sub(min);
        Self {
            min,
            low_max: min + ceil_percent(span, 33),
            mid_max: min + ceil_percent(span, 67),
            max,
        }
    }

    /// Non-empty `(bucket, from, to)` leverage ranges, both ends inclusive.
    pub fn ranges(&self) -> Vec<(LeverageBucket, u32, u32)> {
        let mut ranges = vec![(LeverageBucket::Low, self.min, self.low_max)];
        if self.mid_max > self.low_max {
            ranges.push((LeverageBucket::Mid, self.low_max + 1, self.mid_max));
        }
        if self.max > self.mid_max {
            ranges.push((LeverageBucket::High, self.mid_max + 1, self.max));
        }
        ranges
    }

    pub fn bucket_for(&self, leverage: u32) -> LeverageBucket {
        if leverage <= self.low_max {
            LeverageBucket::Low
        } else if leverage <= self.mid_max {
            LeverageBucket::Mid
        } else {
            LeverageBucket::High
        }
    }
}

const FACTOR_EPSILON: f64 = 1e-9;

/// `ceil(value * percent / 100)` in integer arithmetic.
pub(crate) fn ceil_percent(value: u32, percent: u32) -> u32 {
    let scaled = (u64::from(value) * u64::from(percent)).div_ceil(100);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Complete risk configuration for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyParams {
    pub name: String,
    pub description: String,

    pub leverage_min: u32,
    pub leverage_max: u32,
    pub leverage_recommend: TierMap<u32>,

    /// Percent of tradable capital.
    pub position_size_min: u32,
    pub position_size_max: u32,
    pub position_size_recommend: TierMap<String>,

    pub stop_loss: StopLoss,
    pub trailing_stop: TrailingStop,
    pub partial_take_profit: PartialTakeProfit,
    /// Percentage points of retrace from peak unrealized profit.
    pub peak_drawdown_protection: f64,
    pub volatility_adjustment: VolatilityAdjustment,
    pub time_exit: Option<TimeExit>,

    pub entry_condition: String,
    pub entry_rules: EntryRules,
    pub risk_tolerance: String,
    pub trading_style: String,

    /// When true the position monitor enforces stop-loss, trailing stop and
    /// partial take-profit; otherwise the AI agent decides.
    pub enable_code_level_protection: bool,
}

impl StrategyParams {
    pub fn leverage_buckets(&self) -> LeverageBuckets {
        LeverageBuckets::split(self.leverage_min, self.leverage_max)
    }

    /// Stop-loss threshold for a position opened at `leverage`.
    pub fn stop_loss_for_leverage(&self, leverage: u32) -> f64 {
        self.stop_loss
            .for_bucket(self.leverage_buckets().bucket_for(leverage))
    }

    /// Applies the regime's factors to a chosen leverage and position size.
    ///
    /// Leverage is rounded up and kept within `[1, leverage_max]`; position
    /// size is capped at `position_size_max`.
    pub fn adjust_for_volatility(
        &self,
        regime: VolatilityRegime,
        leverage: u32,
        position_percent: f64,
    ) -> (u32, f64) {
        let factors = self.volatility_adjustment.factors(regime);

        // Absorb float noise such as 10 * 1.1 = 11.000000000000002 before rounding up.
        let scaled = (f64::from(leverage) * factors.leverage_factor - FACTOR_EPSILON).ceil();
        let leverage = if scaled.is_finite() && scaled >= 1.0 {
            (scaled as u32).min(self.leverage_max)
        } else {
            1
        };

        let position = (position_percent * factors.position_factor)
            .min(f64::from(self.position_size_max))
            .max(0.0);

        (leverage, position)
    }
}
