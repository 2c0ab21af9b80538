//! Built-in risk profiles.

use super::ProfileId;
use super::params::{
    PartialTakeProfit, StopLoss, TakeProfitStage, TierMap, TimeExit, TrailingStop,
    TrailingStopLevel, VolatilityAdjustment, VolatilityFactors,
};
use super::profile::{LeverageCeiling, PercentRange, ScaledLeverage, StrategyProfile};

const fn scaled(percent: u32, floor: u32) -> ScaledLeverage {
    ScaledLeverage { percent, floor }
}

const fn range(min: u32, max: u32) -> PercentRange {
    PercentRange { min, max }
}

const fn trail(trigger: f64, stop_at: f64) -> TrailingStopLevel {
    TrailingStopLevel { trigger, stop_at }
}

const fn stage(trigger: f64, close_percent: f64) -> TakeProfitStage {
    TakeProfitStage {
        trigger,
        close_percent,
    }
}

const fn vol(leverage_factor: f64, position_factor: f64) -> VolatilityFactors {
    VolatilityFactors {
        leverage_factor,
        position_factor,
    }
}

pub const ULTRA_SHORT: StrategyProfile = StrategyProfile {
    id: ProfileId::UltraShort,
    name: "Ultra-short",
    description: "Minute-level scalping that takes quick profits and exits fast",
    leverage_min: scaled(50, 3),
    leverage_max: LeverageCeiling::Scaled(scaled(75, 5)),
    good_tier_percent: 50,
    position_size_min: 18,
    position_size_max: 25,
    position_size_tiers: TierMap {
        normal: range(18, 20),
        good: range(21, 23),
        strong: range(24, 25),
    },
    stop_loss: StopLoss {
        low: -2.5,
        mid: -2.0,
        high: -1.5,
    },
    trailing_stop: TrailingStop {
        level1: trail(4.0, 1.5),
        level2: trail(8.0, 4.0),
        level3: trail(15.0, 8.0),
    },
    partial_take_profit: PartialTakeProfit {
        stage1: stage(8.0, 50.0),
        stage2: stage(15.0, 50.0),
        stage3: stage(25.0, 100.0),
    },
    peak_drawdown_protection: 30.0,
    volatility_adjustment: VolatilityAdjustment {
        high_volatility: vol(0.7, 0.8),
        normal_volatility: VolatilityFactors::IDENTITY,
        low_volatility: vol(1.1, 1.0),
    },
    time_exit: Some(TimeExit {
        after_minutes: 30,
        min_profit_percent: 0.5,
    }),
    entry_condition: "Short-term momentum confirmed on the 1m and 3m charts with expanding volume",
    trending_entry: "Enter on the first pullback in the direction of the 3m trend once momentum resumes",
    ranging_entry: "Fade the range edges only when price rejects the boundary with a volume spike",
    risk_tolerance: "Low per-trade risk, tight stops, many small wins",
    trading_style: "Scalping with holding times of minutes",
    enable_code_level_protection: false,
};

pub const CONSERVATIVE: StrategyProfile = StrategyProfile {
    id: ProfileId::Conservative,
    name: "Conservative",
    description: "Capital preservation first, trades only high-certainty setups",
    leverage_min: scaled(30, 2),
    leverage_max: LeverageCeiling::Scaled(scaled(60, 3)),
    good_tier_percent: 50,
    position_size_min: 15,
    position_size_max: 22,
    position_size_tiers: TierMap {
        normal: range(15, 17),
        good: range(18, 20),
        strong: range(21, 22),
    },
    stop_loss: StopLoss {
        low: -3.5,
        mid: -3.0,
        high: -2.5,
    },
    trailing_stop: TrailingStop {
        level1: trail(6.0, 2.0),
        level2: trail(12.0, 6.0),
        level3: trail(20.0, 12.0),
    },
    partial_take_profit: PartialTakeProfit {
        stage1: stage(20.0, 50.0),
        stage2: stage(40.0, 50.0),
        stage3: stage(60.0, 100.0),
    },
    peak_drawdown_protection: 30.0,
    volatility_adjustment: VolatilityAdjustment {
        high_volatility: vol(0.6, 0.7),
        normal_volatility: VolatilityFactors::IDENTITY,
        low_volatility: vol(1.0, 1.1),
    },
    time_exit: None,
    entry_condition: "At least three independent signals agree across the 15m and 1h timeframes",
    trending_entry: "Join the 1h trend only after a retest of support or resistance holds",
    ranging_entry: "Stay flat unless the range is wide enough for the first take-profit stage",
    risk_tolerance: "Very low, a missed trade is preferred over a losing one",
    trading_style: "Selective swing entries with strict confirmation",
    enable_code_level_protection: false,
};

pub const BALANCED: StrategyProfile = StrategyProfile {
    id: ProfileId::Balanced,
    name: "Balanced",
    description: "Balances risk and return with moderate leverage",
    leverage_min: scaled(60, 2),
    leverage_max: LeverageCeiling::Scaled(scaled(85, 3)),
    good_tier_percent: 50,
    position_size_min: 20,
    position_size_max: 28,
    position_size_tiers: TierMap {
        normal: range(20, 22),
        good: range(23, 25),
        strong: range(26, 28),
    },
    stop_loss: StopLoss {
        low: -3.0,
        mid: -2.5,
        high: -2.0,
    },
    trailing_stop: TrailingStop {
        level1: trail(8.0, 3.0),
        level2: trail(15.0, 8.0),
        level3: trail(25.0, 15.0),
    },
    partial_take_profit: PartialTakeProfit {
        stage1: stage(25.0, 50.0),
        stage2: stage(45.0, 50.0),
        stage3: stage(70.0, 100.0),
    },
    peak_drawdown_protection: 35.0,
    volatility_adjustment: VolatilityAdjustment {
        high_volatility: vol(0.7, 0.8),
        normal_volatility: VolatilityFactors::IDENTITY,
        low_volatility: vol(1.2, 1.1),
    },
    time_exit: None,
    entry_condition: "Two or more signals agree on the 15m chart and the 1h trend does not oppose them",
    trending_entry: "Enter with the trend on a pullback to the moving average with rising volume",
    ranging_entry: "Trade range boundaries with half size and take profit before the opposite edge",
    risk_tolerance: "Moderate, accepts normal drawdowns for steady returns",
    trading_style: "Intraday to multi-day trend following",
    enable_code_level_protection: false,
};

pub const AGGRESSIVE: StrategyProfile = StrategyProfile {
    id: ProfileId::Aggressive,
    name: "Aggressive",
    description: "Uses the full leverage ceiling to chase strong trends",
    leverage_min: scaled(60, 1),
    leverage_max: LeverageCeiling::System,
    good_tier_percent: 60,
    position_size_min: 25,
    position_size_max: 32,
    position_size_tiers: TierMap {
        normal: range(25, 27),
        good: range(28, 30),
        strong: range(31, 32),
    },
    stop_loss: StopLoss {
        low: -2.5,
        mid: -3.0,
        high: -3.5,
    },
    trailing_stop: TrailingStop {
        level1: trail(10.0, 4.0),
        level2: trail(20.0, 10.0),
        level3: trail(35.0, 20.0),
    },
    partial_take_profit: PartialTakeProfit {
        stage1: stage(30.0, 40.0),
        stage2: stage(60.0, 50.0),
        stage3: stage(100.0, 100.0),
    },
    peak_drawdown_protection: 40.0,
    volatility_adjustment: VolatilityAdjustment {
        high_volatility: vol(0.8, 0.85),
        normal_volatility: VolatilityFactors::IDENTITY,
        low_volatility: vol(1.3, 1.2),
    },
    time_exit: None,
    entry_condition: "A clear breakout or trend continuation on the 15m chart with above-average volume",
    trending_entry: "Enter on breakouts in the trend direction without waiting for a pullback",
    ranging_entry: "Wait for a range breakout and enter on the first close outside the range",
    risk_tolerance: "High, accepts large swings in exchange for outsized gains",
    trading_style: "Momentum and breakout trading at high leverage",
    enable_code_level_protection: true,
};

pub const SWING_TREND: StrategyProfile = StrategyProfile {
    id: ProfileId::SwingTrend,
    name: "Swing-trend",
    description: "Low-leverage positions held for days to ride major trends",
    leverage_min: scaled(20, 2),
    leverage_max: LeverageCeiling::Scaled(scaled(50, 5)),
    good_tier_percent: 50,
    position_size_min: 12,
    position_size_max: 20,
    position_size_tiers: TierMap {
        normal: range(12, 14),
        good: range(15, 17),
        strong: range(18, 20),
    },
    stop_loss: StopLoss {
        low: -6.0,
        mid: -5.0,
        high: -4.0,
    },
    trailing_stop: TrailingStop {
        level1: trail(15.0, 6.0),
        level2: trail(30.0, 18.0),
        level3: trail(50.0, 32.0),
    },
    partial_take_profit: PartialTakeProfit {
        stage1: stage(40.0, 30.0),
        stage2: stage(75.0, 50.0),
        stage3: stage(120.0, 100.0),
    },
    peak_drawdown_protection: 40.0,
    volatility_adjustment: VolatilityAdjustment {
        high_volatility: vol(0.5, 0.6),
        normal_volatility: VolatilityFactors::IDENTITY,
        low_volatility: vol(1.2, 1.2),
    },
    time_exit: None,
    entry_condition: "The 4h and 1d trends agree and price closes beyond a key level",
    trending_entry: "Build the position on daily pullbacks while the 4h structure keeps higher highs or lower lows",
    ranging_entry: "Do not open swing positions inside a daily range",
    risk_tolerance: "Medium, wide stops with small size to survive noise",
    trading_style: "Multi-day trend riding with few trades",
    enable_code_level_protection: true,
};
