//! Renders strategy parameters into instructions for the AI agent.

use std::time::Duration;

use tracing::debug;

use super::StrategyPromptContext;
use crate::strategy::{StopLoss, StrategyParams, VolatilityFactors};

/// Name of the close action the AI agent can call.
const CLOSE_ACTION: &str = "close_position";

/// Renders the instruction block for `params`.
///
/// Every number in the output is taken from `params` or `context`.
pub fn render_instructions(params: &StrategyParams, context: &StrategyPromptContext) -> String {
    let sections = [
        format_header(params, context),
        format_target(params),
        format_entry(params),
        format_sizing(params),
        format_protection(params, context),
    ];

    debug!(
        strategy = %params.name,
        code_level_protection = params.enable_code_level_protection,
        "Rendered strategy instructions"
    );

    sections.join("\n\n")
}

fn format_header(params: &StrategyParams, context: &StrategyPromptContext) -> String {
    let mut lines = vec![
        format!("=== Trading strategy: {} ===", params.name),
        params.description.clone(),
        format!("Style: {}", params.trading_style),
        format!("Risk tolerance: {}", params.risk_tolerance),
    ];

    if let Some(time) = context.current_time {
        lines.push(format!("Current time: {}", time.format("%Y-%m-%d %H:%M UTC")));
    }
    if let Some(interval) = context.cycle_interval {
        lines.push(format!("Decision cycle: every {}", format_duration(interval)));
    }
    match (context.open_positions, context.max_positions) {
        (Some(open), Some(max)) => lines.push(format!("Open positions: {}/{}", open, max)),
        (Some(open), None) => lines.push(format!("Open positions: {}", open)),
        (None, Some(max)) => lines.push(format!("Max positions: {}", max)),
        (None, None) => {}
    }
    if let Some(leverage) = context.system_max_leverage {
        lines.push(format!("System max leverage: {}x", leverage));
    }

    lines.join("\n")
}

fn format_target(params: &StrategyParams) -> String {
    let tp = &params.partial_take_profit;
    format!(
        "Target:\n\
         - Lock in the first take-profit stage at {} unrealized profit\n\
         - Let winners run towards {} before closing the rest\n\
         - Never give back more than {} points from peak profit",
        format_signed(tp.stage1.trigger),
        format_signed(tp.stage3.trigger),
        format_number(params.peak_drawdown_protection),
    )
}

fn format_entry(params: &StrategyParams) -> String {
    format!(
        "Entry conditions:\n\
         - General: {}\n\
         - Trending market: {}\n\
         - Range-bound market: {}",
        params.entry_condition, params.entry_rules.trending, params.entry_rules.ranging,
    )
}

fn format_sizing(params: &StrategyParams) -> String {
    let lev = &params.leverage_recommend;
    let pos = &params.position_size_recommend;
    let vol = &params.volatility_adjustment;

    format!(
        "Leverage and position size:\n\
         - Leverage range: {}x-{}x\n\
         - Position size: {}-{}% of available capital\n\
         - Normal signal: {}x, {} of capital\n\
         - Good signal: {}x, {} of capital\n\
         - Strong signal: {}x, {} of capital\n\
         - High volatility: {}\n\
         - Low volatility: {}",
        params.leverage_min,
        params.leverage_max,
        params.position_size_min,
        params.position_size_max,
        lev.normal,
        pos.normal,
        lev.good,
        pos.good,
        lev.strong,
        pos.strong,
        format_factors(vol.high_volatility),
        format_factors(vol.low_volatility),
    )
}

fn format_protection(params: &StrategyParams, context: &StrategyPromptContext) -> String {
    if params.enable_code_level_protection {
        format_automated_protection(params, context)
    } else {
        format_advisory_protection(params)
    }
}

fn format_automated_protection(params: &StrategyParams, context: &StrategyPromptContext) -> String {
    let mut lines = vec![
        format!(
            "Risk protection (automated, the position monitor checks every {}):",
            format_duration(context.monitor_interval())
        ),
        "Stop-loss by leverage:".to_string(),
    ];

    for (bucket, from, to) in params.leverage_buckets().ranges() {
        lines.push(format!(
            "- {}: close at {}",
            format_leverage_range(from, to),
            format_signed(params.stop_loss.for_bucket(bucket))
        ));
    }

    lines.push("Trailing stop:".to_string());
    for level in params.trailing_stop.levels() {
        lines.push(format!(
            "- Profit reaches {}: stop moves to {}",
            format_signed(level.trigger),
            format_signed(level.stop_at)
        ));
    }

    lines.push("Partial take-profit:".to_string());
    lines.extend(format_take_profit_stages(params));
    lines.push(format!(
        "Peak drawdown: close when profit retraces {} points from its peak",
        format_number(params.peak_drawdown_protection)
    ));

    lines.push(format!(
        "The position monitor is the only party that closes positions on these thresholds. \
         You must NOT call {} for stop-loss, trailing stop, take-profit or drawdown reasons. \
         Focus on finding entries.",
        CLOSE_ACTION
    ));

    lines.join("\n")
}

fn format_advisory_protection(params: &StrategyParams) -> String {
    let mut lines = vec![
        "Risk protection (advisory, no automated monitor):".to_string(),
        format!(
            "You are solely responsible for closing positions. Check the unrealized PnL of \
             every open position each cycle and call {} yourself when needed.",
            CLOSE_ACTION
        ),
        format!(
            "- Close when profit retraces {} points from its peak",
            format_number(params.peak_drawdown_protection)
        ),
    ];

    if let Some(exit) = params.time_exit {
        lines.push(format!(
            "- Close a position held longer than {} minutes if it is still at least {} in profit",
            exit.after_minutes,
            format_signed(exit.min_profit_percent)
        ));
    }

    lines.push("Take profit in stages:".to_string());
    lines.extend(format_take_profit_stages(params));
    lines.push(format_loss_guidance(&params.stop_loss));

    lines.join("\n")
}

fn format_take_profit_stages(params: &StrategyParams) -> Vec<String> {
    let stages = params.partial_take_profit.stages();
    let last = stages.len() - 1;
    stages
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            if i == last {
                format!(
                    "- At {}: close the remaining position",
                    format_signed(stage.trigger)
                )
            } else {
                format!(
                    "- At {}: close {}% of the remaining position",
                    format_signed(stage.trigger),
                    format_number(stage.close_percent)
                )
            }
        })
        .collect()
}

/// Loss-cutting advice that follows the stop-loss ordering across buckets.
fn format_loss_guidance(stop_loss: &StopLoss) -> String {
    // Thresholds are negative: a larger value is a tighter stop.
    let tightens = stop_loss.low <= stop_loss.mid && stop_loss.mid <= stop_loss.high;
    let widens = stop_loss.low >= stop_loss.mid && stop_loss.mid >= stop_loss.high;

    if tightens && widens {
        "Cut losing positions early, whatever the leverage.".to_string()
    } else if tightens {
        "Cut losing positions early; the higher the leverage, the sooner.".to_string()
    } else if widens {
        "Cut losing positions early; higher leverage positions get more room.".to_string()
    } else {
        "Cut losing positions early.".to_string()
    }
}

// === Helpers ===

fn format_leverage_range(from: u32, to: u32) -> String {
    if from == to {
        format!("{}x", from)
    } else {
        format!("{}x-{}x", from, to)
    }
}

fn format_factors(factors: VolatilityFactors) -> String {
    format!(
        "leverage x{}, position x{}",
        format_number(factors.leverage_factor),
        format_number(factors.position_factor)
    )
}

/// Signed percent, e.g. "+4%" or "-2.5%".
fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}%", format_number(value))
    } else {
        format!("{}%", format_number(value))
    }
}

/// Shortest decimal form: 30.0 -> "30", 2.5 -> "2.5".
fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 && d.subsec_millis() != 0 {
        if secs == 0 {
            format!("{}ms", d.subsec_millis())
        } else {
            format!("{}s", d.as_millis() as f64 / 1000.0)
        }
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        if secs % 60 == 0 {
            format!("{}m", secs / 60)
        } else {
            format!("{}m {}s", secs / 60, secs % 60)
        }
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
