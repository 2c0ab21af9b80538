//! Natural-language strategy instructions for the AI decision engine.

mod context;
mod render;

pub use context::{DEFAULT_MONITOR_INTERVAL, StrategyPromptContext};
pub use render::render_instructions;
