//! Risk profile derivation for a leveraged trading agent.
//!
//! `strategy` turns a system max leverage and a profile identifier into a
//! `StrategyParams` record for the position monitor; `prompt` renders that
//! record into instructions for the AI decision engine.

pub mod cli;
pub mod config;
pub mod prompt;
pub mod strategy;

pub use prompt::{StrategyPromptContext, render_instructions};
pub use strategy::{ProfileId, StrategyError, StrategyParams, derive_strategy};
