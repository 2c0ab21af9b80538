//! Lookup of built-in profiles by identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::profile::StrategyProfile;
use super::profiles::{AGGRESSIVE, BALANCED, CONSERVATIVE, SWING_TREND, ULTRA_SHORT};
use super::{StrategyError, StrategyParams};

/// Identifier of a built-in risk profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileId {
    UltraShort,
    Conservative,
    Balanced,
    Aggressive,
    SwingTrend,
}

impl ProfileId {
    pub const ALL: [ProfileId; 5] = [
        ProfileId::UltraShort,
        ProfileId::Conservative,
        ProfileId::Balanced,
        ProfileId::Aggressive,
        ProfileId::SwingTrend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileId::UltraShort => "ultra-short",
            ProfileId::Conservative => "conservative",
            ProfileId::Balanced => "balanced",
            ProfileId::Aggressive => "aggressive",
            ProfileId::SwingTrend => "swing-trend",
        }
    }

    pub fn profile(&self) -> &'static StrategyProfile {
        match self {
            ProfileId::UltraShort => &PROFILES[0],
            ProfileId::Conservative => &PROFILES[1],
            ProfileId::Balanced => &PROFILES[2],
            ProfileId::Aggressive => &PROFILES[3],
            ProfileId::SwingTrend => &PROFILES[4],
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ProfileId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| StrategyError::UnknownProfile(s.to_string()))
    }
}

/// Built-in profiles, in `ProfileId::ALL` order.
static PROFILES: [StrategyProfile; 5] =
    [ULTRA_SHORT, CONSERVATIVE, BALANCED, AGGRESSIVE, SWING_TREND];

/// All built-in profiles.
pub fn profiles() -> &'static [StrategyProfile] {
    &PROFILES
}

/// Finds a profile by identifier.
pub fn lookup(profile_id: &str) -> Result<&'static StrategyProfile, StrategyError> {
    profile_id.parse::<ProfileId>().map(|id| id.profile())
}

/// Derives the parameter record of the named profile.
pub fn derive_strategy(
    profile_id: &str,
    system_max_leverage: u32,
) -> Result<StrategyParams, StrategyError> {
    lookup(profile_id)?.derive(system_max_leverage)
}
