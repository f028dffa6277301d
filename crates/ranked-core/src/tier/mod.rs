//! Tier labels and the static tier multiplier table.

mod multipliers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use multipliers::{multiplier_for_label, TIER_TABLE};

/// A named skill bracket, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Unranked,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Champion,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 9] = [
        Tier::Unranked,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Champion,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unranked => "Unranked",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
            Self::Champion => "Champion",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace.
    /// Returns `None` for labels outside the tier table.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(label))
    }

    /// XP multiplier for this tier.
    pub fn multiplier(self) -> f64 {
        multipliers::multiplier(self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not a known tier label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier label: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownTier(s.to_string()))
    }
}
