//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Unique catalog key for a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which slot of a round a combatant occupies.
///
/// Slot A is the first-drawn combatant and wins exact power ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Difficulty tier controlling the catalog id range for random draws
///
/// Each tier maps to an inclusive id range starting at 1. Higher tiers
/// open up more of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyTier {
    /// Largest catalog id this tier draws from
    pub fn max_id(self) -> u32 {
        match self {
            DifficultyTier::Easy => 151,
            DifficultyTier::Normal => 251,
            DifficultyTier::Hard => 898,
        }
    }

    /// Inclusive id range for random draws at this tier
    pub fn range(self) -> RangeInclusive<u32> {
        1..=self.max_id()
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Normal => "normal",
            DifficultyTier::Hard => "hard",
        }
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "normal" => Ok(DifficultyTier::Normal),
            "hard" => Ok(DifficultyTier::Hard),
            other => Err(format!("unknown difficulty tier: {}", other)),
        }
    }
}
