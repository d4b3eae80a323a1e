//! Scoring Engine: type advantage chart and deterministic power

pub mod advantage;
pub mod power;

pub use advantage::{TypeAdvantageTable, NEUTRAL_MULTIPLIER};
pub use power::{duel, power, DuelOutcome};
