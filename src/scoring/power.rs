//! Deterministic power scoring
//!
//! Power is a pure function of the two creatures and the advantage
//! table. No randomness: the same inputs always produce the same winner.

use crate::catalog::types::Combatant;
use crate::core::types::Side;
use crate::scoring::advantage::{TypeAdvantageTable, NEUTRAL_MULTIPLIER};

/// Result of a duel: the winning side and both computed powers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuelOutcome {
    pub winner: Side,
    pub power_a: f64,
    pub power_b: f64,
}

/// Compute a combatant's power against a specific opponent.
///
/// `base stat total * advantage(subject primary type -> opponent primary
/// type)`. Only the first declared type of each side participates;
/// additional types are ignored.
pub fn power(subject: &Combatant, opponent: &Combatant, table: &TypeAdvantageTable) -> f64 {
    let advantage = match (subject.primary_type(), opponent.primary_type()) {
        (Some(attacker), Some(defender)) => table.multiplier(attacker, defender),
        _ => NEUTRAL_MULTIPLIER,
    };
    subject.base_total() as f64 * advantage
}

/// Decide a duel between the two sides of a round.
///
/// An exact power tie goes to side A (first-drawn), never to chance.
pub fn duel(a: &Combatant, b: &Combatant, table: &TypeAdvantageTable) -> DuelOutcome {
    let power_a = power(a, b, table);
    let power_b = power(b, a, table);
    let winner = if power_b > power_a { Side::B } else { Side::A };

    DuelOutcome {
        winner,
        power_a,
        power_b,
    }
}
