//! A single draw-bet-resolve round

use crate::catalog::types::Combatant;
use crate::core::types::Side;
use chrono::{DateTime, Local};

/// Two drawn combatants plus the wager and outcome recorded against them.
///
/// Created by the matchmaker, mutated only by the state machine, and
/// discarded wholesale on the next draw or a reset.
#[derive(Debug, Clone)]
pub struct Round {
    pub combatant_a: Combatant,
    pub combatant_b: Combatant,
    pub bet_on: Option<Side>,
    pub winner: Option<Side>,
    pub resolved_at: Option<DateTime<Local>>,
}

impl Round {
    pub fn new(combatant_a: Combatant, combatant_b: Combatant) -> Self {
        Self {
            combatant_a,
            combatant_b,
            bet_on: None,
            winner: None,
            resolved_at: None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::A => &self.combatant_a,
            Side::B => &self.combatant_b,
        }
    }

    pub fn bet_combatant(&self) -> Option<&Combatant> {
        self.bet_on.map(|side| self.combatant(side))
    }

    pub fn winner_combatant(&self) -> Option<&Combatant> {
        self.winner.map(|side| self.combatant(side))
    }
}

/// Outcome summary handed to the frontend after a resolution fires
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub winner: Side,
    pub winner_name: String,
    pub is_win: bool,
    pub power_a: f64,
    pub power_b: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_has_no_bet_or_winner() {
        let round = Round::new(Combatant::test_fire(), Combatant::test_grass());
        assert!(round.bet_on.is_none());
        assert!(round.winner.is_none());
        assert!(round.resolved_at.is_none());
    }

    #[test]
    fn test_side_accessors() {
        let mut round = Round::new(Combatant::test_fire(), Combatant::test_grass());
        assert_eq!(round.combatant(Side::A).name, "cinderfox");
        assert_eq!(round.combatant(Side::B).name, "mossback");

        round.bet_on = Some(Side::B);
        round.winner = Some(Side::A);
        assert_eq!(round.bet_combatant().unwrap().name, "mossback");
        assert_eq!(round.winner_combatant().unwrap().name, "cinderfox");
    }
}
