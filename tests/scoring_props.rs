//! Property tests for the scoring engine and the scoreboard

use creature_arena::catalog::{Combatant, StatEntry};
use creature_arena::core::{CombatantId, Side};
use creature_arena::history::{HistoryEntry, Scoreboard, Tally};
use creature_arena::scoring::{duel, power, TypeAdvantageTable};
use proptest::prelude::*;

const TYPE_TAGS: [&str; 5] = ["normal", "fire", "water", "grass", "electric"];

fn arb_combatant(id: u32) -> impl Strategy<Value = Combatant> {
    (
        proptest::collection::vec(0u32..400, 1..6),
        proptest::sample::select(TYPE_TAGS.to_vec()),
    )
        .prop_map(move |(stats, type_tag)| Combatant {
            id: CombatantId(id),
            name: format!("c{}", id),
            stats: stats
                .into_iter()
                .enumerate()
                .map(|(i, base_value)| StatEntry {
                    name: format!("stat{}", i),
                    base_value,
                })
                .collect(),
            types: vec![type_tag.to_string()],
        })
}

proptest! {
    #[test]
    fn power_matches_its_definition(a in arb_combatant(1), b in arb_combatant(2)) {
        let table = TypeAdvantageTable::default();
        let computed = power(&a, &b, &table);
        let expected = a.base_total() as f64
            * table.multiplier(a.primary_type().unwrap(), b.primary_type().unwrap());

        prop_assert_eq!(computed, expected);
        prop_assert!(computed >= 0.0);
    }

    #[test]
    fn power_is_reproducible(a in arb_combatant(1), b in arb_combatant(2)) {
        let table = TypeAdvantageTable::default();
        prop_assert_eq!(power(&a, &b, &table), power(&a, &b, &table));
    }

    #[test]
    fn mirror_duel_falls_to_side_a(a in arb_combatant(1)) {
        // identical creature on both sides: powers tie, A wins
        let mut b = a.clone();
        b.id = CombatantId(2);

        let outcome = duel(&a, &b, &TypeAdvantageTable::default());
        prop_assert_eq!(outcome.winner, Side::A);
        prop_assert_eq!(outcome.power_a, outcome.power_b);
    }

    #[test]
    fn scoreboard_stays_bounded_and_consistent(
        outcomes in proptest::collection::vec(any::<bool>(), 0..40)
    ) {
        let mut scoreboard = Scoreboard::new(5);

        for (i, is_win) in outcomes.iter().enumerate() {
            scoreboard.record_round(
                HistoryEntry {
                    name_a: format!("a{}", i),
                    name_b: format!("b{}", i),
                    winner: format!("a{}", i),
                    timestamp: String::new(),
                },
                *is_win,
            );
            prop_assert!(scoreboard.history.len() <= 5);
        }

        let wins = outcomes.iter().filter(|w| **w).count() as u32;
        let losses = outcomes.len() as u32 - wins;
        prop_assert_eq!(scoreboard.tally, Tally { wins, losses });

        // newest entry first
        if !outcomes.is_empty() {
            let newest = format!("a{}", outcomes.len() - 1);
            prop_assert_eq!(&scoreboard.history.entries()[0].name_a, &newest);
        }
    }
}
