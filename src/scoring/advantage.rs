//! Type advantage chart
//!
//! Sparse table over (attacker type, defender type) pairs. Absent pairs
//! carry no advantage and multiply by 1.0. Static for the lifetime of
//! the process.

use std::collections::HashMap;

/// Multiplier applied when a pair is not in the chart
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Chart entries: (attacker, defender, multiplier)
const DEFAULT_CHART: [(&str, &str, f64); 8] = [
    ("fire", "grass", 2.0),
    ("fire", "water", 0.5),
    ("water", "fire", 2.0),
    ("water", "grass", 0.5),
    ("grass", "water", 2.0),
    ("grass", "fire", 0.5),
    ("electric", "water", 2.0),
    ("electric", "grass", 0.5),
];

/// Sparse mapping from type pairs to a positive multiplier
#[derive(Debug, Clone)]
pub struct TypeAdvantageTable {
    table: HashMap<(String, String), f64>,
}

impl TypeAdvantageTable {
    /// Table with no entries; every matchup is neutral
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn insert(&mut self, attacker: &str, defender: &str, multiplier: f64) {
        self.table
            .insert((attacker.into(), defender.into()), multiplier);
    }

    /// Multiplier for attacker's primary type against defender's.
    ///
    /// Pairs not in the chart are neutral.
    pub fn multiplier(&self, attacker: &str, defender: &str) -> f64 {
        self.table
            .get(&(attacker.into(), defender.into()))
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }
}

impl Default for TypeAdvantageTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (attacker, defender, multiplier) in DEFAULT_CHART {
            table.insert(attacker, defender, multiplier);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_entries() {
        let table = TypeAdvantageTable::default();
        assert_eq!(table.multiplier("fire", "grass"), 2.0);
        assert_eq!(table.multiplier("fire", "water"), 0.5);
        assert_eq!(table.multiplier("electric", "water"), 2.0);
    }

    #[test]
    fn test_absent_pairs_are_neutral() {
        let table = TypeAdvantageTable::default();
        assert_eq!(table.multiplier("normal", "fire"), NEUTRAL_MULTIPLIER);
        assert_eq!(table.multiplier("grass", "grass"), NEUTRAL_MULTIPLIER);
        assert_eq!(table.multiplier("dragon", "fairy"), NEUTRAL_MULTIPLIER);
    }

    #[test]
    fn test_chart_is_directional() {
        let table = TypeAdvantageTable::default();
        // fire beats grass, grass is weak into fire; not symmetric
        assert_eq!(table.multiplier("fire", "grass"), 2.0);
        assert_eq!(table.multiplier("grass", "fire"), 0.5);
    }

    #[test]
    fn test_multipliers_positive() {
        for (_, _, multiplier) in DEFAULT_CHART {
            assert!(multiplier > 0.0);
        }
    }
}
