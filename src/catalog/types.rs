//! Creature records as returned by the catalog

use crate::core::types::CombatantId;
use serde::{Deserialize, Serialize};

/// A single base stat line on a creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base_value: u32,
}

/// A creature drawn from the catalog
///
/// Immutable once fetched; a round owns its two combatants exclusively.
/// The `types` sequence is non-empty (the catalog adapters reject rows
/// without a type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub stats: Vec<StatEntry>,
    pub types: Vec<String>,
}

impl Combatant {
    /// Sum of all base stat values
    pub fn base_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_value).sum()
    }

    /// First declared type; the only one that participates in scoring
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Test combatant: fire type, 300 stat total
    pub fn test_fire() -> Self {
        Self {
            id: CombatantId(4),
            name: "cinderfox".into(),
            stats: vec![
                StatEntry {
                    name: "hp".into(),
                    base_value: 100,
                },
                StatEntry {
                    name: "attack".into(),
                    base_value: 120,
                },
                StatEntry {
                    name: "speed".into(),
                    base_value: 80,
                },
            ],
            types: vec!["fire".into()],
        }
    }

    /// Test combatant: grass type, 300 stat total
    pub fn test_grass() -> Self {
        Self {
            id: CombatantId(1),
            name: "mossback".into(),
            stats: vec![
                StatEntry {
                    name: "hp".into(),
                    base_value: 150,
                },
                StatEntry {
                    name: "defense".into(),
                    base_value: 150,
                },
            ],
            types: vec!["grass".into()],
        }
    }

    /// Test combatant: water type, 320 stat total
    pub fn test_water() -> Self {
        Self {
            id: CombatantId(7),
            name: "tidepup".into(),
            stats: vec![StatEntry {
                name: "hp".into(),
                base_value: 320,
            }],
            types: vec!["water".into()],
        }
    }

    /// Test combatant: normal type, 300 stat total
    pub fn test_normal() -> Self {
        Self {
            id: CombatantId(19),
            name: "fieldmouse".into(),
            stats: vec![StatEntry {
                name: "hp".into(),
                base_value: 300,
            }],
            types: vec!["normal".into()],
        }
    }
}
