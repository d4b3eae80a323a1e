//! Asynchronous abstraction for sourcing creatures
//!
//! The engine only ever talks to a [`CreatureProvider`], so it can run
//! against the live catalog, a synthetic one, or scripted fixtures.

use crate::catalog::types::{Combatant, StatEntry};
use crate::core::error::{ArenaError, Result};
use crate::core::types::CombatantId;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Trait for fetching a single creature by catalog id.
#[async_trait]
pub trait CreatureProvider: Send + Sync {
    /// Fetch the creature stored under `id`.
    ///
    /// # Returns
    /// The creature record, or [`ArenaError::CatalogFetch`] on a
    /// network or lookup failure.
    async fn fetch_by_id(&self, id: CombatantId) -> Result<Combatant>;
}

/// In-memory provider backed by an explicit set of creatures.
pub struct FixtureCatalog {
    creatures: HashMap<CombatantId, Combatant>,
}

impl FixtureCatalog {
    pub fn new(creatures: impl IntoIterator<Item = Combatant>) -> Self {
        Self {
            creatures: creatures.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

#[async_trait]
impl CreatureProvider for FixtureCatalog {
    async fn fetch_by_id(&self, id: CombatantId) -> Result<Combatant> {
        self.creatures
            .get(&id)
            .cloned()
            .ok_or_else(|| ArenaError::CatalogFetch(format!("no creature with id {}", id)))
    }
}

/// Synthetic provider that derives a creature from any id.
///
/// Deterministic: the same id always yields the same creature. Backs the
/// binary's offline mode and range sweeps in tests.
pub struct StubCatalog;

const STUB_TYPES: [&str; 5] = ["normal", "fire", "water", "grass", "electric"];

impl StubCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CreatureProvider for StubCatalog {
    async fn fetch_by_id(&self, id: CombatantId) -> Result<Combatant> {
        let type_tag = STUB_TYPES[(id.0 % STUB_TYPES.len() as u32) as usize];
        Ok(Combatant {
            id,
            name: format!("creature-{}", id.0),
            stats: vec![
                StatEntry {
                    name: "hp".into(),
                    base_value: 100 + id.0 % 155,
                },
                StatEntry {
                    name: "attack".into(),
                    base_value: 50 + id.0 % 120,
                },
            ],
            types: vec![type_tag.into()],
        })
    }
}

/// Provider that serves a scripted sequence of creatures in fetch order,
/// regardless of the requested id.
///
/// Once the script is exhausted every fetch fails, which doubles as the
/// fetch-failure fixture: `ScriptedCatalog::new([])` always errors.
pub struct ScriptedCatalog {
    script: Mutex<VecDeque<Combatant>>,
}

impl ScriptedCatalog {
    pub fn new(script: impl IntoIterator<Item = Combatant>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }
}

#[async_trait]
impl CreatureProvider for ScriptedCatalog {
    async fn fetch_by_id(&self, _id: CombatantId) -> Result<Combatant> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| ArenaError::CatalogFetch("script lock poisoned".into()))?;
        script
            .pop_front()
            .ok_or_else(|| ArenaError::CatalogFetch("script exhausted".into()))
    }
}
