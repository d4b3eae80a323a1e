//! HTTP client for the remote creature catalog
//!
//! Thin adapter over the catalog's REST API. The engine only sees
//! [`CreatureProvider`]; this module owns the wire format.

use crate::catalog::provider::CreatureProvider;
use crate::catalog::types::{Combatant, StatEntry};
use crate::core::config::DEFAULT_CATALOG_URL;
use crate::core::error::{ArenaError, Result};
use crate::core::types::CombatantId;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Async client for the remote creature catalog
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client against an explicit base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl CreatureProvider for HttpCatalog {
    async fn fetch_by_id(&self, id: CombatantId) -> Result<Combatant> {
        let url = format!("{}/pokemon/{}", self.base_url, id.0);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ArenaError::CatalogFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ArenaError::CatalogFetch(format!(
                "catalog returned {} for id {}",
                response.status(),
                id
            )));
        }

        let row: CreatureRow = response
            .json()
            .await
            .map_err(|e| ArenaError::CatalogFetch(e.to_string()))?;

        row.into_combatant()
    }
}

// Catalog wire format (the subset we consume)

#[derive(Deserialize)]
struct CreatureRow {
    id: u32,
    name: String,
    stats: Vec<StatRow>,
    types: Vec<TypeRow>,
}

#[derive(Deserialize)]
struct StatRow {
    base_stat: u32,
    stat: NamedRef,
}

#[derive(Deserialize)]
struct TypeRow {
    #[serde(rename = "type")]
    type_ref: NamedRef,
}

#[derive(Deserialize)]
struct NamedRef {
    name: String,
}

impl CreatureRow {
    fn into_combatant(self) -> Result<Combatant> {
        if self.types.is_empty() {
            return Err(ArenaError::CatalogFetch(format!(
                "catalog row {} has no types",
                self.id
            )));
        }

        Ok(Combatant {
            id: CombatantId(self.id),
            name: self.name,
            stats: self
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
            types: self.types.into_iter().map(|t| t.type_ref.name).collect(),
        })
    }
}
