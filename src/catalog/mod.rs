//! Creature Data Provider boundary
//!
//! The remote catalog is an external collaborator; everything behind the
//! [`CreatureProvider`] trait is replaceable.

pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpCatalog;
pub use provider::{CreatureProvider, FixtureCatalog, ScriptedCatalog, StubCatalog};
pub use types::{Combatant, StatEntry};
