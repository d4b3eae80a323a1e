//! Round matchmaking: sample two catalog ids and fetch both creatures
//!
//! The two ids are drawn independently and uniformly from the tier's
//! range, with replacement. A mirror match (the same id twice) is a
//! legal round. No affinity or exclusion logic pairs the combatants.

use crate::arena::round::Round;
use crate::catalog::provider::CreatureProvider;
use crate::core::error::Result;
use crate::core::types::{CombatantId, DifficultyTier};
use rand::Rng;

/// Draw a round: two uniform id samples, both creatures fetched
/// concurrently.
///
/// Fails with [`crate::core::error::ArenaError::CatalogFetch`] if either
/// fetch fails; no partial round is produced.
pub async fn draw_round<P, R>(tier: DifficultyTier, provider: &P, rng: &mut R) -> Result<Round>
where
    P: CreatureProvider + ?Sized,
    R: Rng,
{
    let id_a = CombatantId(rng.gen_range(tier.range()));
    let id_b = CombatantId(rng.gen_range(tier.range()));

    let (combatant_a, combatant_b) =
        tokio::try_join!(provider.fetch_by_id(id_a), provider.fetch_by_id(id_b))?;

    Ok(Round::new(combatant_a, combatant_b))
}
