//! Battle state machine
//!
//! Authoritative sequencing of a round: idle -> fetching -> ready ->
//! resolving -> resolved, with reset back to idle from anywhere. All
//! mutation goes through `&mut self`, so there is no concurrent mutator;
//! staleness is handled by an epoch counter instead of locks. A draw or
//! reset bumps the epoch, which invalidates any resolution ticket still
//! in flight. A preempted draw future is simply dropped by its caller
//! and never reaches the apply step.

use crate::arena::events::{AudioCue, DialogSignals, FrontendEvent, NoticeKind};
use crate::arena::round::{BattleReport, Round};
use crate::catalog::provider::CreatureProvider;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{DifficultyTier, Side};
use crate::history::{BattleHistory, HistoryEntry, Scoreboard, Tally};
use crate::matchmaker;
use crate::scoring::{duel, TypeAdvantageTable};
use chrono::Local;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArenaPhase {
    #[default]
    Idle,
    Fetching,
    Ready,
    Resolving,
    Resolved,
}

/// Handle for a scheduled resolution.
///
/// Goes stale when a draw or reset bumps the engine epoch before it
/// fires; a stale ticket resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ResolutionTicket {
    epoch: u64,
}

/// The arena engine: one round at a time, a scoreboard, and an event
/// queue for the frontend.
pub struct ArenaEngine {
    phase: ArenaPhase,
    round: Option<Round>,
    epoch: u64,
    scoreboard: Scoreboard,
    advantage: TypeAdvantageTable,
    config: GameConfig,
    rng: ChaCha8Rng,
    dialogs: DialogSignals,
    events: Vec<FrontendEvent>,
}

impl ArenaEngine {
    pub fn new(config: GameConfig) -> Self {
        let rng = ChaCha8Rng::from_entropy();
        Self::with_rng(config, rng)
    }

    /// Engine with a fixed draw sequence, for reproducible runs
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: ChaCha8Rng) -> Self {
        let history_capacity = config.history_capacity;
        Self {
            phase: ArenaPhase::Idle,
            round: None,
            epoch: 0,
            scoreboard: Scoreboard::new(history_capacity),
            advantage: TypeAdvantageTable::default(),
            config,
            rng,
            dialogs: DialogSignals::default(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> ArenaPhase {
        self.phase
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn tally(&self) -> Tally {
        self.scoreboard.tally
    }

    pub fn history(&self) -> &BattleHistory {
        &self.scoreboard.history
    }

    pub fn dialogs(&self) -> DialogSignals {
        self.dialogs
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A bet reads as placed exactly while the round is resolving or
    /// resolved. Frontends treat betting controls as unavailable outside
    /// [`ArenaPhase::Ready`].
    pub fn bet_placed(&self) -> bool {
        matches!(self.phase, ArenaPhase::Resolving | ArenaPhase::Resolved)
    }

    /// Hand the queued frontend events over, emptying the queue
    pub fn drain_events(&mut self) -> Vec<FrontendEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draw a fresh round at the given tier.
    ///
    /// Legal from any phase: a draw issued while a fetch or resolution
    /// is outstanding preempts it. The prior round is discarded before
    /// the catalog is contacted. On a fetch failure the error is
    /// reported once through the event queue and the engine returns to
    /// idle with no partial round.
    pub async fn draw<P>(&mut self, tier: DifficultyTier, provider: &P) -> Result<()>
    where
        P: CreatureProvider + ?Sized,
    {
        self.epoch += 1; // invalidate any pending resolution
        self.round = None;
        self.phase = ArenaPhase::Fetching;

        match matchmaker::draw_round(tier, provider, &mut self.rng).await {
            Ok(round) => {
                tracing::debug!(
                    "drew {} vs {} at {} difficulty",
                    round.combatant_a.name,
                    round.combatant_b.name,
                    tier.label()
                );
                self.round = Some(round);
                self.phase = ArenaPhase::Ready;
                self.events.push(FrontendEvent::Cue(AudioCue::Appear));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("draw failed: {}", e);
                self.phase = ArenaPhase::Idle;
                self.events.push(FrontendEvent::Notice {
                    title: "Error fetching creatures".into(),
                    kind: NoticeKind::Error,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Place a wager on one side of the current round.
    ///
    /// Legal only in [`ArenaPhase::Ready`] while no bet is recorded; any
    /// other call is a no-op returning `None`. At most one bet per
    /// round.
    pub fn place_bet(&mut self, side: Side) -> Option<ResolutionTicket> {
        if self.phase != ArenaPhase::Ready {
            return None;
        }
        let round = self.round.as_mut()?;
        if round.bet_on.is_some() {
            return None;
        }

        round.bet_on = Some(side);
        self.phase = ArenaPhase::Resolving;
        self.events.push(FrontendEvent::Cue(AudioCue::Clash));

        Some(ResolutionTicket { epoch: self.epoch })
    }

    /// Resolve the battle after the configured delay.
    ///
    /// Returns `None` if the ticket went stale before firing.
    pub async fn resolve(&mut self, ticket: ResolutionTicket) -> Option<BattleReport> {
        tokio::time::sleep(self.config.resolve_delay()).await;
        self.complete_resolution(ticket)
    }

    /// Fire the resolution a ticket stands for.
    ///
    /// Exactly one resolution fires per round: a stale ticket (the epoch
    /// moved on, or the round already resolved) mutates nothing and
    /// returns `None`.
    pub fn complete_resolution(&mut self, ticket: ResolutionTicket) -> Option<BattleReport> {
        if ticket.epoch != self.epoch || self.phase != ArenaPhase::Resolving {
            return None;
        }
        let round = self.round.as_mut()?;
        let bet = round.bet_on?;

        let outcome = duel(&round.combatant_a, &round.combatant_b, &self.advantage);
        round.winner = Some(outcome.winner);
        round.resolved_at = Some(Local::now());

        let winner = round.combatant(outcome.winner);
        let winner_name = winner.name.clone();
        // win credit is id equality, so either slot of a mirror match pays out
        let is_win = round.combatant(bet).id == winner.id;

        let entry = HistoryEntry {
            name_a: round.combatant_a.name.clone(),
            name_b: round.combatant_b.name.clone(),
            winner: winner_name.clone(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        self.scoreboard.record_round(entry, is_win);
        self.phase = ArenaPhase::Resolved;

        if is_win {
            self.dialogs.win = true;
            self.events.push(FrontendEvent::Cue(AudioCue::Win));
        } else {
            self.dialogs.loss = true;
            self.events.push(FrontendEvent::Cue(AudioCue::Lose));
        }
        self.events.push(FrontendEvent::Notice {
            title: if is_win { "You won!" } else { "You lost!" }.into(),
            kind: if is_win {
                NoticeKind::Success
            } else {
                NoticeKind::Error
            },
            message: format!("{} was stronger!", winner_name.to_uppercase()),
        });

        tracing::info!(
            "battle resolved: {} beat {} ({} vs {}), bet {}",
            winner_name,
            round.combatant(outcome.winner.other()).name,
            outcome.power_a,
            outcome.power_b,
            if is_win { "won" } else { "lost" }
        );

        Some(BattleReport {
            winner: outcome.winner,
            winner_name,
            is_win,
            power_a: outcome.power_a,
            power_b: outcome.power_b,
        })
    }

    /// Clear the round, scoreboard, dialog signals, and queued events,
    /// and invalidate any pending resolution. Legal from any phase.
    pub fn reset(&mut self) {
        self.epoch += 1; // invalidate any pending resolution
        self.phase = ArenaPhase::Idle;
        self.round = None;
        self.dialogs = DialogSignals::default();
        self.scoreboard.reset();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Combatant;

    fn ready_engine() -> ArenaEngine {
        let mut engine = ArenaEngine::with_seed(GameConfig::default(), 7);
        engine.round = Some(Round::new(
            Combatant::test_fire(),
            Combatant::test_grass(),
        ));
        engine.phase = ArenaPhase::Ready;
        engine
    }

    #[test]
    fn test_fresh_engine_is_idle() {
        let engine = ArenaEngine::with_seed(GameConfig::default(), 7);
        assert_eq!(engine.phase(), ArenaPhase::Idle);
        assert!(engine.round().is_none());
        assert_eq!(engine.tally(), Tally::default());
        assert!(!engine.bet_placed());
    }

    #[test]
    fn test_bet_rejected_outside_ready() {
        let mut engine = ArenaEngine::with_seed(GameConfig::default(), 7);
        assert!(engine.place_bet(Side::A).is_none());
        assert_eq!(engine.phase(), ArenaPhase::Idle);
    }

    #[test]
    fn test_bet_moves_to_resolving() {
        let mut engine = ready_engine();
        let ticket = engine.place_bet(Side::A);
        assert!(ticket.is_some());
        assert_eq!(engine.phase(), ArenaPhase::Resolving);
        assert!(engine.bet_placed());
    }

    #[test]
    fn test_second_bet_is_noop() {
        let mut engine = ready_engine();
        let _first = engine.place_bet(Side::A).unwrap();

        assert!(engine.place_bet(Side::B).is_none());
        assert_eq!(engine.round().unwrap().bet_on, Some(Side::A));
    }

    #[test]
    fn test_stale_ticket_after_reset_fires_nothing() {
        let mut engine = ready_engine();
        let ticket = engine.place_bet(Side::A).unwrap();

        engine.reset();
        assert!(engine.complete_resolution(ticket).is_none());
        assert_eq!(engine.phase(), ArenaPhase::Idle);
        assert_eq!(engine.tally(), Tally::default());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_resolution_fires_exactly_once() {
        let mut engine = ready_engine();
        let ticket = engine.place_bet(Side::A).unwrap();

        let report = engine.complete_resolution(ticket).unwrap();
        assert!(report.is_win);
        assert_eq!(engine.tally(), Tally { wins: 1, losses: 0 });

        // same ticket again: round already resolved
        assert!(engine.complete_resolution(ticket).is_none());
        assert_eq!(engine.tally(), Tally { wins: 1, losses: 0 });
    }

    #[test]
    fn test_reset_clears_dialogs_and_events() {
        let mut engine = ready_engine();
        let ticket = engine.place_bet(Side::B).unwrap();
        engine.complete_resolution(ticket).unwrap();
        assert!(engine.dialogs().loss);

        engine.reset();
        assert_eq!(engine.dialogs(), DialogSignals::default());
        assert!(engine.drain_events().is_empty());
    }
}
