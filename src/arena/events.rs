//! One-way frontend notifications emitted by the engine
//!
//! The engine appends, the frontend drains; nothing is read back. How
//! (or whether) cues are played and notices shown is the frontend's
//! business, including muting.

use serde::{Deserialize, Serialize};

/// Severity of a notice shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Sound effect identifiers the frontend may play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// New combatants drawn
    Appear,
    /// Bet placed, battle underway
    Clash,
    Win,
    Lose,
}

/// Fire-and-forget event for the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrontendEvent {
    Notice {
        title: String,
        kind: NoticeKind,
        message: String,
    },
    Cue(AudioCue),
}

/// Dialog signals raised once per resolved round, cleared on reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSignals {
    pub win: bool,
    pub loss: bool,
}
