//! Battle State Machine: round sequencing, wagers, deferred resolution

pub mod events;
pub mod machine;
pub mod round;

pub use events::{AudioCue, DialogSignals, FrontendEvent, NoticeKind};
pub use machine::{ArenaEngine, ArenaPhase, ResolutionTicket};
pub use round::{BattleReport, Round};
