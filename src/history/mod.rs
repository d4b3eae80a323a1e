//! Win/loss tally and bounded battle history

use serde::{Deserialize, Serialize};

/// Default number of past battles the history keeps
pub const HISTORY_CAPACITY: usize = 5;

/// Cumulative win/loss counters, reset only by an explicit reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    pub fn record(&mut self, is_win: bool) {
        if is_win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Tally::default();
    }
}

/// One resolved battle as the history remembers it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name_a: String,
    pub name_b: String,
    pub winner: String,
    pub timestamp: String,
}

/// Bounded record of past battles, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl BattleHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend an entry, evicting the oldest once full
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for BattleHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

/// Tally and history under one roof, reset together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub tally: Tally,
    pub history: BattleHistory,
}

impl Scoreboard {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            tally: Tally::default(),
            history: BattleHistory::new(history_capacity),
        }
    }

    /// Record one resolved round
    pub fn record_round(&mut self, entry: HistoryEntry, is_win: bool) {
        self.tally.record(is_win);
        self.history.record(entry);
    }

    pub fn reset(&mut self) {
        self.tally.reset();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u32) -> HistoryEntry {
        HistoryEntry {
            name_a: format!("a{}", n),
            name_b: format!("b{}", n),
            winner: format!("a{}", n),
            timestamp: format!("2026-08-06 12:00:{:02}", n),
        }
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut history = BattleHistory::new(5);
        history.record(entry(1));
        history.record(entry(2));

        assert_eq!(history.entries()[0].name_a, "a2");
        assert_eq!(history.entries()[1].name_a, "a1");
    }

    #[test]
    fn test_history_evicts_oldest_at_capacity() {
        let mut history = BattleHistory::new(5);
        for n in 1..=6 {
            history.record(entry(n));
        }

        assert_eq!(history.len(), 5);
        // round 1 evicted; rounds 2..=6 remain, newest first
        assert_eq!(history.entries()[0].name_a, "a6");
        assert_eq!(history.entries()[4].name_a, "a2");
        assert!(history.entries().iter().all(|e| e.name_a != "a1"));
    }

    #[test]
    fn test_tally_records_and_resets() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(true);
        tally.record(false);
        assert_eq!(tally, Tally { wins: 2, losses: 1 });

        tally.reset();
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn test_scoreboard_reset_clears_both() {
        let mut scoreboard = Scoreboard::new(5);
        scoreboard.record_round(entry(1), true);
        scoreboard.record_round(entry(2), false);

        scoreboard.reset();
        assert_eq!(scoreboard.tally, Tally::default());
        assert!(scoreboard.history.is_empty());
    }

    #[test]
    fn test_capacity_one() {
        let mut history = BattleHistory::new(1);
        history.record(entry(1));
        history.record(entry(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].name_a, "a2");
    }
}
