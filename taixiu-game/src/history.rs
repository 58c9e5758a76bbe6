//! Bounded, newest-first ledger of settled rounds.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::session::Side;

/// Maximum retained entries; older rounds are evicted from the tail.
pub const HISTORY_CAP: usize = 50;

/// One settled round as recorded in the ledger and the persisted snapshot.
/// Field names follow the snapshot blob format; entries are never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Opaque display timestamp; plays no role in settlement.
    pub time: String,
    pub dice: [u8; 3],
    pub sum: u8,
    pub outcome: Outcome,
    pub bet_choice: Option<Side>,
    pub bet_amount: u32,
    /// Signed balance change; equals the stake in magnitude.
    pub delta: i64,
}

/// Insertion-ordered ledger, newest first, capped at [`HISTORY_CAP`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    /// Rebuild a ledger from persisted entries, clamping to capacity.
    #[must_use]
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAP);
        Self { entries }
    }

    /// Prepend a settled round, evicting the oldest entry past capacity.
    pub fn push_front(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Drop every recorded round.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest-first read-only view.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: u32) -> HistoryEntry {
        HistoryEntry {
            time: format!("00:00:{tag:02}"),
            dice: [1, 2, 3],
            sum: 6,
            outcome: Outcome::Under,
            bet_choice: Some(Side::Under),
            bet_amount: tag,
            delta: i64::from(tag),
        }
    }

    #[test]
    fn newest_entry_sits_at_the_head() {
        let mut ledger = HistoryLedger::default();
        ledger.push_front(entry(1));
        ledger.push_front(entry(2));
        assert_eq!(ledger.entries()[0].bet_amount, 2);
        assert_eq!(ledger.entries()[1].bet_amount, 1);
    }

    #[test]
    fn capacity_evicts_from_the_tail() {
        let mut ledger = HistoryLedger::default();
        for tag in 0..=u32::try_from(HISTORY_CAP).unwrap() {
            ledger.push_front(entry(tag));
        }
        assert_eq!(ledger.len(), HISTORY_CAP);
        // Entry 0 was the first pushed and must be gone.
        assert!(ledger.entries().iter().all(|e| e.bet_amount != 0));
        assert_eq!(ledger.entries()[0].bet_amount, 50);
    }

    #[test]
    fn from_entries_clamps_to_capacity() {
        let oversized: Vec<_> = (0..80).map(entry).collect();
        let ledger = HistoryLedger::from_entries(oversized);
        assert_eq!(ledger.len(), HISTORY_CAP);
        assert_eq!(ledger.entries()[0].bet_amount, 0);
    }

    #[test]
    fn clear_empties_the_ledger() {
        let mut ledger = HistoryLedger::from_entries(vec![entry(1)]);
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn entry_serializes_with_blob_field_names() {
        let json = serde_json::to_string(&entry(5)).unwrap();
        assert!(json.contains("\"betChoice\":\"XIU\""));
        assert!(json.contains("\"betAmount\":5"));
        assert!(json.contains("\"outcome\":\"XIU\""));
    }
}
