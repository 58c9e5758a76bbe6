//! Persisted snapshot shape and the storage abstraction.
//!
//! Only balance and history survive a session; the standing side selection
//! and the round status reset to defaults on every load. That is
//! intentional, not an oversight.

use serde::{Deserialize, Serialize};

use crate::history::{HistoryEntry, HistoryLedger};
use crate::session::SessionState;

/// Key the snapshot blob lives under in the key-value store.
pub const STORAGE_KEY: &str = "tx-state";

/// The persisted `{balance, history}` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub balance: u32,
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Capture the persistable fields of a session.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            balance: state.balance,
            history: state.history.entries().to_vec(),
        }
    }

    /// Rebuild a session from a persisted snapshot, clamping oversized
    /// history and defaulting the non-persisted fields.
    #[must_use]
    pub fn restore(self) -> SessionState {
        SessionState {
            balance: self.balance,
            history: HistoryLedger::from_entries(self.history),
            ..SessionState::default()
        }
    }
}

/// Trait for abstracting snapshot save/load operations.
/// Platform-specific implementations should provide this. Persistence is a
/// convenience: callers are expected to log and swallow storage errors
/// rather than surface them to the player.
pub trait StateStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or stored.
    fn save(&self, snapshot: &Snapshot) -> Result<(), Self::Error>;

    /// Load the previously persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored blob cannot be read or parsed.
    fn load(&self) -> Result<Option<Snapshot>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{RoundStatus, Side};
    use crate::settle::settle_with_dice;

    #[test]
    fn restore_preserves_balance_and_history() {
        let mut state = SessionState::default();
        settle_with_dice(&mut state, Side::Over, 100, [4, 4, 5], "10:00:00".into()).unwrap();
        settle_with_dice(&mut state, Side::Under, 200, [1, 1, 2], "10:00:05".into()).unwrap();

        let restored = Snapshot::from_state(&state).restore();
        assert_eq!(restored.balance, state.balance);
        assert_eq!(restored.history, state.history);
    }

    #[test]
    fn choice_and_status_do_not_round_trip() {
        let state = SessionState {
            choice: Some(Side::Over),
            status: RoundStatus::Rolling,
            ..SessionState::default()
        };
        let restored = Snapshot::from_state(&state).restore();
        assert_eq!(restored.choice, None);
        assert_eq!(restored.status, RoundStatus::Idle);
    }

    #[test]
    fn snapshot_json_shape_matches_the_blob_format() {
        let mut state = SessionState::default();
        settle_with_dice(&mut state, Side::Over, 100, [6, 5, 4], "23:59:59".into()).unwrap();
        let json = serde_json::to_string(&Snapshot::from_state(&state)).unwrap();
        assert!(json.starts_with("{\"balance\":10100,\"history\":["));
        assert!(json.contains("\"outcome\":\"TAI\""));
    }
}
