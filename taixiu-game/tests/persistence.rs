use std::cell::RefCell;

use taixiu_game::{SessionState, Side, Snapshot, StateStorage, settle_with_dice};

/// In-memory stand-in for the browser's key-value store.
#[derive(Default)]
struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl StateStorage for MemoryStorage {
    type Error = serde_json::Error;

    fn save(&self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        *self.blob.borrow_mut() = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, Self::Error> {
        self.blob
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }
}

#[test]
fn save_then_load_reproduces_balance_and_history() {
    let mut state = SessionState::default();
    settle_with_dice(&mut state, Side::Over, 250, [5, 5, 6], "08:15:00".into()).unwrap();
    settle_with_dice(&mut state, Side::Under, 400, [6, 6, 6], "08:15:30".into()).unwrap();

    let storage = MemoryStorage::default();
    storage.save(&Snapshot::from_state(&state)).unwrap();
    let restored = storage.load().unwrap().expect("snapshot present").restore();

    assert_eq!(restored.balance, state.balance);
    assert_eq!(restored.history, state.history);
}

#[test]
fn empty_store_loads_as_none() {
    let storage = MemoryStorage::default();
    assert!(storage.load().unwrap().is_none());
}

#[test]
fn legacy_blob_parses_into_a_session() {
    // Shape produced by earlier versions of the game; must keep loading.
    let blob = r#"{
        "balance": 12345,
        "history": [
            {
                "time": "21:07:44",
                "dice": [2, 3, 6],
                "sum": 11,
                "outcome": "TAI",
                "betChoice": "XIU",
                "betAmount": 500,
                "delta": -500
            }
        ]
    }"#;
    let snapshot: Snapshot = serde_json::from_str(blob).unwrap();
    let state = snapshot.restore();
    assert_eq!(state.balance, 12_345);
    assert_eq!(state.history.len(), 1);
    let entry = &state.history.entries()[0];
    assert_eq!(entry.bet_choice, Some(Side::Under));
    assert_eq!(entry.delta, -500);
}
