//! Browser-only tests; run with `wasm-pack test --headless --chrome taixiu-web`.
#![cfg(target_arch = "wasm32")]

use taixiu_game::{SessionState, Side, Snapshot, StateStorage, settle_with_dice};
use taixiu_web::storage::WebStateStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trips_the_snapshot() {
    let mut state = SessionState::default();
    settle_with_dice(&mut state, Side::Over, 100, [6, 5, 4], "20:00:00".into()).unwrap();

    WebStateStorage.save(&Snapshot::from_state(&state)).unwrap();
    let restored = WebStateStorage
        .load()
        .unwrap()
        .expect("snapshot present")
        .restore();

    assert_eq!(restored.balance, state.balance);
    assert_eq!(restored.history, state.history);
    assert_eq!(restored.choice, None);
}

#[wasm_bindgen_test]
fn missing_blob_loads_as_defaults() {
    if let Some(storage) = taixiu_web::dom::local_storage() {
        storage.remove_item(taixiu_game::STORAGE_KEY).unwrap();
    }
    let state = taixiu_web::storage::restore_or_default();
    assert_eq!(state.balance, taixiu_game::DEFAULT_BALANCE);
    assert!(state.history.is_empty());
}
