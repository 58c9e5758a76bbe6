//! localStorage-backed snapshot persistence.
//!
//! Persistence is best-effort: failures are logged and swallowed so a full
//! or unavailable store never interrupts play.

use taixiu_game::{STORAGE_KEY, SessionState, Snapshot, StateStorage};

use crate::dom;

/// Snapshot store over the browser's localStorage.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebStateStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn storage() -> Result<web_sys::Storage, WebStorageError> {
    dom::local_storage().ok_or_else(|| WebStorageError::Storage("localStorage unavailable".into()))
}

impl StateStorage for WebStateStorage {
    type Error = WebStorageError;

    fn save(&self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        let json = serde_json::to_string(snapshot)?;
        storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn load(&self) -> Result<Option<Snapshot>, Self::Error> {
        let blob = storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))?;
        match blob {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

/// Persist the session after a mutation, dropping any storage error.
pub fn flush(state: &SessionState) {
    if let Err(err) = WebStateStorage.save(&Snapshot::from_state(state)) {
        log::warn!("failed to persist session: {err}");
    }
}

/// Session for this visit: the persisted snapshot when one parses, the
/// defaults otherwise.
#[must_use]
pub fn restore_or_default() -> SessionState {
    match WebStateStorage.load() {
        Ok(Some(snapshot)) => snapshot.restore(),
        Ok(None) => SessionState::default(),
        Err(err) => {
            log::warn!("failed to load persisted session: {err}");
            SessionState::default()
        }
    }
}
