//! Tai Xiu Game Engine
//!
//! Platform-agnostic core logic for the three-dice Over/Under (Tài/Xỉu)
//! wagering game. This crate owns the settlement rules, the bounded history
//! ledger, and the persisted snapshot shape; rendering surfaces, timers, and
//! storage media live in platform-specific crates.

pub mod dice;
pub mod history;
pub mod outcome;
pub mod session;
pub mod settle;
pub mod snapshot;

// Re-export commonly used types
pub use dice::{FACE_MAX, FACE_MIN, roll_dice, roll_die};
pub use history::{HISTORY_CAP, HistoryEntry, HistoryLedger};
pub use outcome::{InvalidDiceError, Outcome, OVER_THRESHOLD, RoundResult, classify};
pub use session::{DEFAULT_BALANCE, RoundStatus, SessionState, Side};
pub use settle::{SettleError, Settlement, begin_roll, finish_roll, settle, settle_with_dice};
pub use snapshot::{STORAGE_KEY, Snapshot, StateStorage};
