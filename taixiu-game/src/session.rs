//! Mutable per-session state and its lifecycle commands.

use serde::{Deserialize, Serialize};

use crate::history::HistoryLedger;
use crate::outcome::Outcome;
use crate::settle::SettleError;

/// Balance every fresh session starts with, and the reset target.
pub const DEFAULT_BALANCE: u32 = 10_000;

/// Wagerable side of a round. "No selection yet" is `Option::<Side>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "TAI")]
    Over,
    #[serde(rename = "XIU")]
    Under,
}

impl Side {
    /// Whether this side wins against the classified outcome. A triple
    /// matches neither side.
    #[must_use]
    pub fn matches(self, outcome: Outcome) -> bool {
        matches!(
            (self, outcome),
            (Side::Over, Outcome::Over) | (Side::Under, Outcome::Under)
        )
    }
}

/// Round state machine. `Rolling` only blocks concurrent settlement; there
/// is no other observable behavior tied to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundStatus {
    #[default]
    Idle,
    Rolling,
}

/// Single in-memory session: balance, standing side selection, round status,
/// and the bounded history ledger. Mutated only through the settlement entry
/// points in [`crate::settle`] and the explicit commands below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub balance: u32,
    pub choice: Option<Side>,
    pub status: RoundStatus,
    pub history: HistoryLedger,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            choice: None,
            status: RoundStatus::Idle,
            history: HistoryLedger::default(),
        }
    }
}

impl SessionState {
    /// Change the standing side selection. The selection persists across
    /// rounds until changed again.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::RoundInProgress`] while a roll is open.
    pub fn set_choice(&mut self, side: Side) -> Result<(), SettleError> {
        if self.status == RoundStatus::Rolling {
            return Err(SettleError::RoundInProgress);
        }
        self.choice = Some(side);
        Ok(())
    }

    /// Restore the default balance. Refused mid-roll so a settling round
    /// cannot interleave with a balance rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::RoundInProgress`] while a roll is open.
    pub fn reset_balance(&mut self) -> Result<(), SettleError> {
        if self.status == RoundStatus::Rolling {
            return Err(SettleError::RoundInProgress);
        }
        self.balance = DEFAULT_BALANCE;
        Ok(())
    }

    /// Empty the history ledger. Allowed unconditionally.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_session() {
        let state = SessionState::default();
        assert_eq!(state.balance, DEFAULT_BALANCE);
        assert_eq!(state.choice, None);
        assert_eq!(state.status, RoundStatus::Idle);
        assert!(state.history.is_empty());
    }

    #[test]
    fn choice_is_sticky_until_changed() {
        let mut state = SessionState::default();
        state.set_choice(Side::Over).unwrap();
        assert_eq!(state.choice, Some(Side::Over));
        state.set_choice(Side::Under).unwrap();
        assert_eq!(state.choice, Some(Side::Under));
    }

    #[test]
    fn commands_refused_while_rolling() {
        let mut state = SessionState {
            status: RoundStatus::Rolling,
            balance: 42,
            ..SessionState::default()
        };
        assert_eq!(
            state.set_choice(Side::Over),
            Err(SettleError::RoundInProgress)
        );
        assert_eq!(state.reset_balance(), Err(SettleError::RoundInProgress));
        assert_eq!(state.balance, 42);
    }

    #[test]
    fn reset_restores_default_balance() {
        let mut state = SessionState {
            balance: 17,
            ..SessionState::default()
        };
        state.reset_balance().unwrap();
        assert_eq!(state.balance, DEFAULT_BALANCE);
    }

    #[test]
    fn triple_matches_neither_side() {
        assert!(!Side::Over.matches(Outcome::Triple));
        assert!(!Side::Under.matches(Outcome::Triple));
        assert!(Side::Over.matches(Outcome::Over));
        assert!(!Side::Over.matches(Outcome::Under));
    }
}
