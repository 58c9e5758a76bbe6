//! Round settlement: precondition checks, payout, ledger append.
//!
//! The state machine is `Idle -> Rolling -> Idle`. [`settle`] runs the whole
//! transition synchronously; frontends that animate the throw open the round
//! with [`begin_roll`], play their cosmetic frames, then call
//! [`finish_roll`]. The cosmetic phase never touches balance or history.

use rand::Rng;

use crate::dice::roll_dice;
use crate::history::HistoryEntry;
use crate::outcome::{InvalidDiceError, RoundResult, classify, classify_faces};
use crate::session::{RoundStatus, SessionState, Side};

/// Why a wager or lifecycle command was rejected. Every variant is locally
/// recoverable; state is unchanged on any rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettleError {
    #[error("a roll is already in progress")]
    RoundInProgress,
    #[error("pick a side before rolling")]
    NoChoiceSelected,
    #[error("stake must be at least 1")]
    InvalidStake,
    #[error("stake exceeds the current balance")]
    InsufficientBalance,
    #[error(transparent)]
    InvalidDice(#[from] InvalidDiceError),
}

/// Everything the caller needs to present one settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub result: RoundResult,
    pub side: Side,
    pub stake: u32,
    /// `+stake` on a win, `-stake` on a loss or triple.
    pub delta: i64,
    pub balance_after: u32,
}

/// Preconditions in contract order: open round, side selected, stake floor,
/// stake covered by balance.
fn check_wager(state: &SessionState, side: Option<Side>, stake: u32) -> Result<Side, SettleError> {
    if state.status == RoundStatus::Rolling {
        return Err(SettleError::RoundInProgress);
    }
    let side = side.ok_or(SettleError::NoChoiceSelected)?;
    check_stake(stake, state.balance)?;
    Ok(side)
}

fn check_stake(stake: u32, balance: u32) -> Result<(), SettleError> {
    if stake == 0 {
        return Err(SettleError::InvalidStake);
    }
    if stake > balance {
        return Err(SettleError::InsufficientBalance);
    }
    Ok(())
}

/// Pay out, record, and close the round. Infallible once the wager and the
/// classified result are in hand; the stake precondition keeps the balance
/// from ever underflowing.
fn apply(
    state: &mut SessionState,
    side: Side,
    stake: u32,
    result: RoundResult,
    time: String,
) -> Settlement {
    let won = !result.is_triple && side.matches(result.outcome);
    let delta = if won {
        i64::from(stake)
    } else {
        -i64::from(stake)
    };
    state.balance = if won {
        // A restored snapshot can sit near the type ceiling; clamp the
        // payout there rather than overflow.
        state.balance.saturating_add(stake)
    } else {
        state.balance - stake
    };
    state.history.push_front(HistoryEntry {
        time,
        dice: result.dice,
        sum: result.sum,
        outcome: result.outcome,
        bet_choice: Some(side),
        bet_amount: stake,
        delta,
    });
    state.status = RoundStatus::Idle;
    Settlement {
        result,
        side,
        stake,
        delta,
        balance_after: state.balance,
    }
}

/// Validate the wager against the standing side selection and open the
/// round. This is the only path into `Rolling`; a second call before
/// [`finish_roll`] is rejected.
///
/// # Errors
///
/// Any failed precondition, in contract order; state untouched on rejection.
pub fn begin_roll(state: &mut SessionState, stake: u32) -> Result<Side, SettleError> {
    let side = check_wager(state, state.choice, stake)?;
    state.status = RoundStatus::Rolling;
    Ok(side)
}

/// Draw the final dice and settle a round opened with [`begin_roll`]. The
/// wager is re-checked against the (unchanged) session; the session returns
/// to `Idle` whichever way this resolves.
///
/// # Errors
///
/// Propagates wager errors if the session was mutated behind the open
/// round; never happens through the documented entry points.
pub fn finish_roll<R: Rng>(
    state: &mut SessionState,
    stake: u32,
    rng: &mut R,
    time: String,
) -> Result<Settlement, SettleError> {
    let checked = state
        .choice
        .ok_or(SettleError::NoChoiceSelected)
        .and_then(|side| check_stake(stake, state.balance).map(|()| side));
    match checked {
        Ok(side) => {
            let result = classify_faces(roll_dice(rng));
            Ok(apply(state, side, stake, result, time))
        }
        Err(err) => {
            // Do not leave the session wedged in Rolling.
            state.status = RoundStatus::Idle;
            Err(err)
        }
    }
}

/// Settle one full round from an idle session: validate, draw, classify,
/// pay out, record. All-or-nothing; a rejected wager leaves state untouched
/// and no dice are drawn. The standing side selection is not modified; the
/// wagered side travels in the returned [`Settlement`].
///
/// # Errors
///
/// Any failed precondition, in contract order.
pub fn settle<R: Rng>(
    state: &mut SessionState,
    side: Side,
    stake: u32,
    rng: &mut R,
    time: String,
) -> Result<Settlement, SettleError> {
    let side = check_wager(state, Some(side), stake)?;
    state.status = RoundStatus::Rolling;
    let result = classify_faces(roll_dice(rng));
    Ok(apply(state, side, stake, result, time))
}

/// Settle with pre-drawn faces. Seam for tests and for callers whose
/// animation scheduler already produced the final dice.
///
/// # Errors
///
/// Any failed precondition, or [`SettleError::InvalidDice`] for faces
/// outside 1..=6. State is untouched on every error path.
pub fn settle_with_dice(
    state: &mut SessionState,
    side: Side,
    stake: u32,
    dice: [u8; 3],
    time: String,
) -> Result<Settlement, SettleError> {
    let side = check_wager(state, Some(side), stake)?;
    let result = classify(dice)?;
    state.status = RoundStatus::Rolling;
    Ok(apply(state, side, stake, result, time))
}
