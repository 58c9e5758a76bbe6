//! Command callbacks mapping UI events onto the engine's entry points.
//! Every mutation goes through the shared session store and is flushed to
//! storage before the next render.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use taixiu_game::{
    SessionState, SettleError, Settlement, Side, begin_roll, finish_roll, roll_dice,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{AppState, FRAME_INTERVAL_MS, ROLL_DURATION_MS};
use crate::format::{format_coins, now_time_string, outcome_label};
use crate::{dom, storage};

/// Status line for a rejected command, phrased for the player.
fn status_text(err: &SettleError) -> String {
    match err {
        SettleError::RoundInProgress => "Đang tung...".to_string(),
        SettleError::NoChoiceSelected => "Hãy chọn Tài/Xỉu trước.".to_string(),
        SettleError::InvalidStake => "Hãy đặt cược trước.".to_string(),
        SettleError::InsufficientBalance => "Không đủ số dư.".to_string(),
        SettleError::InvalidDice(_) => err.to_string(),
    }
}

/// Status line for a settled round.
fn describe(s: &Settlement) -> String {
    if s.result.is_triple {
        "Kết quả: Tam hoa – Thua cược".to_string()
    } else if s.delta > 0 {
        format!(
            "Kết quả: {} ({}) – Bạn thắng +{} xu",
            s.result.sum,
            outcome_label(s.result.outcome),
            format_coins(s.delta)
        )
    } else {
        format!(
            "Kết quả: {} ({}) – Thua cược",
            s.result.sum,
            outcome_label(s.result.outcome)
        )
    }
}

/// Mirror the store into the render handle.
fn sync(session: &UseStateHandle<SessionState>, store: &Rc<RefCell<SessionState>>) {
    session.set(store.borrow().clone());
}

pub fn build_select_side(state: &AppState) -> Callback<Side> {
    let store = state.store.clone();
    let session = state.session.clone();
    let status_line = state.status_line.clone();
    Callback::from(move |side: Side| {
        let changed = store.borrow_mut().set_choice(side);
        match changed {
            Ok(()) => sync(&session, &store),
            Err(err) => status_line.set(status_text(&err)),
        }
    })
}

pub fn build_set_stake(state: &AppState) -> Callback<u32> {
    let stake = state.stake.clone();
    Callback::from(move |value: u32| stake.set(value))
}

pub fn build_add_chip(state: &AppState) -> Callback<u32> {
    let stake = state.stake.clone();
    Callback::from(move |value: u32| stake.set(stake.saturating_add(value)))
}

pub fn build_clear_stake(state: &AppState) -> Callback<()> {
    let stake = state.stake.clone();
    Callback::from(move |()| stake.set(0))
}

pub fn build_reset_balance(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let session = state.session.clone();
    let status_line = state.status_line.clone();
    Callback::from(move |()| {
        let done = store.borrow_mut().reset_balance();
        match done {
            Ok(()) => {
                let current = store.borrow().clone();
                storage::flush(&current);
                session.set(current);
            }
            Err(err) => status_line.set(status_text(&err)),
        }
    })
}

pub fn build_clear_history(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let session = state.session.clone();
    Callback::from(move |()| {
        store.borrow_mut().clear_history();
        let current = store.borrow().clone();
        storage::flush(&current);
        session.set(current);
    })
}

/// Open the round, play the cosmetic frames, then settle. The frames use
/// their own RNG stream; only the final draw inside `finish_roll` decides
/// the outcome. Settlement reads the store at the moment it lands, so
/// commands issued during the animation (a history clear, say) survive it.
pub fn build_roll(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let session = state.session.clone();
    let stake = state.stake.clone();
    let faces = state.faces.clone();
    let status_line = state.status_line.clone();
    Callback::from(move |()| {
        let amount = *stake;
        let begun = begin_roll(&mut store.borrow_mut(), amount);
        if let Err(err) = begun {
            status_line.set(status_text(&err));
            return;
        }
        status_line.set("Đang tung...".to_string());
        sync(&session, &store);

        let store = store.clone();
        let session = session.clone();
        let faces = faces.clone();
        let status_line = status_line.clone();
        spawn_local(async move {
            let mut frame_rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
            let mut elapsed = 0;
            while elapsed < ROLL_DURATION_MS {
                faces.set(roll_dice(&mut frame_rng));
                if dom::sleep_ms(FRAME_INTERVAL_MS).await.is_err() {
                    break;
                }
                elapsed += FRAME_INTERVAL_MS;
            }

            let mut roll_rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
            let settled = finish_roll(
                &mut store.borrow_mut(),
                amount,
                &mut roll_rng,
                now_time_string(),
            );
            match settled {
                Ok(outcome) => {
                    faces.set(outcome.result.dice);
                    status_line.set(describe(&outcome));
                    let current = store.borrow().clone();
                    storage::flush(&current);
                    session.set(current);
                }
                Err(err) => {
                    status_line.set(status_text(&err));
                    sync(&session, &store);
                }
            }
        });
    })
}
