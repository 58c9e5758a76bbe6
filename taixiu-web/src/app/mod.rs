//! Root component: owns the session state and wires UI commands to the
//! engine's entry points.

mod commands;

use std::cell::RefCell;
use std::rc::Rc;

use taixiu_game::{RoundStatus, SessionState};
use yew::prelude::*;

use crate::components::bet_panel::BetPanel;
use crate::components::dice_tray::DiceTray;
use crate::components::history_panel::HistoryPanel;
use crate::components::hud::Hud;
use crate::storage;

/// Length of the cosmetic pre-roll animation. Shortening it never changes
/// an outcome; the settlement draw happens after it completes.
pub const ROLL_DURATION_MS: i32 = 1_200;
/// Delay between cosmetic animation frames.
pub const FRAME_INTERVAL_MS: i32 = 80;

/// Handles every command builder clones from.
///
/// `store` is the authoritative session: every command mutates it and then
/// mirrors the result into the `session` render handle. A callback spawned
/// before a re-render therefore always settles against the latest state,
/// not the clone it captured.
#[derive(Clone)]
pub struct AppState {
    pub store: Rc<RefCell<SessionState>>,
    pub session: UseStateHandle<SessionState>,
    pub stake: UseStateHandle<u32>,
    pub faces: UseStateHandle<[u8; 3]>,
    pub status_line: UseStateHandle<String>,
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_mut_ref(storage::restore_or_default);
    let session = use_state(|| store.borrow().clone());
    let stake = use_state(|| 0_u32);
    let faces = use_state(|| [1_u8, 1, 1]);
    let status_line = use_state(String::new);

    let state = AppState {
        store: store.clone(),
        session: session.clone(),
        stake: stake.clone(),
        faces: faces.clone(),
        status_line: status_line.clone(),
    };

    let on_select = commands::build_select_side(&state);
    let on_set_stake = commands::build_set_stake(&state);
    let on_add_chip = commands::build_add_chip(&state);
    let on_clear_stake = commands::build_clear_stake(&state);
    let on_roll = commands::build_roll(&state);
    let on_reset_balance = commands::build_reset_balance(&state);
    let on_clear_history = commands::build_clear_history(&state);

    let rolling = session.status == RoundStatus::Rolling;

    html! {
        <main class="table">
            <Hud
                balance={session.balance}
                choice={session.choice}
                status_line={AttrValue::from((*status_line).clone())}
                {on_reset_balance}
            />
            <DiceTray faces={*faces} />
            <BetPanel
                choice={session.choice}
                stake={*stake}
                {rolling}
                {on_select}
                {on_set_stake}
                {on_add_chip}
                {on_clear_stake}
                {on_roll}
            />
            <HistoryPanel
                entries={session.history.entries().to_vec()}
                on_clear={on_clear_history}
            />
        </main>
    }
}
