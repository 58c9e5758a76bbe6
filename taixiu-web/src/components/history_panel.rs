use taixiu_game::HistoryEntry;
use yew::prelude::*;

use crate::format::{format_coins, format_delta, outcome_label, side_label};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Vec<HistoryEntry>,
    #[prop_or_default]
    pub on_clear: Callback<()>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(p: &Props) -> Html {
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section class="history-panel">
            <div class="history-head">
                <h2>{ "Lịch sử" }</h2>
                <button class="clear-history" onclick={on_clear}>{ "Xóa lịch sử" }</button>
            </div>
            <ul class="history-list">
                { for p.entries.iter().map(line) }
            </ul>
        </section>
    }
}

fn line(entry: &HistoryEntry) -> Html {
    let dice = entry
        .dice
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let bet = entry.bet_choice.map_or("—", side_label);
    let text = format!(
        "{} – Xúc xắc: {} = {} ({}) | Cược {} {} → {} xu",
        entry.time,
        dice,
        entry.sum,
        outcome_label(entry.outcome),
        bet,
        format_coins(i64::from(entry.bet_amount)),
        format_delta(entry.delta),
    );
    html! { <li>{ text }</li> }
}
