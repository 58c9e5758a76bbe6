use taixiu_game::Side;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::format_coins;

/// Chip denominations offered under the stake input.
pub const CHIP_VALUES: [u32; 4] = [1_000, 5_000, 10_000, 50_000];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub choice: Option<Side>,
    pub stake: u32,
    pub rolling: bool,
    pub on_select: Callback<Side>,
    pub on_set_stake: Callback<u32>,
    pub on_add_chip: Callback<u32>,
    pub on_clear_stake: Callback<()>,
    pub on_roll: Callback<()>,
}

#[function_component(BetPanel)]
pub fn bet_panel(p: &Props) -> Html {
    let select = |side: Side| {
        let cb = p.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(side))
    };
    let oninput = {
        let cb = p.on_set_stake.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value().parse().unwrap_or(0));
        })
    };
    let on_clear = {
        let cb = p.on_clear_stake.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_roll = {
        let cb = p.on_roll.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let side_class = |side: Side| {
        classes!(
            "side-btn",
            (p.choice == Some(side)).then_some("active")
        )
    };

    html! {
        <section class="bet-panel">
            <div class="side-buttons">
                <button class={side_class(Side::Over)} onclick={select(Side::Over)}>{ "Tài (≥11)" }</button>
                <button class={side_class(Side::Under)} onclick={select(Side::Under)}>{ "Xỉu (≤10)" }</button>
            </div>
            <div class="stake-row">
                <input
                    type="number"
                    min="0"
                    value={p.stake.to_string()}
                    {oninput}
                />
                <button class="clear-stake" onclick={on_clear}>{ "Xóa cược" }</button>
            </div>
            <div class="chips">
                { for CHIP_VALUES.iter().map(|value| chip(*value, &p.on_add_chip)) }
            </div>
            <button class="roll-btn" disabled={p.rolling} onclick={on_roll}>{ "Tung xúc xắc" }</button>
        </section>
    }
}

fn chip(value: u32, on_add: &Callback<u32>) -> Html {
    let onclick = {
        let cb = on_add.clone();
        Callback::from(move |_: MouseEvent| cb.emit(value))
    };
    html! {
        <button class="chip" data-chip={value.to_string()} {onclick}>
            { format!("+{}", format_coins(i64::from(value))) }
        </button>
    }
}
