use taixiu_game::Side;
use yew::prelude::*;

use crate::format::{format_coins, side_label};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub balance: u32,
    pub choice: Option<Side>,
    pub status_line: AttrValue,
    #[prop_or_default]
    pub on_reset_balance: Callback<()>,
}

#[function_component(Hud)]
pub fn hud(p: &Props) -> Html {
    let choice_text = p.choice.map_or("Chưa chọn", side_label);
    let on_reset = {
        let cb = p.on_reset_balance.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <header class="hud">
            <div class="hud-balance">
                { "Số dư: " }
                <strong>{ format_coins(i64::from(p.balance)) }</strong>
                { " xu" }
                <button class="reset-balance" onclick={on_reset}>{ "Đặt lại số dư" }</button>
            </div>
            <div class="hud-choice">{ "Cửa đang chọn: " }<strong>{ choice_text }</strong></div>
            <p class="status-line" role="status">{ p.status_line.clone() }</p>
        </header>
    }
}
