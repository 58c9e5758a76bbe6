//! Cosmetic rendering surface: paints whatever faces it is handed and has
//! no effect on outcomes.

use yew::prelude::*;

/// Pip layout per face as (column, row) cells on a 3x3 grid.
fn pip_cells(face: u8) -> &'static [(u8, u8)] {
    match face {
        1 => &[(1, 1)],
        2 => &[(0, 0), (2, 2)],
        3 => &[(0, 0), (1, 1), (2, 2)],
        4 => &[(0, 0), (2, 0), (0, 2), (2, 2)],
        5 => &[(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)],
        _ => &[(0, 0), (0, 1), (0, 2), (2, 0), (2, 1), (2, 2)],
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub faces: [u8; 3],
}

#[function_component(DiceTray)]
pub fn dice_tray(p: &Props) -> Html {
    html! {
        <div class="dice-tray">
            { for p.faces.iter().map(|face| die(*face)) }
        </div>
    }
}

fn die(face: u8) -> Html {
    let pips = pip_cells(face).iter().map(|(col, row)| {
        let style = format!("grid-column: {}; grid-row: {};", col + 1, row + 1);
        html! { <span class="pip" {style}></span> }
    });
    html! {
        <div class="die" data-face={face.to_string()}>
            { for pips }
        </div>
    }
}
