pub mod bet_panel;
pub mod dice_tray;
pub mod history_panel;
pub mod hud;
