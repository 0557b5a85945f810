//! Widget construction and chrome: window layout, menu wiring, the custom
//! tab bar, file dialogs, and the dark/light palette.

pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod tab_bar;
pub mod theme;
