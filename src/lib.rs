//! Quillpad - a single-window, multi-tab notepad.
//!
//! Documents are edited in tabs, formatted with bold/italic/color toggles,
//! and exported to plain text, DOCX, or PDF. Everything runs on the FLTK
//! dispatch thread: menu callbacks and the tab bar send [`app::Message`]
//! values over an `fltk::app::channel`, and the loop in `main` routes them
//! to [`app::AppState`].

pub mod app;
pub mod export;
pub mod ui;
