//! Application layer.
//!
//! # Structure
//!
//! - `document` / `tab_manager` - per-tab buffers and the registry of open tabs
//! - `format` - bold/italic/color tags mapped onto FLTK style characters
//! - `stats` / `log` - derived status counts and the timestamped activity log
//! - `state.rs` - main application coordinator driven by `Message`s

pub mod buffer_utils;
pub mod document;
pub mod error;
pub mod format;
pub mod log;
pub mod messages;
pub mod state;
pub mod stats;
pub mod tab_manager;
pub mod text_ops;

// Re-exports for convenient external access
pub use document::{Document, DocumentId};
pub use error::{AppError, Result};
pub use format::{FormatKind, StyleRegistry};
pub use messages::Message;
pub use state::AppState;
pub use tab_manager::TabManager;
