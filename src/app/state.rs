use std::fs;

use fltk::{
    app::Sender,
    dialog,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};

use super::buffer_utils::buffer_text;
use super::document::DocumentId;
use super::format::{self, FormatKind, StyleRegistry};
use super::log::ActivityLog;
use super::messages::Message;
use super::stats;
use super::tab_manager::TabManager;
use super::text_ops::ensure_extension;
use crate::export;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::tab_bar::TabBar;
use crate::ui::theme::apply_theme;

pub const FONT_SIZE: i32 = 14;

/// Main application coordinator. Owns the tab registry, the chrome
/// widgets, the style registry, and the activity log; every `Message` from
/// the dispatch loop lands in one of its methods.
pub struct AppState {
    pub tab_manager: TabManager,
    pub tab_bar: TabBar,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub log_panel: TextDisplay,
    pub log_buffer: TextBuffer,
    pub status_label: Frame,
    pub sender: Sender<Message>,
    pub styles: StyleRegistry,
    pub activity: ActivityLog,
    pub dark_mode: bool,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        let MainWidgets {
            wind,
            menu,
            tab_bar,
            text_editor,
            log_panel,
            log_buffer,
            status_label,
        } = widgets;

        let mut state = Self {
            tab_manager: TabManager::new(),
            tab_bar,
            editor: text_editor,
            window: wind,
            menu,
            log_panel,
            log_buffer,
            status_label,
            sender,
            styles: StyleRegistry::new(FONT_SIZE),
            activity: ActivityLog::new(),
            dark_mode: false,
            last_open_directory: None,
        };

        // The window always opens with one untitled tab
        state.file_new_tab();
        state
    }

    /// Append a timestamped entry to the activity log and mirror it into
    /// the log panel, keeping the newest line visible.
    pub fn log(&mut self, message: &str) {
        let entry = format!("{}\n", self.activity.append(message));
        self.log_buffer.append(&entry);
        let lines = self.log_buffer.count_lines(0, self.log_buffer.length());
        self.log_panel.scroll(lines, 0);
    }

    /// Full text of the active document, without leaking the C-side copy.
    fn active_text(&self) -> String {
        self.tab_manager
            .active_doc()
            .map(|d| buffer_text(&d.buffer))
            .unwrap_or_default()
    }

    /// Non-empty selection range of the active buffer, if any.
    fn selection_range(&self) -> Option<(i32, i32)> {
        let doc = self.tab_manager.active_doc()?;
        let (start, end) = doc.buffer.selection_position()?;
        if start < end {
            Some((start, end))
        } else {
            None
        }
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = std::path::Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    fn attach_listener(&mut self, id: DocumentId) {
        let sender = self.sender;
        if let Some(doc) = self.tab_manager.doc_by_id_mut(id) {
            doc.attach_change_listener(sender);
        }
    }

    // --- Derived views ---

    /// Recompute line/word counts from the active buffer.
    pub fn update_status_bar(&mut self) {
        let text = self.active_text();
        self.status_label.set_label(&stats::status_line(&text));
    }

    pub fn on_buffer_modified(&mut self, id: DocumentId) {
        if self.tab_manager.active_id() == Some(id) {
            self.update_status_bar();
        }
    }

    pub fn update_window_title(&mut self) {
        let title = match self.tab_manager.active_doc() {
            Some(doc) => format!("{} - Quillpad", doc.display_name),
            None => "Quillpad".to_string(),
        };
        self.window.set_label(&title);
    }

    /// Bind the active document's buffers to the editor widget.
    pub fn bind_active_buffer(&mut self) {
        if let Some(doc) = self.tab_manager.active_doc() {
            let buffer = doc.buffer.clone();
            let style_buffer = doc.style_buffer.clone();
            self.editor.set_buffer(buffer);
            self.editor
                .set_highlight_data(style_buffer, self.styles.entries(self.dark_mode));
        }
    }

    pub fn rebuild_tab_bar(&mut self) {
        let active_id = self.tab_manager.active_id();
        self.tab_bar
            .rebuild(self.tab_manager.documents(), active_id, self.dark_mode);
    }

    // --- Tab lifecycle ---

    /// Switch the editor to a different document, preserving each
    /// document's cursor position across the swap.
    pub fn switch_to_document(&mut self, id: DocumentId) {
        let cursor = self.editor.insert_position();
        if let Some(current) = self.tab_manager.active_doc_mut() {
            current.cursor_position = cursor;
        }

        self.tab_manager.set_active(id);
        self.bind_active_buffer();

        if let Some(doc) = self.tab_manager.active_doc() {
            let cursor = doc.cursor_position;
            self.editor.set_insert_position(cursor);
            self.editor.show_insert_position();
        }

        self.update_window_title();
        self.update_status_bar();
    }

    pub fn file_new_tab(&mut self) {
        let id = self.tab_manager.create_tab();
        self.attach_listener(id);
        self.switch_to_document(id);
        self.rebuild_tab_bar();
        self.log("New tab created.");
    }

    /// Close a tab. A fresh untitled tab is created when the last one
    /// goes, so there is always an active document.
    pub fn close_tab(&mut self, id: DocumentId) {
        let name = match self.tab_manager.doc_by_id(id) {
            Some(doc) => doc.display_name.clone(),
            None => return,
        };
        self.tab_manager.remove(id);

        if self.tab_manager.count() == 0 {
            let fresh = self.tab_manager.create_tab();
            self.attach_listener(fresh);
        }
        if let Some(active) = self.tab_manager.active_id() {
            self.switch_to_document(active);
        }
        self.rebuild_tab_bar();
        self.log(&format!("Closed tab: {}", name));
    }

    pub fn switch_to_next_tab(&mut self) {
        if let Some(next_id) = self.tab_manager.next_doc_id() {
            self.switch_to_document(next_id);
            self.rebuild_tab_bar();
        }
    }

    pub fn switch_to_previous_tab(&mut self) {
        if let Some(prev_id) = self.tab_manager.prev_doc_id() {
            self.switch_to_document(prev_id);
            self.rebuild_tab_bar();
        }
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(path);
        }
    }

    pub fn open_file(&mut self, path: String) {
        self.remember_directory(&path);

        // Re-opening an already open file switches to its tab
        if let Some(existing) = self.tab_manager.find_by_path(&path) {
            self.switch_to_document(existing);
            self.rebuild_tab_bar();
            return;
        }

        match fs::read_to_string(&path) {
            Ok(content) => {
                let id = self.tab_manager.create_from_file(path, &content);
                self.attach_listener(id);
                self.switch_to_document(id);
                self.rebuild_tab_bar();
                let name = self
                    .tab_manager
                    .doc_by_id(id)
                    .map(|d| d.display_name.clone())
                    .unwrap_or_default();
                self.log(&format!("Opened file: {}", name));
            }
            Err(e) => {
                dialog::alert_default(&format!("Error opening file: {}", e));
                self.log(&format!("Open failed: {}", e));
            }
        }
    }

    pub fn file_save_txt(&mut self) {
        let text = self.active_text();
        let path = match native_save_dialog("*.txt", self.last_open_directory.as_deref()) {
            Some(p) => ensure_extension(&p, "txt"),
            None => return,
        };
        self.remember_directory(&path);

        match export::write_txt(&path, &text) {
            Ok(()) => {
                // Saving as TXT adopts the file as the tab's backing path
                if let Some(doc) = self.tab_manager.active_doc_mut() {
                    doc.file_path = Some(path.clone());
                    doc.update_display_name();
                }
                self.update_window_title();
                self.rebuild_tab_bar();
                self.log(&format!("Saved as TXT: {}", path));
            }
            Err(e) => {
                dialog::alert_default(&format!("Error saving file: {}", e));
                self.log(&format!("TXT export failed: {}", e));
            }
        }
    }

    pub fn file_save_docx(&mut self) {
        let text = self.active_text();
        let path = match native_save_dialog("*.docx", self.last_open_directory.as_deref()) {
            Some(p) => ensure_extension(&p, "docx"),
            None => return,
        };
        self.remember_directory(&path);

        match export::write_docx(&path, &text) {
            Ok(()) => self.log(&format!("Saved as DOCX: {}", path)),
            Err(e) => {
                dialog::alert_default(&format!("Error saving file: {}", e));
                self.log(&format!("DOCX export failed: {}", e));
            }
        }
    }

    pub fn file_save_pdf(&mut self) {
        let text = self.active_text();
        let path = match native_save_dialog("*.pdf", self.last_open_directory.as_deref()) {
            Some(p) => ensure_extension(&p, "pdf"),
            None => return,
        };
        self.remember_directory(&path);

        match export::write_pdf(&path, &text) {
            Ok(()) => self.log(&format!("Saved as PDF: {}", path)),
            Err(e) => {
                dialog::alert_default(&format!("Error saving file: {}", e));
                self.log(&format!("PDF export failed: {}", e));
            }
        }
    }

    // --- Edit operations ---

    /// FLTK exposes no query for remaining undo depth, so exhaustion is
    /// detected by comparing the text before and after the key-function.
    pub fn edit_undo(&mut self) {
        let before = self.active_text();
        self.editor.kf_undo();
        if self.active_text() == before {
            self.log("Nothing to undo.");
        } else {
            self.log("Undo performed.");
        }
    }

    pub fn edit_redo(&mut self) {
        let before = self.active_text();
        self.editor.kf_redo();
        if self.active_text() == before {
            self.log("Nothing to redo.");
        } else {
            self.log("Redo performed.");
        }
    }

    pub fn edit_cut(&mut self) {
        if self.selection_range().is_some() {
            self.editor.kf_cut();
            self.log("Cut action.");
        } else {
            self.log("No text selected to cut.");
        }
    }

    pub fn edit_copy(&mut self) {
        if self.selection_range().is_some() {
            self.editor.kf_copy();
            self.log("Copy action.");
        } else {
            self.log("No text selected to copy.");
        }
    }

    /// Pasting with an empty clipboard is naturally a no-op in the widget;
    /// the action is logged either way.
    pub fn edit_paste(&mut self) {
        self.editor.kf_paste();
        self.log("Paste action.");
    }

    // --- Formatting ---

    /// Apply a format action to the current selection. Without a selection
    /// the command degrades to a logged no-op.
    pub fn apply_to_selection(&mut self, kind: FormatKind) {
        let (start, end) = match self.selection_range() {
            Some(range) => range,
            None => {
                let message = match kind {
                    FormatKind::Bold => "No text selected for bold.",
                    FormatKind::Italic => "No text selected for italic.",
                    FormatKind::Color(..) => "No text selected to color.",
                };
                self.log(message);
                return;
            }
        };

        let mut style_buffer = match self.tab_manager.active_doc() {
            Some(doc) => doc.style_buffer.clone(),
            None => return,
        };
        let run = style_buffer.text_range(start, end).unwrap_or_default();
        let updated = format::apply_format(&run, kind, &mut self.styles);
        style_buffer.replace(start, end, &updated);

        // The registry may have grown; hand the editor the fresh table
        self.editor
            .set_highlight_data(style_buffer, self.styles.entries(self.dark_mode));
        self.editor.redraw();

        match kind {
            FormatKind::Bold => self.log("Bold toggled."),
            FormatKind::Italic => self.log("Italic toggled."),
            FormatKind::Color(r, g, b) => {
                self.log(&format!("Text color changed to #{:02X}{:02X}{:02X}", r, g, b))
            }
        }
    }

    /// Prompt for a color, then apply it to the selection. Colors are only
    /// ever overwritten by another color, never removed.
    pub fn format_pick_color(&mut self) {
        let (r, g, b) = match dialog::color_chooser("Text Color", dialog::ColorMode::Byte) {
            Some(rgb) => rgb,
            None => return,
        };
        self.apply_to_selection(FormatKind::Color(r, g, b));
    }

    // --- View ---

    /// Flip dark/light mode across every chrome widget and rebuild the
    /// style table so the default foreground tracks the theme for all
    /// tabs. Toggling twice restores the original appearance.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.log_panel,
            &mut self.status_label,
            self.dark_mode,
        );
        self.tab_bar.apply_theme(self.dark_mode);
        self.bind_active_buffer();
        self.log("Theme toggled.");
    }
}
