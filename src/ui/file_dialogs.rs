use fltk::dialog;

/// Modal open dialog. Returns `None` when the user cancels.
pub fn native_open_dialog(start_dir: Option<&str>) -> Option<String> {
    dialog::file_chooser("Open File", "*.txt", start_dir.unwrap_or("."), false)
}

/// Modal save dialog for the given pattern (e.g. `"*.pdf"`). Returns `None`
/// when the user cancels.
pub fn native_save_dialog(pattern: &str, start_dir: Option<&str>) -> Option<String> {
    dialog::file_chooser("Save As", pattern, start_dir.unwrap_or("."), false)
}
