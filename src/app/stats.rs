//! Derived counts shown in the status bar.

/// Line count of the buffer text.
///
/// 1-indexed; the final unterminated line counts, so an empty buffer still
/// has one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Render the status bar label for the given buffer text.
pub fn status_line(text: &str) -> String {
    format!("Lines: {} | Words: {}", line_count(text), word_count(text))
}
