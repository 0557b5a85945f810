use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::format::PLAIN_STYLE;
use super::messages::Message;
use super::text_ops::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One open tab: editable text plus a parallel style buffer that holds one
/// style character per text character.
pub struct Document {
    pub id: DocumentId,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub file_path: Option<String>,
    pub display_name: String,
    pub cursor_position: i32,
}

impl Document {
    pub fn new_untitled(id: DocumentId, counter: u32) -> Self {
        let display_name = if counter == 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled {}", counter)
        };

        Self {
            id,
            buffer: TextBuffer::default(),
            style_buffer: TextBuffer::default(),
            file_path: None,
            display_name,
            cursor_position: 0,
        }
    }

    pub fn new_from_file(id: DocumentId, path: String, content: &str) -> Self {
        let display_name = extract_filename(&path);

        let mut buffer = TextBuffer::default();
        let mut style_buffer = TextBuffer::default();
        buffer.set_text(content);
        style_buffer.set_text(&plain_run(content.len()));

        Self {
            id,
            buffer,
            style_buffer,
            file_path: Some(path),
            display_name,
            cursor_position: 0,
        }
    }

    /// Keep the style buffer aligned with the text buffer on every edit and
    /// notify the dispatch loop so derived views can refresh. Inserted text
    /// starts out plain; deletions drop the matching style range, so format
    /// ranges never go stale.
    pub fn attach_change_listener(&mut self, sender: Sender<Message>) {
        let mut style_buf = self.style_buffer.clone();
        let doc_id = self.id;
        self.buffer
            .add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    if inserted > 0 {
                        style_buf.insert(pos, &plain_run(inserted as usize));
                    }
                    if deleted > 0 {
                        style_buf.remove(pos, pos + deleted);
                    }
                    sender.send(Message::BufferModified(doc_id));
                }
            });
    }

    pub fn update_display_name(&mut self) {
        if let Some(ref path) = self.file_path {
            self.display_name = extract_filename(path);
        }
    }

    /// Free buffer memory immediately when a tab closes.
    pub fn cleanup(&mut self) {
        self.buffer.set_text("");
        self.style_buffer.set_text("");
    }
}

fn plain_run(len: usize) -> String {
    std::iter::repeat(PLAIN_STYLE).take(len).collect()
}
