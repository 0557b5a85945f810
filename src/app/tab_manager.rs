use super::document::{Document, DocumentId};

/// Registry of open tabs: owns every [`Document`] and tracks which one is
/// selected. Pure bookkeeping - widget binding is the coordinator's job.
pub struct TabManager {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
    next_id: u64,
    untitled_counter: u32,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            next_id: 1,
            untitled_counter: 0,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocate a new empty document titled "Untitled" (then "Untitled 2",
    /// ...) and make it the selected tab. Always succeeds.
    pub fn create_tab(&mut self) -> DocumentId {
        self.untitled_counter += 1;
        let id = self.next_document_id();
        let doc = Document::new_untitled(id, self.untitled_counter);
        self.documents.push(doc);
        self.active_id = Some(id);
        id
    }

    /// Create a tab pre-populated with the content of a file and make it
    /// the selected tab. Reading the file is the caller's concern.
    pub fn create_from_file(&mut self, path: String, content: &str) -> DocumentId {
        let id = self.next_document_id();
        let doc = Document::new_from_file(id, path, content);
        self.documents.push(doc);
        self.active_id = Some(id);
        id
    }

    pub fn active_doc(&self) -> Option<&Document> {
        let active_id = self.active_id?;
        self.documents.iter().find(|d| d.id == active_id)
    }

    pub fn active_doc_mut(&mut self) -> Option<&mut Document> {
        let active_id = self.active_id?;
        self.documents.iter_mut().find(|d| d.id == active_id)
    }

    pub fn set_active(&mut self, id: DocumentId) {
        if self.documents.iter().any(|d| d.id == id) {
            self.active_id = Some(id);
        }
    }

    /// Remove a document by id, activating the nearest neighbor. Cleans up
    /// the buffers to release their memory immediately.
    pub fn remove(&mut self, id: DocumentId) {
        let idx = match self.documents.iter().position(|d| d.id == id) {
            Some(i) => i,
            None => return,
        };
        let mut doc = self.documents.remove(idx);
        doc.cleanup();

        if self.active_id == Some(id) {
            if self.documents.is_empty() {
                self.active_id = None;
            } else {
                let new_idx = if idx >= self.documents.len() {
                    self.documents.len() - 1
                } else {
                    idx
                };
                self.active_id = Some(self.documents[new_idx].id);
            }
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    /// Find a document by its backing file path.
    pub fn find_by_path(&self, path: &str) -> Option<DocumentId> {
        self.documents
            .iter()
            .find(|d| d.file_path.as_deref() == Some(path))
            .map(|d| d.id)
    }

    pub fn doc_by_id(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn doc_by_id_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }

    /// Id of the tab after the active one, wrapping around.
    pub fn next_doc_id(&self) -> Option<DocumentId> {
        let active_id = self.active_id?;
        let idx = self.documents.iter().position(|d| d.id == active_id)?;
        let next_idx = (idx + 1) % self.documents.len();
        Some(self.documents[next_idx].id)
    }

    /// Id of the tab before the active one, wrapping around.
    pub fn prev_doc_id(&self) -> Option<DocumentId> {
        let active_id = self.active_id?;
        let idx = self.documents.iter().position(|d| d.id == active_id)?;
        let prev_idx = if idx == 0 {
            self.documents.len() - 1
        } else {
            idx - 1
        };
        Some(self.documents[prev_idx].id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_own_independent_buffers() {
        let mut tabs = TabManager::new();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        let c = tabs.create_tab();

        tabs.doc_by_id_mut(b)
            .unwrap()
            .buffer
            .set_text("only in b");

        assert_eq!(tabs.doc_by_id(a).unwrap().buffer.text(), "");
        assert_eq!(tabs.doc_by_id(b).unwrap().buffer.text(), "only in b");
        assert_eq!(tabs.doc_by_id(c).unwrap().buffer.text(), "");
        assert_eq!(tabs.count(), 3);
    }

    #[test]
    fn test_untitled_numbering() {
        let mut tabs = TabManager::new();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        assert_eq!(tabs.doc_by_id(a).unwrap().display_name, "Untitled");
        assert_eq!(tabs.doc_by_id(b).unwrap().display_name, "Untitled 2");
    }

    #[test]
    fn test_create_from_file_sets_title_and_path() {
        let mut tabs = TabManager::new();
        let id = tabs.create_from_file("/tmp/report.txt".to_string(), "body");
        let doc = tabs.doc_by_id(id).unwrap();
        assert_eq!(doc.display_name, "report.txt");
        assert_eq!(doc.file_path.as_deref(), Some("/tmp/report.txt"));
        assert_eq!(doc.buffer.text(), "body");
        // Style buffer covers every character with the plain style
        assert_eq!(doc.style_buffer.text(), "AAAA");
        assert_eq!(tabs.active_id(), Some(id));
    }

    #[test]
    fn test_selecting_a_tab_does_not_touch_content() {
        let mut tabs = TabManager::new();
        let a = tabs.create_from_file("/tmp/a.txt".to_string(), "aaa");
        let b = tabs.create_tab();
        tabs.set_active(a);
        tabs.set_active(b);
        assert_eq!(tabs.doc_by_id(a).unwrap().buffer.text(), "aaa");
    }

    #[test]
    fn test_remove_activates_nearest_neighbor() {
        let mut tabs = TabManager::new();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        let c = tabs.create_tab();

        tabs.set_active(b);
        tabs.remove(b);
        // The tab that slid into b's index is activated
        assert_eq!(tabs.active_id(), Some(c));

        tabs.set_active(c);
        tabs.remove(c);
        assert_eq!(tabs.active_id(), Some(a));

        tabs.remove(a);
        assert_eq!(tabs.active_id(), None);
        assert_eq!(tabs.count(), 0);
    }

    #[test]
    fn test_find_by_path() {
        let mut tabs = TabManager::new();
        let id = tabs.create_from_file("/tmp/x.txt".to_string(), "");
        tabs.create_tab();
        assert_eq!(tabs.find_by_path("/tmp/x.txt"), Some(id));
        assert_eq!(tabs.find_by_path("/tmp/other.txt"), None);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut tabs = TabManager::new();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        let c = tabs.create_tab();

        tabs.set_active(c);
        assert_eq!(tabs.next_doc_id(), Some(a));
        assert_eq!(tabs.prev_doc_id(), Some(b));

        tabs.set_active(a);
        assert_eq!(tabs.prev_doc_id(), Some(c));
        assert_eq!(tabs.next_doc_id(), Some(b));
    }
}
