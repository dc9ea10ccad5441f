use std::path::{Path, PathBuf};

use crate::app::domain::document::{Document, DocumentId};
use crate::app::domain::settings::Theme;
use crate::app::infrastructure::buffer::TextStore;
use crate::app::infrastructure::error::Result;
use crate::app::services::file_io;

/// Closing never takes the collection below this many tabs.
pub const MIN_TABS: usize = 1;

/// Ordered collection of open documents with one active tab.
///
/// Untitled documents are numbered by a running counter that is never
/// reused, so titles stay unique even after tabs are closed.
pub struct TabManager<B> {
    documents: Vec<Document<B>>,
    active_id: Option<DocumentId>,
    next_id: u64,
    untitled_counter: u32,
    default_theme: Theme,
}

impl<B: TextStore + Default> TabManager<B> {
    pub fn new(default_theme: Theme) -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            next_id: 1,
            untitled_counter: 0,
            default_theme,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an empty "New Text N" document in the default theme and activate it.
    pub fn create_tab(&mut self) -> DocumentId {
        self.untitled_counter += 1;
        let id = self.next_document_id();
        let doc = Document::new_untitled(id, self.untitled_counter, self.default_theme);
        self.documents.push(doc);
        self.active_id = Some(id);
        tracing::debug!(?id, "Created tab");
        id
    }

    pub fn add_from_file(&mut self, path: PathBuf, content: &str) -> DocumentId {
        let id = self.next_document_id();
        let doc = Document::new_from_file(id, path, content, self.default_theme);
        self.documents.push(doc);
        self.active_id = Some(id);
        id
    }

    /// Read `path` and open it in a new, active tab titled with its base name.
    /// The file is read first, so on error no tab is created.
    pub fn open_path(&mut self, path: &Path) -> Result<DocumentId> {
        let content = file_io::read_text(path)?;
        let id = self.add_from_file(path.to_path_buf(), &content);
        tracing::info!(path = %path.display(), "Opened file");
        Ok(id)
    }

    /// Write the active document to `path` and retitle it. The tab is only
    /// retitled once the write has succeeded. No-op without an active tab.
    pub fn save_active_to(&mut self, path: &Path) -> Result<()> {
        let Some(doc) = self.active_doc_mut() else {
            return Ok(());
        };
        file_io::write_text(path, &doc.text())?;
        doc.set_backing_path(path);
        tracing::info!(path = %path.display(), "Saved file");
        Ok(())
    }
}

impl<B: TextStore> TabManager<B> {
    pub fn active_doc(&self) -> Option<&Document<B>> {
        let active_id = self.active_id?;
        self.documents.iter().find(|d| d.id == active_id)
    }

    pub fn active_doc_mut(&mut self) -> Option<&mut Document<B>> {
        let active_id = self.active_id?;
        self.documents.iter_mut().find(|d| d.id == active_id)
    }

    /// Make `id` the visible tab. Unknown ids are ignored.
    pub fn set_active(&mut self, id: DocumentId) {
        if self.documents.iter().any(|d| d.id == id) {
            self.active_id = Some(id);
        }
    }

    /// Close the tab `id`, activating its nearest neighbour if it was active.
    /// Returns false (and changes nothing) for unknown ids or when only
    /// `MIN_TABS` remain.
    pub fn close(&mut self, id: DocumentId) -> bool {
        if self.documents.len() <= MIN_TABS {
            return false;
        }
        let idx = match self.documents.iter().position(|d| d.id == id) {
            Some(i) => i,
            None => return false,
        };
        let mut doc = self.documents.remove(idx);
        doc.cleanup();

        if self.active_id == Some(id) {
            let new_idx = idx.min(self.documents.len() - 1);
            self.active_id = Some(self.documents[new_idx].id);
        }
        tracing::debug!(?id, "Closed tab");
        true
    }

    pub fn close_active(&mut self) -> bool {
        match self.active_id {
            Some(id) => self.close(id),
            None => false,
        }
    }

    /// Set the default theme for new tabs and apply it to every open document.
    pub fn broadcast_theme(&mut self, theme: Theme) {
        self.default_theme = theme;
        for doc in &mut self.documents {
            doc.theme = theme;
        }
    }

    pub fn default_theme(&self) -> Theme {
        self.default_theme
    }

    pub fn documents(&self) -> &[Document<B>] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn active_index(&self) -> Option<usize> {
        let active_id = self.active_id?;
        self.documents.iter().position(|d| d.id == active_id)
    }

    pub fn doc_by_id(&self, id: DocumentId) -> Option<&Document<B>> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Get the next document id (for tab cycling)
    pub fn next_doc_id(&self) -> Option<DocumentId> {
        let idx = self.active_index()?;
        let next_idx = (idx + 1) % self.documents.len();
        Some(self.documents[next_idx].id)
    }

    /// Get the previous document id (for tab cycling)
    pub fn prev_doc_id(&self) -> Option<DocumentId> {
        let idx = self.active_index()?;
        let prev_idx = if idx == 0 {
            self.documents.len() - 1
        } else {
            idx - 1
        };
        Some(self.documents[prev_idx].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn manager() -> TabManager<String> {
        TabManager::new(Theme::Dark)
    }

    fn titles(tabs: &TabManager<String>) -> Vec<String> {
        tabs.documents().iter().map(|d| d.title.clone()).collect()
    }

    #[test]
    fn test_create_tabs_numbers_titles() {
        let mut tabs = manager();
        for _ in 0..4 {
            tabs.create_tab();
        }
        assert_eq!(tabs.count(), 4);
        assert_eq!(
            titles(&tabs),
            vec!["New Text 1", "New Text 2", "New Text 3", "New Text 4"]
        );
    }

    #[test]
    fn test_create_activates_new_tab() {
        let mut tabs = manager();
        tabs.create_tab();
        let second = tabs.create_tab();
        assert_eq!(tabs.active_id(), Some(second));
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_titles_never_reused_after_close() {
        let mut tabs = manager();
        tabs.create_tab();
        let second = tabs.create_tab();
        tabs.create_tab();
        assert!(tabs.close(second));
        tabs.create_tab();
        assert_eq!(titles(&tabs), vec!["New Text 1", "New Text 3", "New Text 4"]);
    }

    #[test]
    fn test_close_does_not_renumber() {
        let mut tabs = manager();
        let first = tabs.create_tab();
        tabs.create_tab();
        tabs.close(first);
        assert_eq!(titles(&tabs), vec!["New Text 2"]);
    }

    #[test]
    fn test_close_last_tab_is_noop() {
        let mut tabs = manager();
        let only = tabs.create_tab();
        assert!(!tabs.close(only));
        assert!(!tabs.close_active());
        assert_eq!(tabs.count(), 1);
        assert_eq!(tabs.active_id(), Some(only));
    }

    #[test]
    fn test_close_on_empty_collection() {
        let mut tabs = manager();
        assert!(!tabs.close_active());
        assert_eq!(tabs.count(), 0);
        tabs.create_tab();
        assert_eq!(tabs.count(), 1);
    }

    #[test]
    fn test_close_active_picks_neighbour() {
        let mut tabs = manager();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        let c = tabs.create_tab();

        tabs.set_active(b);
        assert!(tabs.close_active());
        assert_eq!(tabs.active_id(), Some(c));

        assert!(tabs.close(c));
        assert_eq!(tabs.active_id(), Some(a));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut tabs = manager();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        assert!(tabs.close(a));
        assert_eq!(tabs.active_id(), Some(b));
        assert!(!tabs.close(a));
    }

    #[test]
    fn test_set_active_ignores_unknown_id() {
        let mut tabs = manager();
        let a = tabs.create_tab();
        tabs.set_active(DocumentId(999));
        assert_eq!(tabs.active_id(), Some(a));
    }

    #[test]
    fn test_active_index_always_valid() {
        let mut tabs = manager();
        let ids: Vec<_> = (0..5).map(|_| tabs.create_tab()).collect();
        for id in ids.iter().rev() {
            tabs.close(*id);
            let idx = tabs.active_index().unwrap();
            assert!(idx < tabs.count());
        }
        assert_eq!(tabs.count(), 1);
    }

    #[test]
    fn test_open_path_reads_content_and_title() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first line\nsecond line").unwrap();

        let mut tabs = manager();
        tabs.create_tab();
        let id = tabs.open_path(&path).unwrap();

        assert_eq!(tabs.count(), 2);
        assert_eq!(tabs.active_id(), Some(id));
        let doc = tabs.active_doc().unwrap();
        assert_eq!(doc.text(), "first line\nsecond line");
        assert_eq!(doc.title, "notes.txt");
        assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_open_missing_file_changes_nothing() {
        let dir = tempdir().unwrap();
        let mut tabs = manager();
        let only = tabs.create_tab();

        assert!(tabs.open_path(&dir.path().join("nope.txt")).is_err());
        assert_eq!(tabs.count(), 1);
        assert_eq!(tabs.active_id(), Some(only));
    }

    #[test]
    fn test_save_then_open_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let text = "Привет\n  indented\r\nend";

        let mut tabs = manager();
        tabs.create_tab();
        tabs.active_doc_mut().unwrap().set_text(text);
        tabs.save_active_to(&path).unwrap();
        assert_eq!(tabs.active_doc().unwrap().title, "out.txt");

        let id = tabs.open_path(&path).unwrap();
        assert_eq!(tabs.doc_by_id(id).unwrap().text(), text);
    }

    #[test]
    fn test_failed_save_keeps_title() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.txt");

        let mut tabs = manager();
        tabs.create_tab();
        tabs.active_doc_mut().unwrap().set_text("data");

        assert!(tabs.save_active_to(&path).is_err());
        let doc = tabs.active_doc().unwrap();
        assert_eq!(doc.title, "New Text 1");
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_broadcast_theme_reaches_every_tab() {
        let mut tabs = manager();
        tabs.create_tab();
        tabs.create_tab();

        tabs.broadcast_theme(Theme::Dark);
        tabs.broadcast_theme(Theme::Light);
        assert!(tabs.documents().iter().all(|d| d.theme == Theme::Light));

        let later = tabs.create_tab();
        assert_eq!(tabs.doc_by_id(later).unwrap().theme, Theme::Light);
        assert_eq!(tabs.default_theme(), Theme::Light);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut tabs = manager();
        let a = tabs.create_tab();
        let b = tabs.create_tab();
        let c = tabs.create_tab();

        assert_eq!(tabs.next_doc_id(), Some(a));
        assert_eq!(tabs.prev_doc_id(), Some(b));
        tabs.set_active(a);
        assert_eq!(tabs.prev_doc_id(), Some(c));
    }
}
