use std::path::{Path, PathBuf};

use super::settings::Theme;
use crate::app::infrastructure::buffer::TextStore;
use crate::app::services::text_ops::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One tab's editable text plus its title, backing file and theme.
///
/// `B` is the text storage. The application uses FLTK's `TextBuffer`;
/// tests use a plain `String`.
pub struct Document<B> {
    pub id: DocumentId,
    pub title: String,
    pub file_path: Option<PathBuf>,
    pub theme: Theme,
    pub buffer: B,
    pub cursor_position: i32,
}

impl<B: TextStore + Default> Document<B> {
    pub fn new_untitled(id: DocumentId, counter: u32, theme: Theme) -> Self {
        Self {
            id,
            title: format!("New Text {}", counter),
            file_path: None,
            theme,
            buffer: B::default(),
            cursor_position: 0,
        }
    }

    pub fn new_from_file(id: DocumentId, path: PathBuf, content: &str, theme: Theme) -> Self {
        let mut buffer = B::default();
        buffer.set_text(content);
        Self {
            id,
            title: extract_filename(&path),
            file_path: Some(path),
            theme,
            buffer,
            cursor_position: 0,
        }
    }
}

impl<B: TextStore> Document<B> {
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    /// Record the file this document was saved to and retitle it.
    pub fn set_backing_path(&mut self, path: &Path) {
        self.title = extract_filename(path);
        self.file_path = Some(path.to_path_buf());
    }

    /// Release the text eagerly when the tab closes.
    pub fn cleanup(&mut self) {
        self.buffer.set_text("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_title() {
        let doc: Document<String> = Document::new_untitled(DocumentId(1), 7, Theme::Light);
        assert_eq!(doc.title, "New Text 7");
        assert_eq!(doc.theme, Theme::Light);
        assert!(doc.file_path.is_none());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_from_file_uses_base_name() {
        let doc: Document<String> = Document::new_from_file(
            DocumentId(2),
            PathBuf::from("/home/user/notes.txt"),
            "hello",
            Theme::Dark,
        );
        assert_eq!(doc.title, "notes.txt");
        assert_eq!(doc.text(), "hello");
        assert_eq!(doc.file_path.as_deref(), Some(Path::new("/home/user/notes.txt")));
    }

    #[test]
    fn test_set_backing_path_retitles() {
        let mut doc: Document<String> = Document::new_untitled(DocumentId(1), 1, Theme::Dark);
        doc.set_backing_path(Path::new("/tmp/out.md"));
        assert_eq!(doc.title, "out.md");
        assert_eq!(doc.file_path.as_deref(), Some(Path::new("/tmp/out.md")));
    }

    #[test]
    fn test_cleanup_clears_text() {
        let mut doc: Document<String> = Document::new_untitled(DocumentId(1), 1, Theme::Dark);
        doc.set_text("abc");
        doc.cleanup();
        assert_eq!(doc.text(), "");
    }
}
