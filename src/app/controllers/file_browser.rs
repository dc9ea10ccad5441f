use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Visibility and root of the file-browser pane.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    visible: bool,
    root: PathBuf,
}

impl FileBrowser {
    pub fn new(root: PathBuf) -> Self {
        Self {
            visible: false,
            root,
        }
    }

    /// Rooted at the user's home directory, or the filesystem root without one.
    pub fn with_default_root() -> Self {
        Self::new(default_root())
    }

    /// Flip visibility. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "Toggled file browser");
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

pub fn default_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Only regular files get the "Open" action; directories and stale entries don't.
pub fn is_openable(path: &Path) -> bool {
    path.is_file()
}

/// List a directory for the tree: hidden entries skipped, directories first,
/// then case-insensitive by name.
pub fn list_dir(path: &Path) -> Result<Vec<DirEntry>> {
    let entries = fs::read_dir(path).map_err(|e| AppError::io(path, e))?;
    let mut children: Vec<DirEntry> = entries
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| {
            let path = e.path();
            DirEntry {
                name: e.file_name().to_string_lossy().into_owned(),
                is_dir: path.is_dir(),
                path,
            }
        })
        .collect();

    children.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
    Ok(children)
}
