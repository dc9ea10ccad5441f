use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser};

fn run_chooser(kind: FileDialogType, title: &str, directory: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // blocks until closed
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(title: &str, directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, title, directory)
}

pub fn native_save_dialog(title: &str, directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, title, directory)
}
