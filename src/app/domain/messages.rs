use std::path::PathBuf;

use super::document::DocumentId;
use super::language::Language;
use super::settings::Theme;

/// All messages that can be sent through the FLTK channel.
/// Each menu item, tab bar click and title bar button sends one of these;
/// the dispatch loop in main hands each to a single `AppState` handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,

    // Tabs
    TabSwitch(DocumentId),
    TabClose(DocumentId),
    TabNext,
    TabPrevious,

    // View
    SetTheme(Theme),
    SetLanguage(Language),
    ToggleFileBrowser,
    BrowserOpen(PathBuf),

    // Window chrome
    WindowMinimize,
    WindowToggleMaximize,

    // Help
    ShowAbout,
}
