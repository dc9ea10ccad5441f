use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    dialog,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::controllers::file_browser::FileBrowser;
use super::controllers::tabs::TabManager;
use super::controllers::window_chrome::{Bounds, WindowChrome};
use super::domain::{DocumentId, LabelKey, Language, Message, Theme};
use super::infrastructure::error::AppError;
use super::services::settings_store::SettingsStore;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::file_tree::{FileTree, FILE_TREE_WIDTH};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{build_menu, relabel_menu, sync_menu_state};
use crate::ui::tab_bar::TabBar;
use crate::ui::theme::{apply_chrome_theme, apply_editor_theme};
use crate::ui::title_bar::TitleBar;

/// The top-level window object. Owns every widget and controller and holds
/// one handler per `Message`. Handlers report failures in a dialog and leave
/// tabs, titles and settings unchanged.
pub struct AppState {
    pub tab_manager: TabManager<TextBuffer>,
    pub tab_bar: TabBar,
    pub editor: TextEditor,
    pub window: Window,
    pub flex: Flex,
    pub title_bar: TitleBar,
    pub menu: MenuBar,
    pub body: Flex,
    pub file_tree: FileTree,
    pub file_browser: FileBrowser,
    pub chrome: Rc<RefCell<WindowChrome>>,
    pub sender: Sender<Message>,
    pub settings: SettingsStore,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: SettingsStore,
        chrome: Rc<RefCell<WindowChrome>>,
    ) -> Self {
        let theme = settings.settings().theme();
        let lang = settings.settings().language();

        let mut tab_manager = TabManager::new(theme);
        tab_manager.create_tab();

        let MainWidgets {
            wind,
            flex,
            title_bar,
            mut menu,
            tab_bar,
            body,
            text_editor,
            file_tree,
        } = widgets;

        build_menu(&mut menu, &sender, lang);

        let mut state = Self {
            tab_manager,
            tab_bar,
            editor: text_editor,
            window: wind,
            flex,
            title_bar,
            menu,
            body,
            file_tree,
            file_browser: FileBrowser::with_default_root(),
            chrome,
            sender,
            settings,
            last_open_directory: None,
        };

        state.title_bar.set_language(lang);
        state.file_tree.set_language(lang);
        state.apply_theme();
        state.sync_menu();
        state.bind_active_buffer();
        state.update_window_title();
        state.rebuild_tab_bar();
        state
    }

    fn theme(&self) -> Theme {
        self.settings.settings().theme()
    }

    fn language(&self) -> Language {
        self.settings.settings().language()
    }

    /// Log a failure and show it in a blocking alert.
    fn report_error(&self, key: LabelKey, err: &AppError) {
        let message = format!("{}: {}", self.language().label(key), err);
        tracing::error!("{}", message);
        dialog::alert_default(&message);
    }

    /// Bind the active document's buffer and theme to the editor
    pub fn bind_active_buffer(&mut self) {
        if let Some(doc) = self.tab_manager.active_doc() {
            self.editor.set_buffer(doc.buffer.clone());
            self.editor.set_insert_position(doc.cursor_position);
            self.editor.show_insert_position();
            apply_editor_theme(&mut self.editor, doc.theme);
        }
    }

    /// Update the window title based on active document
    pub fn update_window_title(&mut self) {
        let label = match self.tab_manager.active_doc() {
            Some(doc) => format!("{} - PandaPad", doc.title),
            None => "PandaPad".to_string(),
        };
        self.window.set_label(&label);
        self.title_bar.set_title(&label);
    }

    pub fn rebuild_tab_bar(&mut self) {
        let active_id = self.tab_manager.active_id();
        self.tab_bar.rebuild(self.tab_manager.documents(), active_id);
    }

    fn sync_menu(&self) {
        sync_menu_state(
            &self.menu,
            self.language(),
            self.theme(),
            self.file_browser.is_visible(),
        );
    }

    /// Switch the editor to display a different document
    pub fn switch_to_document(&mut self, id: DocumentId) {
        if let Some(current) = self.tab_manager.active_doc_mut() {
            current.cursor_position = self.editor.insert_position();
        }
        self.tab_manager.set_active(id);
        self.bind_active_buffer();
        self.update_window_title();
        self.rebuild_tab_bar();
    }

    /// Refresh every view after the active tab or the tab list changed.
    fn refresh_tabs(&mut self) {
        self.bind_active_buffer();
        self.update_window_title();
        self.rebuild_tab_bar();
    }

    // --- Tabs ---

    pub fn file_new(&mut self) {
        if let Some(current) = self.tab_manager.active_doc_mut() {
            current.cursor_position = self.editor.insert_position();
        }
        self.tab_manager.create_tab();
        self.refresh_tabs();
    }

    pub fn close_tab(&mut self, id: DocumentId) {
        if self.tab_manager.close(id) {
            self.refresh_tabs();
        }
    }

    pub fn switch_to_next_tab(&mut self) {
        if let Some(next_id) = self.tab_manager.next_doc_id() {
            self.switch_to_document(next_id);
        }
    }

    pub fn switch_to_previous_tab(&mut self) {
        if let Some(prev_id) = self.tab_manager.prev_doc_id() {
            self.switch_to_document(prev_id);
        }
    }

    // --- File operations ---

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    /// Open `path` in a new tab. On failure no tab is created.
    pub fn open_file(&mut self, path: &Path) {
        if let Some(current) = self.tab_manager.active_doc_mut() {
            current.cursor_position = self.editor.insert_position();
        }
        match self.tab_manager.open_path(path) {
            Ok(_) => {
                self.remember_directory(path);
                self.refresh_tabs();
            }
            Err(e) => self.report_error(LabelKey::OpenFailed, &e),
        }
    }

    pub fn file_open(&mut self) {
        let dir = self
            .last_open_directory
            .clone()
            .unwrap_or_else(|| self.file_browser.root().to_path_buf());
        let title = self.language().label(LabelKey::OpenFileTitle);
        if let Some(path) = native_open_dialog(title, Some(&dir)) {
            self.open_file(&path);
        }
    }

    /// Open a file picked in the file browser pane.
    pub fn browse_open(&mut self, path: &Path) {
        self.open_file(path);
    }

    /// Save to the active document's file, or ask for one if it has none.
    pub fn file_save(&mut self) {
        let path = self
            .tab_manager
            .active_doc()
            .and_then(|doc| doc.file_path.clone());
        match path {
            Some(path) => self.save_to(&path),
            None => self.file_save_as(),
        }
    }

    pub fn file_save_as(&mut self) {
        let title = self.language().label(LabelKey::SaveFileTitle);
        if let Some(path) = native_save_dialog(title, self.last_open_directory.as_deref()) {
            self.save_to(&path);
        }
    }

    /// Write the active document to `path`; the tab is only retitled on success.
    fn save_to(&mut self, path: &Path) {
        match self.tab_manager.save_active_to(path) {
            Ok(()) => {
                self.remember_directory(path);
                self.update_window_title();
                self.rebuild_tab_bar();
            }
            Err(e) => self.report_error(LabelKey::SaveFailed, &e),
        }
    }

    // --- Theming and localization ---

    /// Persist `theme`, then apply it to every open document and the chrome.
    /// If the settings file cannot be written nothing changes.
    pub fn set_theme(&mut self, theme: Theme) {
        if let Err(e) = self.settings.update(|s| s.style.color_scheme = theme) {
            self.report_error(LabelKey::SettingsFailed, &e);
            self.sync_menu();
            return;
        }
        tracing::info!(theme = theme.as_str(), "Theme changed");
        self.tab_manager.broadcast_theme(theme);
        self.apply_theme();
        self.sync_menu();
    }

    fn apply_theme(&mut self) {
        let theme = self.theme();
        apply_chrome_theme(&mut self.window, &mut self.menu, theme);
        self.title_bar.apply_theme(theme);
        self.tab_bar.apply_theme(theme);
        self.file_tree.apply_theme(theme);
        if let Some(doc) = self.tab_manager.active_doc() {
            apply_editor_theme(&mut self.editor, doc.theme);
        }
    }

    /// Persist `lang` and relabel the existing menu and chrome in place.
    pub fn set_language(&mut self, lang: Language) {
        let previous = self.language();
        if let Err(e) = self.settings.update(|s| s.lang.lang = lang) {
            self.report_error(LabelKey::SettingsFailed, &e);
            self.sync_menu();
            return;
        }
        tracing::info!(lang = lang.code(), "Language changed");
        if previous != lang {
            relabel_menu(&mut self.menu, previous, lang);
        }
        self.title_bar.set_language(lang);
        self.file_tree.set_language(lang);
        self.sync_menu();
    }

    // --- File browser ---

    pub fn toggle_file_browser(&mut self) {
        if self.file_browser.toggle() {
            let root = self.file_browser.root().to_path_buf();
            self.file_tree.set_root(&root);
            self.file_tree.tree.show();
            self.body.fixed(&self.file_tree.tree, FILE_TREE_WIDTH);
        } else {
            self.file_tree.tree.hide();
            self.body.fixed(&self.file_tree.tree, 0);
        }
        self.body.layout();
        self.body.redraw();
        self.sync_menu();
    }

    // --- Window chrome ---

    pub fn minimize(&mut self) {
        self.window.iconize();
    }

    pub fn toggle_maximize(&mut self) {
        let current = Bounds::new(self.window.x(), self.window.y(), self.window.w(), self.window.h());
        let (x, y, w, h) = app::screen_work_area(self.window.screen_num());
        let target = self
            .chrome
            .borrow_mut()
            .toggle_maximize(current, Bounds::new(x, y, w, h));
        self.window.resize(target.x, target.y, target.w, target.h);
        self.window.redraw();
    }

    // --- Help ---

    pub fn show_about(&mut self) {
        show_about_dialog(self.language(), self.theme());
    }
}
