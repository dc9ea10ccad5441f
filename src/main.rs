use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use panda_pad::app::controllers::window_chrome::WindowChrome;
use panda_pad::app::infrastructure::logging;
use panda_pad::app::state::AppState;
use panda_pad::app::{Message, SettingsStore};
use panda_pad::ui::main_window::build_main_window;

fn main() {
    logging::init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = SettingsStore::load();
    let chrome = Rc::new(RefCell::new(WindowChrome::new()));

    let widgets = build_main_window(&sender, chrome.clone());
    let mut state = AppState::new(widgets, sender, settings, chrome);
    state.window.show();
    tracing::info!("Starting PandaPad v{}", env!("CARGO_PKG_VERSION"));

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::FileNew => state.file_new(),
            Message::FileOpen => state.file_open(),
            Message::FileSave => state.file_save(),
            Message::FileSaveAs => state.file_save_as(),
            Message::FileQuit => {
                tracing::info!("PandaPad exiting");
                app.quit();
            }
            Message::TabSwitch(id) => state.switch_to_document(id),
            Message::TabClose(id) => state.close_tab(id),
            Message::TabNext => state.switch_to_next_tab(),
            Message::TabPrevious => state.switch_to_previous_tab(),
            Message::SetTheme(theme) => state.set_theme(theme),
            Message::SetLanguage(lang) => state.set_language(lang),
            Message::ToggleFileBrowser => state.toggle_file_browser(),
            Message::BrowserOpen(path) => state.browse_open(&path),
            Message::WindowMinimize => state.minimize(),
            Message::WindowToggleMaximize => state.toggle_maximize(),
            Message::ShowAbout => state.show_about(),
        }
    }
}
