use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    enums::Event,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::controllers::window_chrome::{WindowChrome, DEFAULT_BOUNDS};
use crate::app::domain::Message;
use super::file_tree::FileTree;
use super::tab_bar::{TabBar, TAB_BAR_HEIGHT};
use super::title_bar::{TitleBar, TITLE_BAR_HEIGHT};

const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub title_bar: TitleBar,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub body: Flex,
    pub text_editor: TextEditor,
    pub file_tree: FileTree,
}

/// Build the frameless main window:
/// title bar, menu bar, tab strip, then editor beside the (hidden) file tree.
pub fn build_main_window(sender: &Sender<Message>, chrome: Rc<RefCell<WindowChrome>>) -> MainWidgets {
    let b = DEFAULT_BOUNDS;
    let mut wind = Window::new(b.x, b.y, b.w, b.h, "PandaPad");
    wind.set_xclass("PandaPad");
    wind.set_border(false);

    let mut flex = Flex::new(0, 0, b.w, b.h, None);
    flex.set_type(FlexType::Column);

    let title_bar = TitleBar::new(sender, chrome);
    flex.fixed(&title_bar.group, TITLE_BAR_HEIGHT);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let tab_bar = TabBar::new(0, 0, b.w, *sender);
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());

    let mut file_tree = FileTree::new(sender);
    file_tree.tree.hide();
    body.fixed(&file_tree.tree, 0);

    body.end();
    flex.end();
    wind.end();
    wind.resizable(&flex);

    // Route the window manager's close request through the quit handler;
    // Escape alone must not close the editor.
    let quit_sender = *sender;
    wind.set_callback(move |_| {
        if fltk::app::event() == Event::Close {
            quit_sender.send(Message::FileQuit);
        }
    });

    MainWidgets {
        wind,
        flex,
        title_bar,
        menu,
        tab_bar,
        body,
        text_editor,
        file_tree,
    }
}
