use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::controllers::window_chrome::WindowChrome;
use crate::app::domain::{LabelKey, Language, Message, Theme};
use crate::ui::theme::to_color;

pub const TITLE_BAR_HEIGHT: i32 = 30;
const BUTTON_WIDTH: i32 = 40;

/// Replacement for the native window decorations: a draggable title strip
/// with minimize, maximize/restore and close buttons.
pub struct TitleBar {
    pub group: Flex,
    title: Frame,
    buttons: [Button; 3],
}

impl TitleBar {
    pub fn new(sender: &Sender<Message>, chrome: Rc<RefCell<WindowChrome>>) -> Self {
        let mut group = Flex::default().with_size(0, TITLE_BAR_HEIGHT);
        group.set_type(FlexType::Row);
        group.set_frame(FrameType::FlatBox);

        let mut title = Frame::default().with_label("PandaPad");
        title.set_align(Align::Left | Align::Inside);
        title.set_label_size(13);

        let mut minimize = Button::default().with_label("\u{2013}");
        let mut maximize = Button::default().with_label("\u{25a1}");
        let mut close = Button::default().with_label("\u{00d7}");
        for button in [&mut minimize, &mut maximize, &mut close] {
            button.set_frame(FrameType::FlatBox);
            button.clear_visible_focus();
            group.fixed(&*button, BUTTON_WIDTH);
        }
        group.end();

        minimize.emit(*sender, Message::WindowMinimize);
        maximize.emit(*sender, Message::WindowToggleMaximize);
        close.emit(*sender, Message::FileQuit);

        let sender = *sender;
        title.handle(move |frame, event| match event {
            Event::Push => {
                if app::event_clicks() {
                    sender.send(Message::WindowToggleMaximize);
                    return true;
                }
                if let Some(win) = frame.window() {
                    chrome
                        .borrow_mut()
                        .press((app::event_x_root(), app::event_y_root()), (win.x(), win.y()));
                }
                true
            }
            Event::Drag => {
                let target = chrome
                    .borrow()
                    .drag_to((app::event_x_root(), app::event_y_root()));
                if let (Some((x, y)), Some(mut win)) = (target, frame.window()) {
                    win.set_pos(x, y);
                }
                true
            }
            Event::Released => {
                chrome.borrow_mut().release();
                true
            }
            _ => false,
        });

        Self {
            group,
            title,
            buttons: [minimize, maximize, close],
        }
    }

    pub fn set_title(&mut self, text: &str) {
        self.title.set_label(text);
    }

    pub fn set_language(&mut self, lang: Language) {
        let [minimize, maximize, close] = &mut self.buttons;
        minimize.set_tooltip(lang.label(LabelKey::Minimize));
        maximize.set_tooltip(lang.label(LabelKey::Maximize));
        close.set_tooltip(lang.label(LabelKey::Close));
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        let palette = theme.chrome_palette();
        let bg = to_color(palette.background);
        let fg = to_color(palette.foreground);
        self.group.set_color(bg);
        self.title.set_label_color(fg);
        for button in &mut self.buttons {
            button.set_color(bg);
            button.set_label_color(fg);
            button.set_selection_color(bg.darker());
        }
        self.group.redraw();
    }
}
