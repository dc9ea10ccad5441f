use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::{Document, DocumentId, Message, Theme};

pub const TAB_BAR_HEIGHT: i32 = 30;

const MIN_TAB_WIDTH: i32 = 60;
const MAX_TAB_WIDTH: i32 = 200;
const CLOSE_BTN_SIZE: i32 = 14;
const CLOSE_BTN_MARGIN: i32 = 6;
const TAB_H_PADDING: i32 = 10;
const CORNER_RADIUS: i32 = 6;
const TAB_GAP: i32 = 1;
const PLUS_BTN_WIDTH: i32 = 28;
const PLUS_BTN_MARGIN: i32 = 4;

struct TabInfo {
    id: DocumentId,
    title: String,
    is_active: bool,
}

enum HitResult {
    Tab { index: usize, is_close: bool },
    PlusButton,
    None,
}

struct TabBarState {
    tabs: Vec<TabInfo>,
    theme: Theme,
    hover_tab_index: Option<usize>,
    hover_close: bool,
    hover_plus: bool,
    sender: Sender<Message>,
}

/// Custom-drawn tab strip. Clicks are reported as messages; the strip
/// itself holds only a snapshot of titles for drawing.
pub struct TabBar {
    pub widget: Widget,
    state: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabBarState {
            tabs: Vec::new(),
            theme: Theme::default(),
            hover_tab_index: None,
            hover_close: false,
            hover_plus: false,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, TAB_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_tab_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_tab_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn rebuild<B>(&mut self, documents: &[Document<B>], active_id: Option<DocumentId>) {
        let mut st = self.state.borrow_mut();
        st.tabs = documents
            .iter()
            .map(|doc| TabInfo {
                id: doc.id,
                title: doc.title.clone(),
                is_active: active_id == Some(doc.id),
            })
            .collect();
        st.hover_tab_index = None;
        st.hover_close = false;
        drop(st);
        self.widget.redraw();
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.state.borrow_mut().theme = theme;
        self.widget.redraw();
    }
}

// --- Layout ---

fn tab_width(widget_w: i32, count: usize) -> i32 {
    if count == 0 {
        return MAX_TAB_WIDTH;
    }
    let count = count as i32;
    let available = widget_w - PLUS_BTN_WIDTH - PLUS_BTN_MARGIN - TAB_GAP * (count - 1);
    (available / count).clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH)
}

fn tab_x(index: usize, tab_width: i32) -> i32 {
    index as i32 * (tab_width + TAB_GAP)
}

fn plus_x(count: usize, tab_width: i32) -> i32 {
    tab_x(count, tab_width) + PLUS_BTN_MARGIN
}

fn hit_test(st: &TabBarState, wid: &Widget, mx: i32, my: i32) -> HitResult {
    let wy = wid.y();
    if my < wy || my >= wy + TAB_BAR_HEIGHT || mx < 0 {
        return HitResult::None;
    }

    let width = tab_width(wid.w(), st.tabs.len());
    let px = plus_x(st.tabs.len(), width);
    if mx >= px && mx < px + PLUS_BTN_WIDTH {
        return HitResult::PlusButton;
    }

    let index = (mx / (width + TAB_GAP)) as usize;
    if index >= st.tabs.len() {
        return HitResult::None;
    }
    let x = tab_x(index, width);
    let close_x = x + width - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
    let close_y = wy + (TAB_BAR_HEIGHT - CLOSE_BTN_SIZE) / 2;
    let is_close = mx >= close_x
        && mx <= close_x + CLOSE_BTN_SIZE
        && my >= close_y
        && my <= close_y + CLOSE_BTN_SIZE;
    HitResult::Tab { index, is_close }
}

// --- Colors ---

struct ThemeColors {
    bar_bg: Color,
    active_bg: Color,
    inactive_bg: Color,
    active_text: Color,
    inactive_text: Color,
    close_hover_bg: Color,
    plus_hover_bg: Color,
}

fn theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors {
            bar_bg: Color::from_rgb(0x42, 0x42, 0x42),
            active_bg: Color::from_rgb(0x30, 0x30, 0x30),
            inactive_bg: Color::from_rgb(0x38, 0x38, 0x38),
            active_text: Color::from_rgb(255, 255, 255),
            inactive_text: Color::from_rgb(170, 170, 170),
            close_hover_bg: Color::from_rgb(80, 80, 80),
            plus_hover_bg: Color::from_rgb(80, 80, 80),
        },
        Theme::Light => ThemeColors {
            bar_bg: Color::from_rgb(225, 225, 225),
            active_bg: Color::from_rgb(255, 255, 255),
            inactive_bg: Color::from_rgb(240, 240, 240),
            active_text: Color::from_rgb(0, 0, 0),
            inactive_text: Color::from_rgb(80, 80, 80),
            close_hover_bg: Color::from_rgb(200, 200, 200),
            plus_hover_bg: Color::from_rgb(200, 200, 200),
        },
    }
}

// --- Truncation ---

fn truncate_to_fit(text: &str, max_width: i32) -> String {
    if max_width <= 0 {
        return String::new();
    }
    draw::set_font(Font::Helvetica, 12);
    let (tw, _) = draw::measure(text, true);
    if tw <= max_width {
        return text.to_string();
    }

    let ellipsis = "...";
    let (ew, _) = draw::measure(ellipsis, true);
    if ew >= max_width {
        return ellipsis.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    for len in (1..chars.len()).rev() {
        let candidate: String = chars[..len].iter().collect();
        let full = format!("{candidate}{ellipsis}");
        let (fw, _) = draw::measure(&full, true);
        if fw <= max_width {
            return full;
        }
    }
    ellipsis.to_string()
}

// --- Drawing ---

fn draw_rounded_top_rect(x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
    draw::set_draw_color(color);
    draw::draw_rectf(x, y + r, w, h - r);
    draw::draw_rectf(x + r, y, w - 2 * r, r);
    draw::draw_pie(x, y, 2 * r, 2 * r, 90.0, 180.0);
    draw::draw_pie(x + w - 2 * r, y, 2 * r, 2 * r, 0.0, 90.0);
}

fn draw_tab_bar(wid: &Widget, st: &TabBarState) {
    let wx = wid.x();
    let wy = wid.y();
    let wh = wid.h();
    let colors = theme_colors(st.theme);
    let width = tab_width(wid.w(), st.tabs.len());

    draw::set_draw_color(colors.bar_bg);
    draw::draw_rectf(wx, wy, wid.w(), wh);

    for (index, tab) in st.tabs.iter().enumerate() {
        let tx = wx + tab_x(index, width);

        if tab.is_active {
            draw_rounded_top_rect(tx, wy, width, wh, CORNER_RADIUS, colors.active_bg);
        } else {
            draw_rounded_top_rect(tx, wy + 2, width, wh - 2, CORNER_RADIUS, colors.inactive_bg);
        }

        let text_color = if tab.is_active {
            colors.active_text
        } else {
            colors.inactive_text
        };
        let text_area_width =
            width - TAB_H_PADDING - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE - TAB_H_PADDING;
        let display_text = truncate_to_fit(&tab.title, text_area_width);

        draw::set_draw_color(text_color);
        draw::set_font(Font::Helvetica, 12);
        draw::draw_text(&display_text, tx + TAB_H_PADDING, wy + (wh + 12) / 2);

        // Close button
        let close_x = tx + width - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
        let close_y = wy + (wh - CLOSE_BTN_SIZE) / 2;
        let is_hovered_tab = st.hover_tab_index == Some(index);
        if is_hovered_tab && st.hover_close {
            draw::set_draw_color(colors.close_hover_bg);
            draw::draw_rectf(close_x - 2, close_y - 2, CLOSE_BTN_SIZE + 4, CLOSE_BTN_SIZE + 4);
        }
        draw::set_draw_color(text_color);
        draw::set_font(Font::HelveticaBold, 20);
        draw::draw_text2(
            "\u{00d7}",
            close_x,
            close_y,
            CLOSE_BTN_SIZE,
            CLOSE_BTN_SIZE,
            Align::Center,
        );
    }

    let px = wx + plus_x(st.tabs.len(), width);
    let btn_h = wh - 4;
    let btn_y = wy + 2;
    let bg = if st.hover_plus {
        colors.plus_hover_bg
    } else {
        colors.inactive_bg
    };
    draw_rounded_top_rect(px, btn_y, PLUS_BTN_WIDTH, btn_h, CORNER_RADIUS, bg);
    draw::set_draw_color(if st.hover_plus {
        colors.active_text
    } else {
        colors.inactive_text
    });
    draw::set_font(Font::HelveticaBold, 16);
    draw::draw_text2("+", px, btn_y, PLUS_BTN_WIDTH, btn_h, Align::Center);
}

// --- Event handling ---

fn handle_tab_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabBarState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();
            let button = fltk::app::event_button();
            let sender = st.sender;

            match hit_test(&st, wid, mx, my) {
                HitResult::PlusButton if button == 1 => {
                    sender.send(Message::FileNew);
                    true
                }
                HitResult::Tab { index, is_close } => {
                    let tab_id = st.tabs[index].id;
                    // Middle click or the × closes; left click switches
                    if button == 2 || (button == 1 && is_close) {
                        sender.send(Message::TabClose(tab_id));
                    } else if button == 1 {
                        sender.send(Message::TabSwitch(tab_id));
                    }
                    true
                }
                _ => false,
            }
        }
        Event::Move => {
            let mut st = state.borrow_mut();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();

            let (new_hover, new_close, new_plus) = match hit_test(&st, wid, mx, my) {
                HitResult::Tab { index, is_close } => (Some(index), is_close, false),
                HitResult::PlusButton => (None, false, true),
                HitResult::None => (None, false, false),
            };

            if new_hover != st.hover_tab_index
                || new_close != st.hover_close
                || new_plus != st.hover_plus
            {
                st.hover_tab_index = new_hover;
                st.hover_close = new_close;
                st.hover_plus = new_plus;
                drop(st);
                wid.redraw();
            }
            true
        }
        Event::Leave => {
            let mut st = state.borrow_mut();
            if st.hover_tab_index.is_some() || st.hover_close || st.hover_plus {
                st.hover_tab_index = None;
                st.hover_close = false;
                st.hover_plus = false;
                drop(st);
                wid.redraw();
            }
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_width_clamped() {
        assert_eq!(tab_width(2000, 1), MAX_TAB_WIDTH);
        assert_eq!(tab_width(300, 20), MIN_TAB_WIDTH);
        assert_eq!(tab_width(640, 0), MAX_TAB_WIDTH);
    }

    #[test]
    fn test_tab_width_shares_space() {
        let width = tab_width(640, 5);
        assert!(width >= MIN_TAB_WIDTH && width <= MAX_TAB_WIDTH);
        assert!(plus_x(5, width) + PLUS_BTN_WIDTH <= 640);
    }
}
