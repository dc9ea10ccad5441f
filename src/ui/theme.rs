use fltk::{
    enums::Color,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::{Rgb, Theme};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Color an editing surface with `theme`'s editor palette.
pub fn apply_editor_theme(editor: &mut TextEditor, theme: Theme) {
    let palette = theme.editor_palette();
    editor.set_color(to_color(palette.background));
    editor.set_text_color(to_color(palette.foreground));
    editor.set_cursor_color(to_color(palette.foreground));
    if theme.is_dark() {
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
    } else {
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
    }
    editor.redraw();
}

/// Color the window background and menu bar.
pub fn apply_chrome_theme(window: &mut Window, menu: &mut MenuBar, theme: Theme) {
    let palette = theme.chrome_palette();
    window.set_color(to_color(palette.background));
    window.set_label_color(to_color(palette.foreground));
    menu.set_color(to_color(palette.background));
    menu.set_text_color(to_color(palette.foreground));
    if theme.is_dark() {
        menu.set_selection_color(Color::from_rgb(90, 90, 90)); // Hover color
    } else {
        menu.set_selection_color(Color::from_rgb(200, 200, 200));
    }
    window.redraw();
    menu.redraw();
}
