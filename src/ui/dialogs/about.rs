use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::{LabelKey, Language, Theme};
use crate::ui::theme::to_color;

/// Show the modal About dialog in the current language and theme.
pub fn show_about_dialog(lang: Language, theme: Theme) {
    let version = env!("CARGO_PKG_VERSION");
    let palette = theme.chrome_palette();

    let mut dialog = Window::default()
        .with_size(420, 260)
        .with_label(lang.label(LabelKey::AboutTitle))
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(to_color(palette.background));

    let mut flex = Flex::new(10, 10, 400, 240, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("PandaPad");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("{}: {}", lang.label(LabelKey::AboutVersion), version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut info_frame = Frame::default();
    info_frame.set_label(lang.label(LabelKey::AboutInfo));
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Center | Align::Inside | Align::Wrap);

    let mut author_frame = Frame::default();
    author_frame.set_label(&format!("{}: Slavakamrad", lang.label(LabelKey::AboutAuthor)));
    author_frame.set_label_size(12);
    flex.fixed(&author_frame, 25);

    let mut close_btn = Button::default().with_label(lang.label(LabelKey::Close));
    flex.fixed(&close_btn, 35);

    for frame in [&mut title, &mut version_frame, &mut info_frame, &mut author_frame] {
        frame.set_label_color(to_color(palette.foreground));
    }

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
