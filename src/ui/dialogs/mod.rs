pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Pump events until `dialog` is hidden. Hides it early when the main loop
/// has been asked to quit.
pub fn run_dialog(dialog: &Window) {
    let mut dialog = dialog.clone();
    while dialog.shown() && app::wait() {
        if app::should_program_quit() {
            dialog.hide();
        }
    }
}
