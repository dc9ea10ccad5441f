use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::actions::{menu_path, submenu_paths, ItemKind, KeyChord, ShortcutKey, MENU_ENTRIES};
use crate::app::domain::{ActionId, LabelKey, Language, Message, Theme};

fn to_shortcut(chord: Option<KeyChord>) -> Shortcut {
    let Some(chord) = chord else {
        return Shortcut::None;
    };
    let mut modifiers = Shortcut::None;
    if chord.ctrl {
        modifiers = modifiers | Shortcut::Ctrl;
    }
    if chord.shift {
        modifiers = modifiers | Shortcut::Shift;
    }
    match chord.key {
        ShortcutKey::Char(c) => modifiers | c,
        ShortcutKey::PageUp => modifiers | Key::PageUp,
        ShortcutKey::PageDown => modifiers | Key::PageDown,
    }
}

fn to_flag(kind: ItemKind) -> MenuFlag {
    match kind {
        ItemKind::Normal => MenuFlag::Normal,
        ItemKind::Radio => MenuFlag::Radio,
        ItemKind::Toggle => MenuFlag::Toggle,
    }
}

/// Build the menu bar from the action table, labelled in `lang`.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, lang: Language) {
    for entry in MENU_ENTRIES {
        menu.add_emit(
            &menu_path(entry.path, lang),
            to_shortcut(entry.shortcut),
            to_flag(entry.kind),
            *sender,
            entry.id.message(),
        );
    }
}

/// Relabel every existing item and submenu header from `from` to `to`
/// without rebuilding the menu.
pub fn relabel_menu(menu: &mut MenuBar, from: Language, to: Language) {
    // Resolve all indices against the old labels before renaming anything
    let mut targets: Vec<(i32, LabelKey)> = Vec::new();
    for entry in MENU_ENTRIES {
        if let Some(key) = entry.path.last() {
            targets.push((menu.find_index(&menu_path(entry.path, from)), *key));
        }
    }
    for path in submenu_paths() {
        if let Some(key) = path.last() {
            targets.push((menu.find_index(&menu_path(path, from)), *key));
        }
    }

    for (idx, key) in targets {
        if idx < 0 {
            tracing::warn!(?key, "Menu item not found while relabelling");
            continue;
        }
        if let Some(mut item) = menu.at(idx) {
            item.set_label(to.label(key));
        }
    }
    menu.redraw();
}

/// Sync radio and toggle marks with the application state.
pub fn sync_menu_state(menu: &MenuBar, lang: Language, theme: Theme, browser_visible: bool) {
    let checked = |id: ActionId| match id {
        ActionId::StyleDark => theme == Theme::Dark,
        ActionId::StyleLight => theme == Theme::Light,
        ActionId::LangRu => lang == Language::Ru,
        ActionId::LangEn => lang == Language::En,
        ActionId::ToggleFileBrowser => browser_visible,
        _ => false,
    };

    for entry in MENU_ENTRIES.iter().filter(|e| e.kind != ItemKind::Normal) {
        let idx = menu.find_index(&menu_path(entry.path, lang));
        if idx < 0 {
            continue;
        }
        if let Some(mut item) = menu.at(idx) {
            if checked(entry.id) {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}
