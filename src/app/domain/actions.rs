//! Declarative menu table.
//!
//! Every menu action is one row: its id, its menu path as label keys, and an
//! optional shortcut. The menu bar is built from this table once; switching
//! language relabels the existing items by key.

use super::language::{LabelKey, Language};
use super::messages::Message;
use super::settings::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    New,
    Open,
    Save,
    SaveAs,
    NextTab,
    PreviousTab,
    Exit,
    StyleDark,
    StyleLight,
    LangRu,
    LangEn,
    ToggleFileBrowser,
    About,
}

impl ActionId {
    /// The message dispatched when this action is triggered.
    pub fn message(self) -> Message {
        match self {
            ActionId::New => Message::FileNew,
            ActionId::Open => Message::FileOpen,
            ActionId::Save => Message::FileSave,
            ActionId::SaveAs => Message::FileSaveAs,
            ActionId::NextTab => Message::TabNext,
            ActionId::PreviousTab => Message::TabPrevious,
            ActionId::Exit => Message::FileQuit,
            ActionId::StyleDark => Message::SetTheme(Theme::Dark),
            ActionId::StyleLight => Message::SetTheme(Theme::Light),
            ActionId::LangRu => Message::SetLanguage(Language::Ru),
            ActionId::LangEn => Message::SetLanguage(Language::En),
            ActionId::ToggleFileBrowser => Message::ToggleFileBrowser,
            ActionId::About => Message::ShowAbout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Char(char),
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub key: ShortcutKey,
}

impl KeyChord {
    const fn ctrl(c: char) -> Self {
        Self { ctrl: true, shift: false, key: ShortcutKey::Char(c) }
    }

    const fn ctrl_shift(c: char) -> Self {
        Self { ctrl: true, shift: true, key: ShortcutKey::Char(c) }
    }

    const fn ctrl_key(key: ShortcutKey) -> Self {
        Self { ctrl: true, shift: false, key }
    }
}

/// How an item is drawn: plain, a radio button within its submenu, or a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Normal,
    Radio,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub id: ActionId,
    pub path: &'static [LabelKey],
    pub shortcut: Option<KeyChord>,
    pub kind: ItemKind,
}

pub const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        id: ActionId::New,
        path: &[LabelKey::File, LabelKey::New],
        shortcut: Some(KeyChord::ctrl('n')),
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::Open,
        path: &[LabelKey::File, LabelKey::Open],
        shortcut: Some(KeyChord::ctrl('o')),
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::Save,
        path: &[LabelKey::File, LabelKey::Save],
        shortcut: Some(KeyChord::ctrl('s')),
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::SaveAs,
        path: &[LabelKey::File, LabelKey::SaveAs],
        shortcut: Some(KeyChord::ctrl_shift('s')),
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::NextTab,
        path: &[LabelKey::File, LabelKey::NextTab],
        shortcut: Some(KeyChord::ctrl_key(ShortcutKey::PageDown)),
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::PreviousTab,
        path: &[LabelKey::File, LabelKey::PreviousTab],
        shortcut: Some(KeyChord::ctrl_key(ShortcutKey::PageUp)),
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::Exit,
        path: &[LabelKey::File, LabelKey::Exit],
        shortcut: None,
        kind: ItemKind::Normal,
    },
    MenuEntry {
        id: ActionId::StyleDark,
        path: &[LabelKey::View, LabelKey::Style, LabelKey::Dark],
        shortcut: None,
        kind: ItemKind::Radio,
    },
    MenuEntry {
        id: ActionId::StyleLight,
        path: &[LabelKey::View, LabelKey::Style, LabelKey::Light],
        shortcut: None,
        kind: ItemKind::Radio,
    },
    MenuEntry {
        id: ActionId::LangRu,
        path: &[LabelKey::View, LabelKey::Lang, LabelKey::LangRu],
        shortcut: None,
        kind: ItemKind::Radio,
    },
    MenuEntry {
        id: ActionId::LangEn,
        path: &[LabelKey::View, LabelKey::Lang, LabelKey::LangEn],
        shortcut: None,
        kind: ItemKind::Radio,
    },
    MenuEntry {
        id: ActionId::ToggleFileBrowser,
        path: &[LabelKey::View, LabelKey::FileBrowser],
        shortcut: Some(KeyChord::ctrl('q')),
        kind: ItemKind::Toggle,
    },
    MenuEntry {
        id: ActionId::About,
        path: &[LabelKey::Help, LabelKey::About],
        shortcut: None,
        kind: ItemKind::Normal,
    },
];

/// Join a label-key path into an FLTK menu path such as `"File/New"`.
pub fn menu_path(path: &[LabelKey], lang: Language) -> String {
    path.iter()
        .map(|key| lang.label(*key))
        .collect::<Vec<_>>()
        .join("/")
}

/// Every submenu header path (`File`, `View`, `View/Style`, ...) in table order.
pub fn submenu_paths() -> Vec<&'static [LabelKey]> {
    let mut paths: Vec<&'static [LabelKey]> = Vec::new();
    for entry in MENU_ENTRIES {
        for len in 1..entry.path.len() {
            let prefix = &entry.path[..len];
            if !paths.contains(&prefix) {
                paths.push(prefix);
            }
        }
    }
    paths
}

pub fn entry(id: ActionId) -> Option<&'static MenuEntry> {
    MENU_ENTRIES.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids_are_unique() {
        for (i, a) in MENU_ENTRIES.iter().enumerate() {
            for b in &MENU_ENTRIES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_required_shortcuts() {
        let shortcut = |id| entry(id).and_then(|e| e.shortcut);
        assert_eq!(shortcut(ActionId::New), Some(KeyChord::ctrl('n')));
        assert_eq!(shortcut(ActionId::Open), Some(KeyChord::ctrl('o')));
        assert_eq!(shortcut(ActionId::Save), Some(KeyChord::ctrl('s')));
        assert_eq!(shortcut(ActionId::ToggleFileBrowser), Some(KeyChord::ctrl('q')));
        assert_eq!(shortcut(ActionId::Exit), None);
    }

    #[test]
    fn test_shortcuts_do_not_collide() {
        let chords: Vec<KeyChord> = MENU_ENTRIES.iter().filter_map(|e| e.shortcut).collect();
        for (i, a) in chords.iter().enumerate() {
            assert!(!chords[i + 1..].contains(a), "duplicate shortcut {:?}", a);
        }
    }

    #[test]
    fn test_language_actions_switch_language() {
        assert_eq!(ActionId::LangRu.message(), Message::SetLanguage(Language::Ru));
        assert_eq!(ActionId::LangEn.message(), Message::SetLanguage(Language::En));
        assert_eq!(ActionId::StyleLight.message(), Message::SetTheme(Theme::Light));
    }

    #[test]
    fn test_menu_path() {
        let new = entry(ActionId::New).unwrap();
        assert_eq!(menu_path(new.path, Language::En), "File/New");
        assert_eq!(menu_path(new.path, Language::Ru), "Файл/Новый");

        let dark = entry(ActionId::StyleDark).unwrap();
        assert_eq!(menu_path(dark.path, Language::En), "View/Style/Dark");
    }

    #[test]
    fn test_submenu_paths() {
        let paths = submenu_paths();
        assert_eq!(
            paths,
            vec![
                &[LabelKey::File][..],
                &[LabelKey::View][..],
                &[LabelKey::View, LabelKey::Style][..],
                &[LabelKey::View, LabelKey::Lang][..],
                &[LabelKey::Help][..],
            ]
        );
    }
}
