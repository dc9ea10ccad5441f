use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "RU")]
    Ru,
    #[default]
    #[serde(rename = "EN")]
    En,
}

/// Keys for every user-visible UI string. Widgets are labelled by key and
/// relabelled by looking the key up in the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    File,
    New,
    Open,
    Save,
    SaveAs,
    NextTab,
    PreviousTab,
    Exit,
    View,
    Style,
    Dark,
    Light,
    Lang,
    LangRu,
    LangEn,
    FileBrowser,
    Help,
    About,
    AboutTitle,
    AboutVersion,
    AboutInfo,
    AboutAuthor,
    Close,
    Minimize,
    Maximize,
    OpenFileTitle,
    SaveFileTitle,
    OpenFailed,
    SaveFailed,
    SettingsFailed,
}

impl LabelKey {
    pub const ALL: [LabelKey; 30] = [
        LabelKey::File,
        LabelKey::New,
        LabelKey::Open,
        LabelKey::Save,
        LabelKey::SaveAs,
        LabelKey::NextTab,
        LabelKey::PreviousTab,
        LabelKey::Exit,
        LabelKey::View,
        LabelKey::Style,
        LabelKey::Dark,
        LabelKey::Light,
        LabelKey::Lang,
        LabelKey::LangRu,
        LabelKey::LangEn,
        LabelKey::FileBrowser,
        LabelKey::Help,
        LabelKey::About,
        LabelKey::AboutTitle,
        LabelKey::AboutVersion,
        LabelKey::AboutInfo,
        LabelKey::AboutAuthor,
        LabelKey::Close,
        LabelKey::Minimize,
        LabelKey::Maximize,
        LabelKey::OpenFileTitle,
        LabelKey::SaveFileTitle,
        LabelKey::OpenFailed,
        LabelKey::SaveFailed,
        LabelKey::SettingsFailed,
    ];
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::En => "EN",
        }
    }

    /// Look up the display string for `key`.
    pub fn label(self, key: LabelKey) -> &'static str {
        match self {
            Language::En => english(key),
            Language::Ru => russian(key),
        }
    }
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::File => "File",
        LabelKey::New => "New",
        LabelKey::Open => "Open...",
        LabelKey::Save => "Save",
        LabelKey::SaveAs => "Save As...",
        LabelKey::NextTab => "Next Tab",
        LabelKey::PreviousTab => "Previous Tab",
        LabelKey::Exit => "Exit",
        LabelKey::View => "View",
        LabelKey::Style => "Style",
        LabelKey::Dark => "Dark",
        LabelKey::Light => "Light",
        LabelKey::Lang => "Lang",
        LabelKey::LangRu => "RU",
        LabelKey::LangEn => "EN",
        LabelKey::FileBrowser => "File Browser",
        LabelKey::Help => "Help",
        LabelKey::About => "About",
        LabelKey::AboutTitle => "About PandaPad",
        LabelKey::AboutVersion => "Version",
        LabelKey::AboutInfo => "PandaPad is a simple text editor for the Linux desktop",
        LabelKey::AboutAuthor => "Author",
        LabelKey::Close => "Close",
        LabelKey::Minimize => "Minimize",
        LabelKey::Maximize => "Maximize",
        LabelKey::OpenFileTitle => "Open File",
        LabelKey::SaveFileTitle => "Save File",
        LabelKey::OpenFailed => "Error opening file",
        LabelKey::SaveFailed => "Error saving file",
        LabelKey::SettingsFailed => "Failed to save settings",
    }
}

fn russian(key: LabelKey) -> &'static str {
    match key {
        LabelKey::File => "Файл",
        LabelKey::New => "Новый",
        LabelKey::Open => "Открыть...",
        LabelKey::Save => "Сохранить",
        LabelKey::SaveAs => "Сохранить как...",
        LabelKey::NextTab => "Следующая вкладка",
        LabelKey::PreviousTab => "Предыдущая вкладка",
        LabelKey::Exit => "Выход",
        LabelKey::View => "Вид",
        LabelKey::Style => "Стиль",
        LabelKey::Dark => "Тёмный",
        LabelKey::Light => "Светлый",
        LabelKey::Lang => "Язык",
        LabelKey::LangRu => "RU",
        LabelKey::LangEn => "EN",
        LabelKey::FileBrowser => "Обзор файлов",
        LabelKey::Help => "Справка",
        LabelKey::About => "О программе",
        LabelKey::AboutTitle => "О программе PandaPad",
        LabelKey::AboutVersion => "Версия",
        LabelKey::AboutInfo => "PandaPad - простой текстовый редактор для Linux",
        LabelKey::AboutAuthor => "Автор",
        LabelKey::Close => "Закрыть",
        LabelKey::Minimize => "Свернуть",
        LabelKey::Maximize => "Развернуть",
        LabelKey::OpenFileTitle => "Открыть файл",
        LabelKey::SaveFileTitle => "Сохранить файл",
        LabelKey::OpenFailed => "Ошибка открытия файла",
        LabelKey::SaveFailed => "Ошибка сохранения файла",
        LabelKey::SettingsFailed => "Не удалось сохранить настройки",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_label() {
        for lang in Language::ALL {
            for key in LabelKey::ALL {
                assert!(!lang.label(key).is_empty(), "{:?}/{:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_dictionaries_are_distinct() {
        assert_eq!(Language::En.label(LabelKey::New), "New");
        assert_eq!(Language::Ru.label(LabelKey::New), "Новый");
        assert_ne!(
            Language::En.label(LabelKey::File),
            Language::Ru.label(LabelKey::File)
        );
    }

    #[test]
    fn test_menu_labels_have_no_path_separator() {
        for lang in Language::ALL {
            for key in LabelKey::ALL {
                assert!(!lang.label(key).contains('/'), "{:?}/{:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(Language::Ru.code(), "RU");
        assert_eq!(Language::En.code(), "EN");
        assert_eq!(Language::default(), Language::En);
    }
}
