use serde::{Deserialize, Serialize};

use crate::app::domain::language::Language;
use crate::app::infrastructure::error::{AppError, Result};

/// Plain RGB triple so the domain layer stays independent of FLTK colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Colors for the text editing surface.
    pub fn editor_palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Rgb(0x30, 0x30, 0x30),
                foreground: Rgb(0xff, 0xff, 0xff),
            },
            Theme::Light => Palette {
                background: Rgb(0xff, 0xff, 0xff),
                foreground: Rgb(0x00, 0x00, 0x00),
            },
        }
    }

    /// Colors for the window background, menu bar and title bar.
    pub fn chrome_palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Rgb(0x42, 0x42, 0x42),
                foreground: Rgb(0xff, 0xff, 0xff),
            },
            Theme::Light => Palette {
                background: Rgb(0xff, 0xff, 0xff),
                foreground: Rgb(0x00, 0x00, 0x00),
            },
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleSection {
    #[serde(rename = "COLOR_SCHEME")]
    pub color_scheme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LangSection {
    #[serde(rename = "LANG")]
    pub lang: Language,
}

/// Contents of the settings file: a `[style]` and a `[lang]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub style: StyleSection,
    pub lang: LangSection,
}

impl AppSettings {
    pub fn theme(&self) -> Theme {
        self.style.color_scheme
    }

    pub fn language(&self) -> Language {
        self.lang.lang
    }

    /// Parse the settings file contents. Missing keys fall back to defaults,
    /// unknown values are an error.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| AppError::Config(e.message().to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme(), Theme::Dark);
        assert_eq!(settings.language(), Language::En);
    }

    #[test]
    fn test_file_layout() {
        let settings = AppSettings {
            style: StyleSection { color_scheme: Theme::Light },
            lang: LangSection { lang: Language::Ru },
        };
        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("[style]"));
        assert!(text.contains("COLOR_SCHEME = \"Light\""));
        assert!(text.contains("[lang]"));
        assert!(text.contains("LANG = \"RU\""));
    }

    #[test]
    fn test_parse_written_file() {
        let text = "[style]\nCOLOR_SCHEME = \"Light\"\n\n[lang]\nLANG = \"RU\"\n";
        let settings = AppSettings::from_toml_str(text).unwrap();
        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.language(), Language::Ru);
    }

    #[test]
    fn test_partial_config() {
        let settings = AppSettings::from_toml_str("[style]\nCOLOR_SCHEME = \"Light\"\n").unwrap();
        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.language(), Language::En);

        let empty = AppSettings::from_toml_str("").unwrap();
        assert_eq!(empty, AppSettings::default());
    }

    #[test]
    fn test_unknown_value_is_config_error() {
        let err = AppSettings::from_toml_str("[style]\nCOLOR_SCHEME = \"Blue\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = AppSettings::from_toml_str("this is not toml").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_theme_palettes() {
        assert_eq!(Theme::Dark.editor_palette().background, Rgb(0x30, 0x30, 0x30));
        assert_eq!(Theme::Dark.editor_palette().foreground, Rgb(0xff, 0xff, 0xff));
        assert_eq!(Theme::Light.editor_palette().foreground, Rgb(0, 0, 0));
        assert_eq!(Theme::Dark.chrome_palette().background, Rgb(0x42, 0x42, 0x42));
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
