//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and DocumentId
//! - Theme and application settings
//! - Language dictionary and the declarative menu action table
//! - Message types for the event system

pub mod actions;
pub mod document;
pub mod language;
pub mod messages;
pub mod settings;

pub use actions::{ActionId, KeyChord, MenuEntry, ShortcutKey, MENU_ENTRIES};
pub use document::{Document, DocumentId};
pub use language::{LabelKey, Language};
pub use messages::Message;
pub use settings::{AppSettings, Rgb, Theme};
