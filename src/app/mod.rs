//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Theme, Language, Settings, actions, Messages)
//! - `controllers/` - Toolkit-free state machines (tabs, file browser, window chrome)
//! - `services/` - File I/O, settings persistence, text helpers
//! - `infrastructure/` - Error type, FLTK buffer adapter, logging setup
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

pub use controllers::tabs::TabManager;
pub use domain::{ActionId, AppSettings, Document, DocumentId, LabelKey, Language, Message, Theme};
pub use infrastructure::error::{AppError, Result};
pub use services::settings_store::SettingsStore;
