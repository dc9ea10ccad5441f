//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Whole-file text I/O
//! - Settings persistence
//! - Text helpers

pub mod file_io;
pub mod settings_store;
pub mod text_ops;
