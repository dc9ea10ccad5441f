//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer adapter behind the `TextStore` seam
//! - Tracing subscriber setup
//! - Error types

pub mod buffer;
pub mod error;
pub mod logging;
