//! PandaPad - a small tabbed text editor built on FLTK.
//!
//! The `app` module holds the toolkit-free model (documents, tabs, settings,
//! window chrome state) plus the `AppState` coordinator; `ui` holds the FLTK
//! widget builders.

pub mod app;
pub mod ui;
