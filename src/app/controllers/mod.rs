//! Controllers layer - toolkit-free state and coordination.
//!
//! - Tab management
//! - File browser pane visibility and directory listing
//! - Window chrome (maximize state machine, drag-to-move)

pub mod file_browser;
pub mod tabs;
pub mod window_chrome;
