pub mod dialogs;
pub mod file_dialogs;
pub mod file_tree;
pub mod main_window;
pub mod menu;
pub mod tab_bar;
pub mod theme;
pub mod title_bar;
