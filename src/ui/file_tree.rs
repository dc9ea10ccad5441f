use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    enums::Event,
    menu::MenuItem,
    prelude::*,
    tree::{Tree, TreeItem, TreeReason, TreeSelect},
};

use crate::app::controllers::file_browser::{is_openable, list_dir};
use crate::app::domain::{LabelKey, Language, Message, Theme};
use crate::ui::theme::to_color;

pub const FILE_TREE_WIDTH: i32 = 260;

// Child inserted under unopened directories so they show an expander
const PLACEHOLDER: &str = "...";

struct TreeState {
    root: PathBuf,
    lang: Language,
}

/// File-system tree for the browser pane. Directories load their children
/// when first opened; right-click offers "Open" for the item under the pointer.
pub struct FileTree {
    pub tree: Tree,
    state: Rc<RefCell<TreeState>>,
}

impl FileTree {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut tree = Tree::default();
        tree.set_show_root(false);
        tree.set_select_mode(TreeSelect::Single);

        let state = Rc::new(RefCell::new(TreeState {
            root: PathBuf::new(),
            lang: Language::default(),
        }));

        let cb_state = state.clone();
        tree.set_callback(move |t| {
            if t.callback_reason() != TreeReason::Opened {
                return;
            }
            if let Some(mut item) = t.callback_item() {
                let path = item_path(&cb_state.borrow().root, &item);
                item.clear_children();
                populate(t, &item, &path);
                t.redraw();
            }
        });

        let handle_state = state.clone();
        let sender = *sender;
        tree.handle(move |t, event| {
            if event != Event::Push || app::event_button() != 3 {
                return false;
            }
            let Some(item) = t.find_clicked(false) else {
                return false;
            };
            if item.label().as_deref() == Some(PLACEHOLDER) {
                return false;
            }
            let (path, label) = {
                let st = handle_state.borrow();
                (item_path(&st.root, &item), st.lang.label(LabelKey::Open))
            };
            if !is_openable(&path) {
                return false;
            }
            let _ = t.select_only(&item, false);
            let menu = MenuItem::new(&[label]);
            if menu.popup(app::event_x(), app::event_y()).is_some() {
                sender.send(Message::BrowserOpen(path));
            }
            true
        });

        Self { tree, state }
    }

    /// Show the contents of `root`. Does nothing if it is already shown.
    pub fn set_root(&mut self, root: &Path) {
        if self.state.borrow().root == root {
            return;
        }
        self.state.borrow_mut().root = root.to_path_buf();
        self.tree.set_root_label(&root.to_string_lossy());
        if let Some(mut root_item) = self.tree.root() {
            root_item.clear_children();
            populate(&mut self.tree, &root_item, root);
        }
        self.tree.redraw();
    }

    pub fn set_language(&mut self, lang: Language) {
        self.state.borrow_mut().lang = lang;
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        let palette = theme.editor_palette();
        let bg = to_color(palette.background);
        let fg = to_color(palette.foreground);
        self.tree.set_color(bg);
        self.tree.set_item_label_fgcolor(fg);
        self.tree.set_connector_color(fg.darker());
        if let Some(items) = self.tree.get_items() {
            for mut item in items {
                item.set_label_fgcolor(fg);
            }
        }
        self.tree.redraw();
    }
}

fn populate(tree: &mut Tree, parent: &TreeItem, dir: &Path) {
    let entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot list directory: {}", e);
            return;
        }
    };
    for (pos, entry) in entries.iter().enumerate() {
        let Some(mut item) = tree.insert(parent, &entry.name, pos as i32) else {
            continue;
        };
        if entry.is_dir {
            tree.insert(&item, PLACEHOLDER, 0);
            item.close();
        }
    }
}

/// Rebuild the full path of `item` from its labels up to the hidden root.
fn item_path(root: &Path, item: &TreeItem) -> PathBuf {
    let mut parts = Vec::new();
    let mut current = Some(item.clone());
    while let Some(it) = current {
        if it.is_root() {
            break;
        }
        if let Some(label) = it.label() {
            parts.push(label);
        }
        current = it.parent();
    }
    let mut path = root.to_path_buf();
    for part in parts.iter().rev() {
        path.push(part);
    }
    path
}
