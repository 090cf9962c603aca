//! 视图层：从状态派生的纯投影

pub mod file_tree;

pub use file_tree::{flatten, render_level, TreeItem, TreeItemKind, TreeRow};
