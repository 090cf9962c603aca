//! 文件树投影：平铺节点 → 嵌套显示结构
//!
//! 纯函数，不持有状态。每层：目录在前、文件在后，同类按名字升序
//! （区分大小写的字节序）。关闭的目录不展开子节点，但子节点仍在 store 中。

use std::cmp::Ordering;

use crate::models::{FileIcon, FileSystemStore, Language, Node, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeItemKind {
    Folder {
        is_open: bool,
        children: Vec<TreeItem>,
    },
    File {
        language: Language,
        icon: FileIcon,
        is_dirty: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub id: NodeId,
    pub name: String,
    pub depth: u16,
    pub kind: TreeItemKind,
}

impl TreeItem {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, TreeItemKind::Folder { .. })
    }

    pub fn children(&self) -> &[TreeItem] {
        match &self.kind {
            TreeItemKind::Folder { children, .. } => children,
            TreeItemKind::File { .. } => &[],
        }
    }
}

/// 侧边栏的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: NodeId,
    pub name: String,
    pub depth: u16,
    pub is_folder: bool,
    pub is_open: bool,
    pub is_dirty: bool,
    pub icon: Option<FileIcon>,
    pub is_selected: bool,
    pub is_active: bool,
}

fn display_order(a: &Node, b: &Node) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name().cmp(b.name()),
    }
}

/// 渲染 `parent` 这一层（`None` 为根层）
pub fn render_level(store: &FileSystemStore, parent: Option<NodeId>) -> Vec<TreeItem> {
    render_level_at(store, parent, 0)
}

fn render_level_at(store: &FileSystemStore, parent: Option<NodeId>, depth: u16) -> Vec<TreeItem> {
    let mut level: Vec<(NodeId, &Node)> = store.children(parent).collect();
    level.sort_by(|(_, a), (_, b)| display_order(a, b));

    level
        .into_iter()
        .map(|(id, node)| {
            let kind = match node.kind() {
                NodeKind::Folder(folder) => TreeItemKind::Folder {
                    is_open: folder.is_open,
                    children: if folder.is_open {
                        render_level_at(store, Some(id), depth.saturating_add(1))
                    } else {
                        Vec::new()
                    },
                },
                NodeKind::File(file) => TreeItemKind::File {
                    language: file.language,
                    icon: FileIcon::from_filename(node.name()),
                    is_dirty: file.is_dirty,
                },
            };
            TreeItem {
                id,
                name: node.name().to_string(),
                depth,
                kind,
            }
        })
        .collect()
}

/// 深度优先展开为显示行
pub fn flatten(store: &FileSystemStore) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<TreeItem> = render_level(store, None).into_iter().rev().collect();
    let selected = store.selected();
    let active = store.active();

    while let Some(item) = stack.pop() {
        let (is_folder, is_open, is_dirty, icon) = match &item.kind {
            TreeItemKind::Folder { is_open, .. } => (true, *is_open, false, None),
            TreeItemKind::File { icon, is_dirty, .. } => (false, false, *is_dirty, Some(*icon)),
        };
        rows.push(TreeRow {
            id: item.id,
            name: item.name,
            depth: item.depth,
            is_folder,
            is_open,
            is_dirty,
            icon,
            is_selected: selected == Some(item.id),
            is_active: active == Some(item.id),
        });

        if let TreeItemKind::Folder { children, .. } = item.kind {
            stack.extend(children.into_iter().rev());
        }
    }

    rows
}

#[cfg(test)]
#[path = "../../tests/unit/views/file_tree.rs"]
mod tests;
