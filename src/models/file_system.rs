//! 虚拟文件系统数据模型
//!
//! 所有节点平铺在一个 arena 中，通过 `parent` 引用父目录。
//! - 创建时校验父节点必须是已存在的目录
//! - 删除目录时级联删除全部后代
//! - 不提供移动节点的接口，父链天然无环

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use super::language::Language;

new_key_type! { pub struct NodeId; }

pub const STARTER_FOLDER: &str = "root";
pub const STARTER_FILE: &str = "untitled.js";
pub const STARTER_CONTENT: &str = "// Write your code here\n\nconsole.log('Hello, world!');\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("parent is not an existing folder")]
    InvalidParent,
    #[error("node not found")]
    NotFound,
    #[error("name must not be empty")]
    InvalidName,
    #[error("node is not a file")]
    NotAFile,
}

pub type VfsResult<T> = Result<T, VfsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub language: Language,
    pub content: String,
    pub is_dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderData {
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File(FileData),
    Folder(FolderData),
}

#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder(_))
    }

    pub fn as_file(&self) -> Option<&FileData> {
        match &self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderData> {
        match &self.kind {
            NodeKind::Folder(folder) => Some(folder),
            NodeKind::File(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileSystemStore {
    arena: SlotMap<NodeId, Node>,
    /// 插入顺序，决定标签页顺序和活动文件的回退目标
    order: Vec<NodeId>,
    active: Option<NodeId>,
    selected: Option<NodeId>,
}

impl FileSystemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `root/untitled.js`，`untitled.js` 为活动文件
    pub fn with_starter() -> Self {
        let mut store = Self::new();
        let root = store.insert(
            STARTER_FOLDER.to_string(),
            None,
            NodeKind::Folder(FolderData { is_open: true }),
        );
        let file = store.insert(
            STARTER_FILE.to_string(),
            Some(root),
            NodeKind::File(FileData {
                language: Language::from_filename(STARTER_FILE),
                content: STARTER_CONTENT.to_string(),
                is_dirty: false,
            }),
        );
        store.active = Some(file);
        store
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn file(&self, id: NodeId) -> Option<&FileData> {
        self.arena.get(id).and_then(Node::as_file)
    }

    pub fn folder(&self, id: NodeId) -> Option<&FolderData> {
        self.arena.get(id).and_then(Node::as_folder)
    }

    pub fn is_folder(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(Node::is_folder)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(Node::is_file)
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.arena.get(id).map(|node| (id, node)))
    }

    pub fn files(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.iter().filter(|(_, node)| node.is_file())
    }

    pub fn children(&self, parent: Option<NodeId>) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.iter().filter(move |(_, node)| node.parent == parent)
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn active_file(&self) -> Option<(NodeId, &Node)> {
        let id = self.active?;
        self.arena.get(id).map(|node| (id, node))
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn set_active(&mut self, id: NodeId) -> VfsResult<()> {
        let node = self.arena.get(id).ok_or(VfsError::NotFound)?;
        if !node.is_file() {
            return Err(VfsError::NotAFile);
        }
        self.active = Some(id);
        Ok(())
    }

    /// 高亮节点；文件同时成为活动文件
    pub fn select(&mut self, id: NodeId) -> VfsResult<()> {
        let node = self.arena.get(id).ok_or(VfsError::NotFound)?;
        if node.is_file() {
            self.active = Some(id);
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn create_file(&mut self, name: &str, parent: Option<NodeId>) -> VfsResult<NodeId> {
        let name = self.validate(name, parent)?;
        let language = Language::from_filename(&name);
        let id = self.insert(
            name,
            parent,
            NodeKind::File(FileData {
                language,
                content: String::new(),
                is_dirty: false,
            }),
        );
        self.active = Some(id);
        tracing::debug!(?id, ?parent, %language, "file created");
        Ok(id)
    }

    pub fn create_folder(&mut self, name: &str, parent: Option<NodeId>) -> VfsResult<NodeId> {
        let name = self.validate(name, parent)?;
        let id = self.insert(name, parent, NodeKind::Folder(FolderData { is_open: true }));
        tracing::debug!(?id, ?parent, "folder created");
        Ok(id)
    }

    /// 整体替换内容并标记为脏；目录上调用是空操作，返回 `false`
    pub fn update_content(&mut self, id: NodeId, content: &str) -> VfsResult<bool> {
        let node = self.arena.get_mut(id).ok_or(VfsError::NotFound)?;
        match &mut node.kind {
            NodeKind::File(file) => {
                file.content.clear();
                file.content.push_str(content);
                file.is_dirty = true;
                Ok(true)
            }
            NodeKind::Folder(_) => Ok(false),
        }
    }

    /// 切换目录展开状态；文件上调用是空操作，返回 `false`
    pub fn toggle_folder(&mut self, id: NodeId) -> VfsResult<bool> {
        let node = self.arena.get_mut(id).ok_or(VfsError::NotFound)?;
        match &mut node.kind {
            NodeKind::Folder(folder) => {
                folder.is_open = !folder.is_open;
                Ok(true)
            }
            NodeKind::File(_) => Ok(false),
        }
    }

    /// 全部传递后代（不含自身）
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            for (child_id, child) in self.children(Some(current)) {
                result.push(child_id);
                if child.is_folder() {
                    stack.push(child_id);
                }
            }
        }
        result
    }

    /// 删除节点及其全部后代，返回被删除的 id（自身在前）
    pub fn delete_node(&mut self, id: NodeId) -> VfsResult<Vec<NodeId>> {
        if !self.arena.contains_key(id) {
            return Err(VfsError::NotFound);
        }

        let mut removed = vec![id];
        removed.extend(self.descendants(id));
        let removed_set: FxHashSet<NodeId> = removed.iter().copied().collect();

        for node_id in &removed {
            self.arena.remove(*node_id);
        }
        self.order.retain(|node_id| !removed_set.contains(node_id));

        if self.active.is_some_and(|active| removed_set.contains(&active)) {
            let fallback = self.files().next().map(|(file_id, _)| file_id);
            self.active = fallback;
        }
        if self.selected.is_some_and(|selected| removed_set.contains(&selected)) {
            self.selected = None;
        }

        tracing::debug!(?id, removed = removed.len(), "node deleted");
        Ok(removed)
    }

    fn validate(&self, name: &str, parent: Option<NodeId>) -> VfsResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VfsError::InvalidName);
        }
        if let Some(parent) = parent {
            if !self.is_folder(parent) {
                return Err(VfsError::InvalidParent);
            }
        }
        Ok(name.to_string())
    }

    fn insert(&mut self, name: String, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = self.arena.insert(Node { name, parent, kind });
        self.order.push(id);
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_system.rs"]
mod tests;
