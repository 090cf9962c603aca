//! 标签页：store 中的每个文件都是一个打开的标签
//!
//! 关闭标签即删除节点。脏文件的关闭分两步：
//! `request_close` 只给出是否需要确认，确认后由 `finish_close` 执行删除。

use crate::models::{FileSystemStore, NodeId, VfsError, VfsResult};

/// 同步确认通道
pub trait ConfirmChannel {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmChannel for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub id: NodeId,
    pub title: String,
    pub is_dirty: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseRequest {
    Ready,
    NeedsConfirmation { message: String },
}

pub fn close_message(name: &str) -> String {
    format!("Discard unsaved changes to \"{name}\"?")
}

/// 按 store 顺序列出所有文件
pub fn list(store: &FileSystemStore) -> Vec<TabEntry> {
    let active = store.active();
    store
        .files()
        .map(|(id, node)| TabEntry {
            id,
            title: node.name().to_string(),
            is_dirty: node.as_file().is_some_and(|f| f.is_dirty),
            is_active: active == Some(id),
        })
        .collect()
}

pub fn set_active(store: &mut FileSystemStore, id: NodeId) -> VfsResult<()> {
    store.set_active(id)
}

/// 按 store 顺序循环切换活动标签，`delta` 为正向后、为负向前
pub fn cycle(store: &mut FileSystemStore, delta: isize) -> bool {
    let ids: Vec<NodeId> = store.files().map(|(id, _)| id).collect();
    if ids.is_empty() || delta == 0 {
        return false;
    }

    let len = ids.len() as isize;
    let current = store
        .active()
        .and_then(|active| ids.iter().position(|id| *id == active))
        .map(|idx| idx as isize);
    let next = match current {
        Some(idx) => (idx + delta).rem_euclid(len),
        None => 0,
    } as usize;

    let prev = store.active();
    store.set_active(ids[next]).is_ok() && prev != Some(ids[next])
}

pub fn next(store: &mut FileSystemStore) -> bool {
    cycle(store, 1)
}

pub fn prev(store: &mut FileSystemStore) -> bool {
    cycle(store, -1)
}

pub fn request_close(store: &FileSystemStore, id: NodeId) -> VfsResult<CloseRequest> {
    let node = store.get(id).ok_or(VfsError::NotFound)?;
    let file = node.as_file().ok_or(VfsError::NotAFile)?;
    if file.is_dirty {
        Ok(CloseRequest::NeedsConfirmation {
            message: close_message(node.name()),
        })
    } else {
        Ok(CloseRequest::Ready)
    }
}

pub fn finish_close(store: &mut FileSystemStore, id: NodeId) -> VfsResult<()> {
    if !store.contains(id) {
        return Err(VfsError::NotFound);
    }
    if !store.is_file(id) {
        return Err(VfsError::NotAFile);
    }
    store.delete_node(id).map(|_| ())
}

/// 同步版本：需要时通过 `channel` 询问，返回是否真的关闭了
pub fn close_with<C>(store: &mut FileSystemStore, id: NodeId, channel: &mut C) -> VfsResult<bool>
where
    C: ConfirmChannel + ?Sized,
{
    match request_close(store, id)? {
        CloseRequest::Ready => {}
        CloseRequest::NeedsConfirmation { message } => {
            if !channel.confirm(&message) {
                return Ok(false);
            }
        }
    }
    finish_close(store, id)?;
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tabs.rs"]
mod tests;
