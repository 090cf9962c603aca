//! 数据模型层

pub mod file_system;
pub mod language;
pub mod text_buffer;

pub use file_system::{
    FileData, FileSystemStore, FolderData, Node, NodeId, NodeKind, VfsError, VfsResult,
};
pub use language::{file_extension, FileIcon, Language};
pub use text_buffer::{slice_to_cow, TextBuffer};
