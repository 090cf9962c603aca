use crate::core::Command;
use crate::kernel::session::EditorEdit;
use crate::models::NodeId;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    Editor(EditorEdit),
    CreateFile {
        name: String,
        parent: Option<NodeId>,
    },
    CreateFolder {
        name: String,
        parent: Option<NodeId>,
    },
    /// 请求删除，先弹出确认框
    DeleteNode {
        id: NodeId,
    },
    ToggleFolder {
        id: NodeId,
    },
    ExplorerClickRow {
        row: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerActivate,
    TabActivate {
        id: NodeId,
    },
    TabClose {
        id: NodeId,
    },
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    SidebarResizeStart,
    SidebarResizeTo {
        x: i32,
    },
    SidebarResizeEnd,
    FullscreenChanged(bool),
    DismissNotification,
}
