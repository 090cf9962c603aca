use crate::kernel::layout::LayoutState;
use crate::kernel::session::EditorSession;
use crate::kernel::services::ports::Settings;
use crate::models::{FileSystemStore, NodeId};

pub const NEW_FILE_DEFAULT_NAME: &str = "untitled.js";
pub const NEW_FOLDER_DEFAULT_NAME: &str = "new-folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDialogKind {
    NewFile { parent: Option<NodeId> },
    NewFolder { parent: Option<NodeId> },
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    /// 节点将被创建的位置说明
    pub hint: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn open(&mut self, kind: InputDialogKind, title: &str, value: &str, hint: String) {
        self.visible = true;
        self.title = title.to_string();
        self.hint = hint;
        self.value = value.to_string();
        self.cursor = self.value.len();
        self.error = None;
        self.kind = Some(kind);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    CloseFile { id: NodeId },
    DeleteNode { id: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn show(&mut self, message: String, on_confirm: PendingAction) {
        self.visible = true;
        self.message = message;
        self.on_confirm = Some(on_confirm);
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    /// 最近一次被拒绝操作的提示
    pub notification: Option<String>,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Editor,
            input_dialog: InputDialogState::default(),
            confirm_dialog: ConfirmDialogState::default(),
            notification: None,
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn has_modal(&self) -> bool {
        self.input_dialog.visible || self.confirm_dialog.visible
    }
}

#[derive(Debug)]
pub struct AppState {
    pub project_name: String,
    pub files: FileSystemStore,
    pub session: EditorSession,
    pub layout: LayoutState,
    pub settings: Settings,
    pub ui: UiState,
}

impl AppState {
    pub fn new(project_name: impl Into<String>, files: FileSystemStore, settings: Settings) -> Self {
        let settings = settings.normalized();
        let mut session = EditorSession::new(settings.tab_size);
        session.sync(&files);
        Self {
            project_name: project_name.into(),
            layout: LayoutState::new(settings.sidebar_width),
            files,
            session,
            settings,
            ui: UiState::default(),
        }
    }

    /// 新建对话框的目标父节点：选中的是目录则放在其中，否则放在根层
    pub fn creation_parent(&self) -> Option<NodeId> {
        self.files
            .selected()
            .filter(|id| self.files.is_folder(*id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
