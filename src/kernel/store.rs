use crate::core::Command;
use crate::kernel::layout::SIDEBAR_NUDGE_STEP;
use crate::kernel::session::EditorEdit;
use crate::kernel::tabs;
use crate::models::VfsError;

use super::{Action, AppState, Effect, FocusTarget};

mod editor;
mod explorer;
mod input_dialog;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let mut result = match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Editor(edit) => self.reduce_editor(edit),
            action @ (Action::CreateFile { .. }
            | Action::CreateFolder { .. }
            | Action::DeleteNode { .. }
            | Action::ToggleFolder { .. }
            | Action::ExplorerClickRow { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerActivate
            | Action::TabActivate { .. }
            | Action::TabClose { .. }) => self.reduce_explorer_action(action),
            action @ (Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel
            | Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel) => self.reduce_input_dialog_action(action),
            Action::SidebarResizeStart => {
                DispatchResult::changed(self.state.layout.begin_resize())
            }
            Action::SidebarResizeTo { x } => {
                DispatchResult::changed(self.state.layout.resize_to(x))
            }
            Action::SidebarResizeEnd => {
                let was_resizing = self.state.layout.is_resizing();
                let changed = self.state.layout.end_resize();
                if was_resizing {
                    self.persist_sidebar_width(changed)
                } else {
                    DispatchResult::changed(changed)
                }
            }
            Action::FullscreenChanged(fullscreen) => {
                DispatchResult::changed(self.state.layout.set_fullscreen(fullscreen))
            }
            Action::DismissNotification => {
                DispatchResult::changed(self.state.ui.notification.take().is_some())
            }
        };

        // 活动文件可能被任何 action 改变，统一在这里重新绑定编辑会话
        if self.state.session.sync(&self.state.files) {
            result.state_changed = true;
        }
        result
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        if self.state.ui.has_modal() && !matches!(cmd, Command::Escape | Command::Quit) {
            return DispatchResult::unchanged();
        }

        match cmd {
            Command::CursorLeft
            | Command::CursorRight
            | Command::CursorUp
            | Command::CursorDown
            | Command::CursorLineStart
            | Command::CursorLineEnd
            | Command::InsertNewline
            | Command::InsertTab
            | Command::DeleteBackward
            | Command::DeleteForward => match self.state.ui.focus {
                FocusTarget::Editor => match editor_edit_for(cmd) {
                    Some(edit) => self.reduce_editor(edit),
                    None => DispatchResult::unchanged(),
                },
                FocusTarget::Explorer => self.explorer_command(cmd),
            },
            Command::NewFile => self.open_new_node_dialog(false),
            Command::NewFolder => self.open_new_node_dialog(true),
            Command::CloseTab => match self.state.files.active() {
                Some(id) => self.reduce_explorer_action(Action::TabClose { id }),
                None => DispatchResult::unchanged(),
            },
            Command::NextTab => DispatchResult::changed(tabs::next(&mut self.state.files)),
            Command::PrevTab => DispatchResult::changed(tabs::prev(&mut self.state.files)),
            Command::DeleteSelected => match self.state.files.selected() {
                Some(id) => self.reduce_explorer_action(Action::DeleteNode { id }),
                None => DispatchResult::unchanged(),
            },
            Command::FocusExplorer => self.set_focus(FocusTarget::Explorer),
            Command::FocusEditor => self.set_focus(FocusTarget::Editor),
            Command::ToggleFocus => {
                let next = match self.state.ui.focus {
                    FocusTarget::Explorer => FocusTarget::Editor,
                    FocusTarget::Editor => FocusTarget::Explorer,
                };
                self.set_focus(next)
            }
            Command::ToggleFullscreen => DispatchResult {
                effects: vec![Effect::SetFullscreen(!self.state.layout.is_fullscreen())],
                state_changed: false,
            },
            Command::SidebarWider => {
                let changed = self.state.layout.nudge(SIDEBAR_NUDGE_STEP);
                self.persist_sidebar_width(changed)
            }
            Command::SidebarNarrower => {
                let changed = self.state.layout.nudge(-SIDEBAR_NUDGE_STEP);
                self.persist_sidebar_width(changed)
            }
            Command::CycleTheme => {
                self.state.settings.theme = self.state.settings.theme.next();
                self.save_settings()
            }
            Command::CycleFontSize => {
                self.state.settings.font_size = self.state.settings.next_font_size();
                self.save_settings()
            }
            Command::Escape => {
                if self.state.ui.input_dialog.visible {
                    self.reduce_input_dialog_action(Action::InputDialogCancel)
                } else if self.state.ui.confirm_dialog.visible {
                    self.reduce_input_dialog_action(Action::ConfirmDialogCancel)
                } else {
                    DispatchResult::changed(self.state.ui.notification.take().is_some())
                }
            }
            Command::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
        }
    }

    fn set_focus(&mut self, focus: FocusTarget) -> DispatchResult {
        let prev = self.state.ui.focus;
        self.state.ui.focus = focus;
        DispatchResult::changed(prev != focus)
    }

    fn persist_sidebar_width(&mut self, changed: bool) -> DispatchResult {
        let width = self.state.layout.sidebar_width();
        if self.state.settings.sidebar_width == width {
            return DispatchResult::changed(changed);
        }
        self.state.settings.sidebar_width = width;
        self.save_settings()
    }

    fn save_settings(&mut self) -> DispatchResult {
        DispatchResult {
            effects: vec![Effect::SaveSettings(self.state.settings.clone())],
            state_changed: true,
        }
    }

    /// 被拒绝的模型操作只记录并提示，不改变其余状态
    fn reject(&mut self, op: &'static str, err: VfsError) -> DispatchResult {
        tracing::warn!(op, error = %err, "operation rejected");
        self.state.ui.notification = Some(err.to_string());
        DispatchResult::changed(true)
    }
}

fn editor_edit_for(cmd: Command) -> Option<EditorEdit> {
    let edit = match cmd {
        Command::CursorLeft => EditorEdit::CursorLeft,
        Command::CursorRight => EditorEdit::CursorRight,
        Command::CursorUp => EditorEdit::CursorUp,
        Command::CursorDown => EditorEdit::CursorDown,
        Command::CursorLineStart => EditorEdit::CursorLineStart,
        Command::CursorLineEnd => EditorEdit::CursorLineEnd,
        Command::InsertNewline => EditorEdit::InsertNewline,
        Command::InsertTab => EditorEdit::InsertTab,
        Command::DeleteBackward => EditorEdit::DeleteBackward,
        Command::DeleteForward => EditorEdit::DeleteForward,
        _ => return None,
    };
    Some(edit)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
