use crate::core::Command;
use crate::kernel::state::PendingAction;
use crate::kernel::tabs::{self, CloseRequest};
use crate::kernel::{Action, FocusTarget};
use crate::models::{NodeId, VfsError};
use crate::views::file_tree;

pub fn delete_message(name: &str, is_folder: bool) -> String {
    if is_folder {
        format!("Are you sure you want to delete \"{name}\" and all its contents?")
    } else {
        format!("Are you sure you want to delete \"{name}\"?")
    }
}

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        if self.state.ui.has_modal() {
            return super::DispatchResult::unchanged();
        }

        match action {
            Action::CreateFile { name, parent } => {
                match self.state.files.create_file(&name, parent) {
                    Ok(id) => {
                        tracing::info!(?id, name = %name.trim(), "file created");
                        self.state.ui.focus = FocusTarget::Editor;
                        super::DispatchResult::changed(true)
                    }
                    Err(err) => self.reject("create_file", err),
                }
            }
            Action::CreateFolder { name, parent } => {
                match self.state.files.create_folder(&name, parent) {
                    Ok(id) => {
                        tracing::info!(?id, name = %name.trim(), "folder created");
                        super::DispatchResult::changed(true)
                    }
                    Err(err) => self.reject("create_folder", err),
                }
            }
            Action::DeleteNode { id } => {
                let Some(node) = self.state.files.get(id) else {
                    return self.reject("delete_node", VfsError::NotFound);
                };
                let message = delete_message(node.name(), node.is_folder());
                self.state
                    .ui
                    .confirm_dialog
                    .show(message, PendingAction::DeleteNode { id });
                super::DispatchResult::changed(true)
            }
            Action::ToggleFolder { id } => match self.state.files.toggle_folder(id) {
                Ok(_) => super::DispatchResult::changed(true),
                Err(err) => self.reject("toggle_folder", err),
            },
            Action::ExplorerClickRow { row } => {
                let rows = file_tree::flatten(&self.state.files);
                let Some(target) = rows.get(row) else {
                    return super::DispatchResult::unchanged();
                };
                let (id, is_folder) = (target.id, target.is_folder);

                self.state.ui.focus = FocusTarget::Explorer;
                if let Err(err) = self.state.files.select(id) {
                    return self.reject("select", err);
                }
                if is_folder {
                    if let Err(err) = self.state.files.toggle_folder(id) {
                        return self.reject("toggle_folder", err);
                    }
                }
                super::DispatchResult::changed(true)
            }
            Action::ExplorerMoveSelection { delta } => self.move_selection(delta),
            Action::ExplorerActivate => {
                let Some(id) = self.state.files.selected() else {
                    return super::DispatchResult::unchanged();
                };
                if self.state.files.is_folder(id) {
                    match self.state.files.toggle_folder(id) {
                        Ok(_) => super::DispatchResult::changed(true),
                        Err(err) => self.reject("toggle_folder", err),
                    }
                } else {
                    match self.state.files.set_active(id) {
                        Ok(()) => {
                            self.state.ui.focus = FocusTarget::Editor;
                            super::DispatchResult::changed(true)
                        }
                        Err(err) => self.reject("set_active", err),
                    }
                }
            }
            Action::TabActivate { id } => {
                let prev = self.state.files.active();
                match tabs::set_active(&mut self.state.files, id) {
                    Ok(()) => {
                        let focus_changed = self.state.ui.focus != FocusTarget::Editor;
                        self.state.ui.focus = FocusTarget::Editor;
                        super::DispatchResult::changed(prev != Some(id) || focus_changed)
                    }
                    Err(err) => self.reject("activate_tab", err),
                }
            }
            Action::TabClose { id } => match tabs::request_close(&self.state.files, id) {
                Ok(CloseRequest::Ready) => match tabs::finish_close(&mut self.state.files, id) {
                    Ok(()) => super::DispatchResult::changed(true),
                    Err(err) => self.reject("close_tab", err),
                },
                Ok(CloseRequest::NeedsConfirmation { message }) => {
                    self.state
                        .ui
                        .confirm_dialog
                        .show(message, PendingAction::CloseFile { id });
                    super::DispatchResult::changed(true)
                }
                Err(err) => self.reject("close_tab", err),
            },
            _ => super::DispatchResult::unchanged(),
        }
    }

    /// 资源管理器获得焦点时的按键语义
    pub(super) fn explorer_command(&mut self, cmd: Command) -> super::DispatchResult {
        match cmd {
            Command::CursorUp => self.move_selection(-1),
            Command::CursorDown => self.move_selection(1),
            Command::CursorLeft => self.set_selected_folder_open(false),
            Command::CursorRight => self.set_selected_folder_open(true),
            Command::InsertNewline => self.reduce_explorer_action(Action::ExplorerActivate),
            Command::DeleteBackward | Command::DeleteForward => match self.state.files.selected() {
                Some(id) => self.reduce_explorer_action(Action::DeleteNode { id }),
                None => super::DispatchResult::unchanged(),
            },
            _ => super::DispatchResult::unchanged(),
        }
    }

    fn move_selection(&mut self, delta: isize) -> super::DispatchResult {
        let rows = file_tree::flatten(&self.state.files);
        if rows.is_empty() || delta == 0 {
            return super::DispatchResult::unchanged();
        }

        let current = self
            .state
            .files
            .selected()
            .and_then(|id| rows.iter().position(|row| row.id == id));
        let next = match current {
            Some(idx) => (idx as isize + delta).clamp(0, rows.len() as isize - 1) as usize,
            None if delta > 0 => 0,
            None => rows.len() - 1,
        };
        if current == Some(next) {
            return super::DispatchResult::unchanged();
        }

        let id: NodeId = rows[next].id;
        match self.state.files.select(id) {
            Ok(()) => super::DispatchResult::changed(true),
            Err(err) => self.reject("select", err),
        }
    }

    fn set_selected_folder_open(&mut self, open: bool) -> super::DispatchResult {
        let Some(id) = self.state.files.selected() else {
            return super::DispatchResult::unchanged();
        };
        match self.state.files.folder(id) {
            Some(folder) if folder.is_open != open => match self.state.files.toggle_folder(id) {
                Ok(_) => super::DispatchResult::changed(true),
                Err(err) => self.reject("toggle_folder", err),
            },
            _ => super::DispatchResult::unchanged(),
        }
    }
}
