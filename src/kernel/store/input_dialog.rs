use crate::kernel::state::{
    InputDialogKind, PendingAction, NEW_FILE_DEFAULT_NAME, NEW_FOLDER_DEFAULT_NAME,
};
use crate::kernel::tabs;
use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn open_new_node_dialog(&mut self, folder: bool) -> super::DispatchResult {
        let parent = self.state.creation_parent();
        let hint = match parent.and_then(|id| self.state.files.get(id)) {
            Some(node) => format!("Will be created in \"{}\"", node.name()),
            None => "Will be created at the project root".to_string(),
        };
        let (kind, title, value) = if folder {
            (
                InputDialogKind::NewFolder { parent },
                "New Folder",
                NEW_FOLDER_DEFAULT_NAME,
            )
        } else {
            (
                InputDialogKind::NewFile { parent },
                "New File",
                NEW_FILE_DEFAULT_NAME,
            )
        };
        self.state.ui.input_dialog.open(kind, title, value, hint);
        super::DispatchResult::changed(true)
    }

    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || ch.is_control() {
                    return super::DispatchResult::unchanged();
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                dialog.cursor = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult::unchanged();
                }

                dialog.cursor = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                super::DispatchResult::changed(true)
            }
            Action::InputDialogAccept => self.accept_input_dialog(),
            Action::InputDialogCancel => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::ConfirmDialogAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                let pending = dialog.on_confirm.take();
                *dialog = Default::default();

                let outcome = match pending {
                    Some(PendingAction::CloseFile { id }) => {
                        tabs::finish_close(&mut self.state.files, id).map(|()| ("close_tab", id))
                    }
                    Some(PendingAction::DeleteNode { id }) => self
                        .state
                        .files
                        .delete_node(id)
                        .map(|_| ("delete_node", id)),
                    None => return super::DispatchResult::changed(true),
                };
                match outcome {
                    Ok((op, id)) => {
                        tracing::info!(op, ?id, "confirmed");
                        super::DispatchResult::changed(true)
                    }
                    Err(err) => self.reject("confirm", err),
                }
            }
            Action::ConfirmDialogCancel => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                *dialog = Default::default();
                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    fn accept_input_dialog(&mut self) -> super::DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        if !dialog.visible {
            return super::DispatchResult::unchanged();
        }
        let Some(kind) = dialog.kind else {
            dialog.reset();
            return super::DispatchResult::changed(true);
        };

        let value = dialog.value.trim().to_string();
        if value.is_empty() {
            let prev = dialog.error.replace("Name required".to_string());
            return super::DispatchResult::changed(prev.as_deref() != dialog.error.as_deref());
        }

        let created = match kind {
            InputDialogKind::NewFile { parent } => self.state.files.create_file(&value, parent),
            InputDialogKind::NewFolder { parent } => {
                self.state.files.create_folder(&value, parent)
            }
        };

        match created {
            Ok(id) => {
                tracing::info!(?id, name = %value, "node created from dialog");
                self.state.ui.input_dialog.reset();
                if matches!(kind, InputDialogKind::NewFile { .. }) {
                    self.state.ui.focus = FocusTarget::Editor;
                }
                super::DispatchResult::changed(true)
            }
            Err(err) => {
                // 父目录可能在对话框打开期间被删除，错误留在对话框里
                tracing::warn!(error = %err, "create from dialog rejected");
                self.state.ui.input_dialog.error = Some(err.to_string());
                super::DispatchResult::changed(true)
            }
        }
    }
}
