use crate::kernel::session::EditorEdit;

impl super::Store {
    pub(super) fn reduce_editor(&mut self, edit: EditorEdit) -> super::DispatchResult {
        if self.state.ui.has_modal() {
            return super::DispatchResult::unchanged();
        }

        let state = &mut self.state;
        match state.session.apply(&mut state.files, edit) {
            Ok(changed) => super::DispatchResult::changed(changed),
            Err(err) => self.reject("edit", err),
        }
    }
}
