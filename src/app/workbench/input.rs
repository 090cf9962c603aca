use super::{render, Workbench};
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, EditorEdit, FocusTarget};
use crate::tui::view::EventResult;
use ratatui::layout::Rect;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let changed = match event {
        InputEvent::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return EventResult::Ignored;
            }
            workbench.handle_key_event(key_event)
        }
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse_event(mouse_event),
        InputEvent::Resize(_, _) => true,
        InputEvent::FocusGained | InputEvent::FocusLost => false,
    };

    if workbench.should_quit() {
        return EventResult::Quit;
    }
    EventResult::from_changed(changed)
}

fn is_plain_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch)
            if !event.modifiers.contains(KeyModifiers::CONTROL)
                && !event.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

impl Workbench {
    fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        let ui = &self.store.state().ui;
        if ui.confirm_dialog.visible {
            return self.handle_confirm_key(event);
        }
        if ui.input_dialog.visible {
            return self.handle_input_dialog_key(event);
        }

        let context = match self.focus() {
            FocusTarget::Editor => KeybindingContext::Editor,
            FocusTarget::Explorer => KeybindingContext::Explorer,
        };
        let key = Key::from(*event);
        if let Some(command) = self.keybindings.resolve(context, &key) {
            return self.dispatch_kernel(KernelAction::RunCommand(command));
        }

        match (self.focus(), is_plain_char(event)) {
            (FocusTarget::Editor, Some(ch)) => {
                self.dispatch_kernel(KernelAction::Editor(EditorEdit::InsertChar(ch)))
            }
            _ => false,
        }
    }

    fn handle_confirm_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.dispatch_kernel(KernelAction::ConfirmDialogAccept)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.dispatch_kernel(KernelAction::ConfirmDialogCancel)
            }
            _ => false,
        }
    }

    fn handle_input_dialog_key(&mut self, event: &KeyEvent) -> bool {
        let action = match event.code {
            KeyCode::Enter => KernelAction::InputDialogAccept,
            KeyCode::Esc => KernelAction::InputDialogCancel,
            KeyCode::Backspace => KernelAction::InputDialogBackspace,
            KeyCode::Left => KernelAction::InputDialogCursorLeft,
            KeyCode::Right => KernelAction::InputDialogCursorRight,
            _ => match is_plain_char(event) {
                Some(ch) => KernelAction::InputDialogAppend(ch),
                None => return false,
            },
        };
        self.dispatch_kernel(action)
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        let ui = &self.store.state().ui;
        if ui.confirm_dialog.visible {
            return false;
        }
        if ui.input_dialog.visible {
            let mut changed = false;
            for ch in text.chars().filter(|ch| !ch.is_control()) {
                changed |= self.dispatch_kernel(KernelAction::InputDialogAppend(ch));
            }
            return changed;
        }
        if self.focus() != FocusTarget::Editor {
            return false;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.dispatch_kernel(KernelAction::Editor(EditorEdit::InsertText(text)))
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> bool {
        if self.store.state().ui.has_modal() {
            return false;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(event),
            MouseEventKind::Drag(MouseButton::Left) => {
                if !self.store.state().layout.is_resizing() {
                    return false;
                }
                let origin = self.last_sidebar_area.map(|area| area.x).unwrap_or(0);
                let columns = event.column.saturating_sub(origin) + 1;
                let x = i32::from(columns) * i32::from(render::CELL_WIDTH_PX);
                self.dispatch_kernel(KernelAction::SidebarResizeTo { x })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.store.state().layout.is_resizing() {
                    self.dispatch_kernel(KernelAction::SidebarResizeEnd)
                } else {
                    false
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let in_tree = self
                    .last_tree_area
                    .is_some_and(|area| rect_contains(area, event.column, event.row));
                if !in_tree {
                    return false;
                }
                let delta = if event.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                self.dispatch_kernel(KernelAction::ExplorerMoveSelection { delta })
            }
            _ => false,
        }
    }

    fn handle_left_click(&mut self, event: &MouseEvent) -> bool {
        let (x, y) = (event.column, event.row);

        if let (Some(splitter_x), Some(sidebar)) = (self.last_splitter_x, self.last_sidebar_area) {
            if x == splitter_x && y >= sidebar.y && y < sidebar.y + sidebar.height {
                return self.dispatch_kernel(KernelAction::SidebarResizeStart);
            }
        }

        if let Some(tree) = self.last_tree_area {
            if rect_contains(tree, x, y) {
                let row = self.tree_scroll + usize::from(y - tree.y);
                return self.dispatch_kernel(KernelAction::ExplorerClickRow { row });
            }
        }

        if let Some(sidebar) = self.last_sidebar_area {
            if rect_contains(sidebar, x, y) {
                return self.dispatch_kernel(KernelAction::RunCommand(Command::FocusExplorer));
            }
        }

        if self
            .last_tab_bar_area
            .is_some_and(|area| rect_contains(area, x, y))
        {
            let hit = self
                .last_tabs
                .iter()
                .find(|tab| rect_contains(tab.area, x, y))
                .copied();
            return match hit {
                Some(tab) if x == tab.close_x => {
                    self.dispatch_kernel(KernelAction::TabClose { id: tab.id })
                }
                Some(tab) => self.dispatch_kernel(KernelAction::TabActivate { id: tab.id }),
                None => false,
            };
        }

        if self
            .last_editor_area
            .is_some_and(|area| rect_contains(area, x, y))
        {
            return self.dispatch_kernel(KernelAction::RunCommand(Command::FocusEditor));
        }

        false
    }
}
