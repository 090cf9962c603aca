//! 命令系统：语义命令定义
//!
//! Command 只描述意图，不关心具体按键；按键映射在前端完成。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,

    // ==================== 编辑操作 ====================
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== 文件操作 ====================
    NewFile,
    NewFolder,
    CloseTab,
    NextTab,
    PrevTab,
    DeleteSelected,

    // ==================== 视图操作 ====================
    FocusExplorer,
    FocusEditor,
    ToggleFocus,
    ToggleFullscreen,
    SidebarWider,
    SidebarNarrower,
    CycleTheme,
    CycleFontSize,

    // ==================== 系统操作 ====================
    Escape,
    Quit,
}

impl Command {
    pub const ALL: [Command; 26] = [
        Command::CursorLeft,
        Command::CursorRight,
        Command::CursorUp,
        Command::CursorDown,
        Command::CursorLineStart,
        Command::CursorLineEnd,
        Command::InsertNewline,
        Command::InsertTab,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::NewFile,
        Command::NewFolder,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::DeleteSelected,
        Command::FocusExplorer,
        Command::FocusEditor,
        Command::ToggleFocus,
        Command::ToggleFullscreen,
        Command::SidebarWider,
        Command::SidebarNarrower,
        Command::CycleTheme,
        Command::CycleFontSize,
        Command::Escape,
        Command::Quit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::NewFile => "newFile",
            Command::NewFolder => "newFolder",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::DeleteSelected => "deleteSelected",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::ToggleFocus => "toggleFocus",
            Command::ToggleFullscreen => "toggleFullscreen",
            Command::SidebarWider => "sidebarWider",
            Command::SidebarNarrower => "sidebarNarrower",
            Command::CycleTheme => "cycleTheme",
            Command::CycleFontSize => "cycleFontSize",
            Command::Escape => "escape",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|cmd| cmd.name() == name)
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
