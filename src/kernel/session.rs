//! 编辑会话：把活动文件绑定到编辑表面
//!
//! 活动文件变化时重新初始化缓冲区；每次内容变化都以整体替换的方式
//! 同步写回 store，不做防抖和差分。

use crate::models::{FileSystemStore, Language, NodeId, TextBuffer, VfsResult};

pub const DEFAULT_TAB_SIZE: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEdit {
    InsertChar(char),
    InsertText(String),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
}

impl EditorEdit {
    pub fn changes_content(&self) -> bool {
        matches!(
            self,
            EditorEdit::InsertChar(_)
                | EditorEdit::InsertText(_)
                | EditorEdit::InsertNewline
                | EditorEdit::InsertTab
                | EditorEdit::DeleteBackward
                | EditorEdit::DeleteForward
        )
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    bound: Option<NodeId>,
    language: Language,
    buffer: TextBuffer,
    tab_size: u8,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            bound: None,
            language: Language::PlainText,
            buffer: TextBuffer::new(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl EditorSession {
    pub fn new(tab_size: u8) -> Self {
        Self {
            tab_size: tab_size.max(1),
            ..Self::default()
        }
    }

    pub fn bound(&self) -> Option<NodeId> {
        self.bound
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn tab_size(&self) -> u8 {
        self.tab_size
    }

    pub fn set_tab_size(&mut self, tab_size: u8) {
        self.tab_size = tab_size.max(1);
    }

    /// 1 起始的 (行, 列)，仅用于显示
    pub fn cursor_position(&self) -> (usize, usize) {
        let (row, col) = self.buffer.cursor();
        (row + 1, col + 1)
    }

    /// 活动文件与绑定文件不一致时重新绑定，返回是否发生了重新绑定
    pub fn sync(&mut self, store: &FileSystemStore) -> bool {
        let active = store.active_file().and_then(|(id, node)| {
            node.as_file().map(|file| (id, file.language, file.content.as_str()))
        });

        match active {
            Some((id, language, content)) => {
                if self.bound == Some(id) {
                    return false;
                }
                self.bound = Some(id);
                self.language = language;
                self.buffer = TextBuffer::from_text(content);
                tracing::debug!(?id, %language, "editor session rebound");
                true
            }
            None => {
                if self.bound.is_none() {
                    return false;
                }
                self.bound = None;
                self.language = Language::PlainText;
                self.buffer = TextBuffer::new();
                true
            }
        }
    }

    /// 应用一次编辑；内容变化时写回 store。返回会话是否有可见变化。
    pub fn apply(&mut self, store: &mut FileSystemStore, edit: EditorEdit) -> VfsResult<bool> {
        let rebound = self.sync(store);
        let Some(id) = self.bound else {
            return Ok(rebound);
        };

        let changed = match edit {
            EditorEdit::InsertChar(ch) => {
                self.buffer.insert_char(ch);
                true
            }
            EditorEdit::InsertText(text) => {
                self.buffer.insert_str(&text);
                !text.is_empty()
            }
            EditorEdit::InsertNewline => {
                self.buffer.insert_char('\n');
                true
            }
            EditorEdit::InsertTab => {
                let indent = " ".repeat(self.tab_size as usize);
                self.buffer.insert_str(&indent);
                true
            }
            EditorEdit::DeleteBackward => self.buffer.delete_backward(),
            EditorEdit::DeleteForward => self.buffer.delete_forward(),
            EditorEdit::CursorLeft => return Ok(self.buffer.move_left() || rebound),
            EditorEdit::CursorRight => return Ok(self.buffer.move_right() || rebound),
            EditorEdit::CursorUp => return Ok(self.buffer.move_up() || rebound),
            EditorEdit::CursorDown => return Ok(self.buffer.move_down() || rebound),
            EditorEdit::CursorLineStart => return Ok(self.buffer.move_line_start() || rebound),
            EditorEdit::CursorLineEnd => return Ok(self.buffer.move_line_end() || rebound),
        };

        if changed {
            store.update_content(id, &self.buffer.text())?;
        }
        Ok(changed || rebound)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
