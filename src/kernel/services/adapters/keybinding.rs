//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::adapters::settings::parse_keybinding;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
    Explorer,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" => Some(Self::Editor),
            "explorer" | "sidebar" | "sidebar.explorer" => Some(Self::Explorer),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    explorer: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
            explorer: default_explorer_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Command> {
        let found = match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Explorer => {
                self.explorer.get(key).or_else(|| self.global.get(key))
            }
        };
        found.copied()
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editor => &self.editor,
            KeybindingContext::Explorer => &self.explorer,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// 应用设置文件中的覆盖规则；`command` 为空表示解绑。返回生效的条数。
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unparseable keybinding");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);

            let command = rule.command.trim();
            if command.is_empty() {
                let _ = self.unbind(context, &key);
                applied += 1;
                continue;
            }
            match Command::from_name(command) {
                Some(command) => {
                    self.bind(context, key, command);
                    applied += 1;
                }
                None => tracing::warn!(command, "unknown command in keybinding"),
            }
        }
        applied
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
            KeybindingContext::Explorer => &mut self.explorer,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(24);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFile);
    bindings.insert(Key::alt(KeyCode::Char('n')), Command::NewFolder);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('n')), Command::NewFolder);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseTab);
    bindings.insert(Key::ctrl(KeyCode::PageDown), Command::NextTab);
    bindings.insert(Key::ctrl(KeyCode::PageUp), Command::PrevTab);
    bindings.insert(Key::alt(KeyCode::Right), Command::NextTab);
    bindings.insert(Key::alt(KeyCode::Left), Command::PrevTab);

    bindings.insert(Key::ctrl(KeyCode::Char('b')), Command::ToggleFocus);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('e')), Command::FocusExplorer);
    bindings.insert(Key::simple(KeyCode::F(11)), Command::ToggleFullscreen);
    bindings.insert(Key::alt(KeyCode::Char('.')), Command::SidebarWider);
    bindings.insert(Key::alt(KeyCode::Char(',')), Command::SidebarNarrower);
    bindings.insert(Key::simple(KeyCode::F(7)), Command::CycleTheme);
    bindings.insert(Key::simple(KeyCode::F(8)), Command::CycleFontSize);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_explorer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteSelected);
    bindings.insert(
        Key::new(KeyCode::Backspace, KeyModifiers::NONE),
        Command::DeleteSelected,
    );

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
