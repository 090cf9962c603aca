//! 工作台模块：统一管理输入分发、渲染与副作用执行

use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{save_settings_to, KeybindingService};
use crate::kernel::{Action as KernelAction, AppState, Effect, FocusTarget, Store};
use crate::models::NodeId;
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;

mod input;
mod render;

pub use render::{sidebar_columns, CELL_WIDTH_PX};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const TAB_BAR_HEIGHT: u16 = 1;
const EDITOR_MIN_COLUMNS: u16 = 20;

/// 上一帧中一个标签的可点击区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TabHit {
    id: NodeId,
    area: Rect,
    close_x: u16,
}

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    settings_path: Option<PathBuf>,
    last_sidebar_area: Option<Rect>,
    last_tree_area: Option<Rect>,
    /// 树的首个可见行
    tree_scroll: usize,
    last_splitter_x: Option<u16>,
    last_tab_bar_area: Option<Rect>,
    last_tabs: Vec<TabHit>,
    last_editor_area: Option<Rect>,
    last_cursor: Option<(u16, u16)>,
}

impl Workbench {
    /// `settings_path` 为 `None` 时不落盘（测试）
    pub fn new(
        state: AppState,
        keybindings: KeybindingService,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            store: Store::new(state),
            keybindings,
            settings_path,
            last_sidebar_area: None,
            last_tree_area: None,
            tree_scroll: 0,
            last_splitter_x: None,
            last_tab_bar_area: None,
            last_tabs: Vec::new(),
            last_editor_area: None,
            last_cursor: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::SaveSettings(settings) => {
                if let Some(path) = self.settings_path.as_deref() {
                    if let Err(err) = save_settings_to(path, &settings) {
                        tracing::error!(path = %path.display(), error = %err, "save settings failed");
                    }
                }
                false
            }
            // 终端里的全屏就是隐藏外围区域，前端直接确认即可
            Effect::SetFullscreen(fullscreen) => {
                self.dispatch_kernel(KernelAction::FullscreenChanged(fullscreen))
            }
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.last_cursor
    }
}
