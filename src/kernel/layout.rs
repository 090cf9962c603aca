//! 侧边栏宽度与全屏状态
//!
//! 宽度以逻辑像素计，始终落在 [`SIDEBAR_MIN_WIDTH`, `SIDEBAR_MAX_WIDTH`] 内。

pub const SIDEBAR_MIN_WIDTH: u16 = 160;
pub const SIDEBAR_MAX_WIDTH: u16 = 500;
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 250;
/// 键盘调整宽度时的步长
pub const SIDEBAR_NUDGE_STEP: i32 = 16;

pub fn clamp_sidebar_width(width: i32) -> u16 {
    width.clamp(SIDEBAR_MIN_WIDTH as i32, SIDEBAR_MAX_WIDTH as i32) as u16
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    sidebar_width: u16,
    resizing: bool,
    fullscreen: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(SIDEBAR_DEFAULT_WIDTH)
    }
}

impl LayoutState {
    pub fn new(sidebar_width: u16) -> Self {
        Self {
            sidebar_width: clamp_sidebar_width(sidebar_width as i32),
            resizing: false,
            fullscreen: false,
        }
    }

    pub fn sidebar_width(&self) -> u16 {
        self.sidebar_width
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn begin_resize(&mut self) -> bool {
        let changed = !self.resizing;
        self.resizing = true;
        changed
    }

    /// 拖动到横坐标 `x`，仅在拖动中生效
    pub fn resize_to(&mut self, x: i32) -> bool {
        if !self.resizing {
            return false;
        }
        self.set_width(x)
    }

    pub fn end_resize(&mut self) -> bool {
        let changed = self.resizing;
        self.resizing = false;
        changed
    }

    pub fn nudge(&mut self, delta: i32) -> bool {
        self.set_width(self.sidebar_width as i32 + delta)
    }

    /// 跟随宿主的全屏状态
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        let changed = self.fullscreen != fullscreen;
        self.fullscreen = fullscreen;
        changed
    }

    fn set_width(&mut self, width: i32) -> bool {
        let width = clamp_sidebar_width(width);
        let changed = width != self.sidebar_width;
        self.sidebar_width = width;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
