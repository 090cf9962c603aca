use serde::{Deserialize, Serialize};

use crate::kernel::layout::{clamp_sidebar_width, SIDEBAR_DEFAULT_WIDTH};
use crate::kernel::session::DEFAULT_TAB_SIZE;

pub const FONT_SIZES: [u8; 5] = [12, 14, 16, 18, 20];
pub const DEFAULT_FONT_SIZE: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorTheme {
    #[serde(rename = "light")]
    Light,
    #[default]
    #[serde(rename = "vs-dark")]
    VsDark,
    #[serde(rename = "hc-black")]
    HcBlack,
}

impl EditorTheme {
    pub const ALL: [EditorTheme; 3] = [EditorTheme::Light, EditorTheme::VsDark, EditorTheme::HcBlack];

    pub fn label(self) -> &'static str {
        match self {
            EditorTheme::Light => "Light",
            EditorTheme::VsDark => "Dark",
            EditorTheme::HcBlack => "High Contrast",
        }
    }

    pub fn is_dark(self) -> bool {
        !matches!(self, EditorTheme::Light)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    /// 空字符串表示解绑
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: EditorTheme,
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

fn default_font_size() -> u8 {
    DEFAULT_FONT_SIZE
}

fn default_tab_size() -> u8 {
    DEFAULT_TAB_SIZE
}

fn default_sidebar_width() -> u16 {
    SIDEBAR_DEFAULT_WIDTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: EditorTheme::default(),
            font_size: DEFAULT_FONT_SIZE,
            tab_size: DEFAULT_TAB_SIZE,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            keybindings: Vec::new(),
        }
    }
}

impl Settings {
    /// 把越界或不在选项内的值收敛到合法值
    pub fn normalized(mut self) -> Self {
        if !FONT_SIZES.contains(&self.font_size) {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        if self.tab_size == 0 {
            self.tab_size = DEFAULT_TAB_SIZE;
        }
        self.sidebar_width = clamp_sidebar_width(self.sidebar_width as i32);
        self
    }

    pub fn next_font_size(&self) -> u8 {
        let idx = FONT_SIZES
            .iter()
            .position(|size| *size == self.font_size)
            .map(|idx| (idx + 1) % FONT_SIZES.len())
            .unwrap_or(1);
        FONT_SIZES[idx]
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
