//! UI 主题：把三种编辑器主题映射为终端颜色，避免散落在渲染代码里。

use crate::kernel::services::ports::EditorTheme;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
    pub header_fg: Color,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub active_fg: Color,
    pub folder_fg: Color,
    pub dirty_fg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub gutter_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dialog_bg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
}

impl UiTheme {
    pub fn for_theme(theme: EditorTheme) -> Self {
        match theme {
            EditorTheme::VsDark => Self::dark(),
            EditorTheme::Light => Self::light(),
            EditorTheme::HcBlack => Self::high_contrast(),
        }
    }

    fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x1E, 0x1E, 0x1E),
            fg: Color::Rgb(0xD4, 0xD4, 0xD4),
            muted_fg: Color::Indexed(8),
            header_fg: Color::Indexed(6),
            focus_border: Color::Indexed(6),
            inactive_border: Color::Indexed(8),
            selected_bg: Color::Rgb(0x37, 0x37, 0x3D),
            selected_fg: Color::Indexed(15),
            active_fg: Color::Rgb(0x4F, 0xC1, 0xFF),
            folder_fg: Color::Rgb(0xDC, 0xDC, 0xAA),
            dirty_fg: Color::Indexed(3),
            tab_active_bg: Color::Rgb(0x1E, 0x1E, 0x1E),
            tab_active_fg: Color::Indexed(15),
            tab_inactive_fg: Color::Indexed(8),
            gutter_fg: Color::Rgb(0x85, 0x85, 0x85),
            status_bg: Color::Rgb(0x00, 0x7A, 0xCC),
            status_fg: Color::Indexed(15),
            dialog_bg: Color::Rgb(0x25, 0x25, 0x26),
            error_fg: Color::Indexed(1),
            warning_fg: Color::Indexed(3),
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            fg: Color::Rgb(0x33, 0x33, 0x33),
            muted_fg: Color::Rgb(0x80, 0x80, 0x80),
            header_fg: Color::Rgb(0x00, 0x5F, 0xB8),
            focus_border: Color::Rgb(0x00, 0x5F, 0xB8),
            inactive_border: Color::Rgb(0xC8, 0xC8, 0xC8),
            selected_bg: Color::Rgb(0xE4, 0xE6, 0xF1),
            selected_fg: Color::Rgb(0x00, 0x00, 0x00),
            active_fg: Color::Rgb(0x00, 0x5F, 0xB8),
            folder_fg: Color::Rgb(0x79, 0x5E, 0x26),
            dirty_fg: Color::Rgb(0xBF, 0x88, 0x03),
            tab_active_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            tab_active_fg: Color::Rgb(0x33, 0x33, 0x33),
            tab_inactive_fg: Color::Rgb(0x80, 0x80, 0x80),
            gutter_fg: Color::Rgb(0x23, 0x78, 0x93),
            status_bg: Color::Rgb(0x00, 0x7A, 0xCC),
            status_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            dialog_bg: Color::Rgb(0xF3, 0xF3, 0xF3),
            error_fg: Color::Rgb(0xE5, 0x14, 0x00),
            warning_fg: Color::Rgb(0xBF, 0x88, 0x03),
        }
    }

    fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            muted_fg: Color::Gray,
            header_fg: Color::Yellow,
            focus_border: Color::Yellow,
            inactive_border: Color::White,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            active_fg: Color::Yellow,
            folder_fg: Color::LightCyan,
            dirty_fg: Color::LightYellow,
            tab_active_bg: Color::Black,
            tab_active_fg: Color::Yellow,
            tab_inactive_fg: Color::White,
            gutter_fg: Color::White,
            status_bg: Color::Black,
            status_fg: Color::White,
            dialog_bg: Color::Black,
            error_fg: Color::LightRed,
            warning_fg: Color::Yellow,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::for_theme(EditorTheme::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
