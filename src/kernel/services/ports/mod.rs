//! Service ports: data contracts.

pub mod settings;

pub use settings::{EditorTheme, KeybindingRule, Settings, DEFAULT_FONT_SIZE, FONT_SIZES};
