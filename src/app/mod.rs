//! 应用层：工作台把 kernel 与终端前端连接起来

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::Workbench;
