//! codepad - 内存中的多文件代码编辑器
//!
//! 模块结构：
//! - core: 语义命令
//! - models: 数据模型（FileSystemStore, Language, TextBuffer）
//! - views: 从模型派生的投影（文件树）
//! - kernel: 无界面的应用核心（state/action/effect/store）
//! - tui: 终端适配（ratatui + crossterm）
//! - app: 工作台（输入路由、渲染、副作用执行）

pub mod core;
pub mod kernel;
pub mod models;
pub mod views;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
