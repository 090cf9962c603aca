//! 终端前端（crossterm + ratatui）
//!
//! 与 `kernel`/`models` 分开，核心不依赖终端库。

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
