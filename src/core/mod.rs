//! 核心类型：与前端无关的语义命令和输入事件

pub mod command;
pub mod event;

pub use command::Command;
