//! 文件日志：终端处于 raw 模式，日志不能写到界面上

use std::path::{Path, PathBuf};

use codepad::kernel::services::adapters::ensure_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "codepad=info";
const LOG_FILE_PREFIX: &str = "codepad";
const LOG_FILE_SUFFIX: &str = "log";
/// 按天滚动，保留最近一周
const MAX_LOG_FILES: usize = 7;

/// 持有后台写线程；drop 时刷新剩余日志
pub struct LoggingGuard {
    _worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn resolve_log_dir() -> Option<PathBuf> {
    match ensure_log_dir() {
        Ok(dir) => Some(dir),
        Err(_) => {
            let dir = std::env::temp_dir().join(LOG_FILE_PREFIX).join("logs");
            std::fs::create_dir_all(&dir).ok().map(|()| dir)
        }
    }
}

/// 失败时返回 `None`，编辑器照常运行，只是没有日志
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir)
        .ok()?;
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "codepad panicked");
    }));

    Some(LoggingGuard {
        _worker: worker,
        log_dir,
    })
}
