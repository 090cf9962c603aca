use clap::Parser;
use codepad::app::Workbench;
use codepad::kernel::services::adapters::{
    ensure_settings_file, load_settings_from, KeybindingService,
};
use codepad::kernel::services::ports::Settings;
use codepad::kernel::AppState;
use codepad::models::FileSystemStore;
use codepad::tui::crossterm::into_input_event;
use codepad::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use codepad::tui::view::View;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 终端里的内存多文件代码编辑器
#[derive(Debug, Parser)]
#[command(name = "codepad", version, about)]
struct Args {
    /// 侧边栏与标题栏显示的项目名
    #[arg(long, default_value = "untitled")]
    project: String,

    /// 不创建示例文件，从空项目开始
    #[arg(long)]
    empty: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::info!(log_dir = %guard.log_dir().display(), "codepad starting");
    }

    let (settings, settings_path) = load_startup_settings();
    let mut keybindings = KeybindingService::new();
    let applied = keybindings.apply_rules(&settings.keybindings);
    tracing::debug!(applied, "keybinding overrides applied");

    let files = if args.empty {
        FileSystemStore::new()
    } else {
        FileSystemStore::with_starter()
    };
    let state = AppState::new(args.project, files, settings);
    let workbench = Workbench::new(state, keybindings, settings_path);

    match run(workbench)? {
        Some(signal) => {
            tracing::info!(?signal, "terminated by signal");
            std::process::exit(signal.exit_code());
        }
        None => {
            tracing::info!("codepad exited");
            Ok(())
        }
    }
}

/// 读取失败时使用默认设置，且不再回写
fn load_startup_settings() -> (Settings, Option<std::path::PathBuf>) {
    let path = match ensure_settings_file() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(error = %err, "settings file unavailable");
            return (Settings::default(), None);
        }
    };
    match load_settings_from(&path) {
        Ok(settings) => (settings, Some(path)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "load settings failed");
            (Settings::default(), Some(path))
        }
    }
}

/// 返回 `Some(signal)` 表示被信号中断
fn run(mut workbench: Workbench) -> io::Result<Option<TerminationSignal>> {
    let guard = TerminalGuard::enter()?;

    let restorer = guard.restorer();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        default_hook(info);
    }));

    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread =
        codepad::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            drop(terminal);
            drop(guard);
            return Ok(Some(signal));
        }

        terminal.draw(|frame| {
            workbench.render(frame, frame.area());
            if let Some((x, y)) = workbench.cursor_position() {
                frame.set_cursor_position(Position::new(x, y));
            }
        })?;

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };
        if workbench.handle_input(&event).is_quit() {
            break;
        }
    }

    drop(terminal);
    drop(guard);
    Ok(None)
}
