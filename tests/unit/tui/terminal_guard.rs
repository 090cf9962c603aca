use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_leave: bool,
}

impl TerminalOps for RecordingOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        if self.fail_leave {
            return Err(io::Error::new(io::ErrorKind::Other, "tty gone"));
        }
        Ok(())
    }
}

#[test]
fn guard_leaves_terminal_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::enter_with(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_runs_once_across_clones() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::enter_with(ops.clone()).unwrap();
    let restorer = guard.restorer();
    let other = restorer.clone();

    assert!(!restorer.is_restored());
    restorer.restore().unwrap();
    other.restore().unwrap();
    drop(guard);

    assert!(other.is_restored());
    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_restore_is_not_retried() {
    let ops = Arc::new(RecordingOps {
        fail_leave: true,
        ..RecordingOps::default()
    });
    let guard = TerminalGuard::enter_with(ops.clone()).unwrap();

    assert!(guard.restorer().restore().is_err());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn termination_signals_use_shell_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}

#[cfg(unix)]
#[test]
fn raw_signal_numbers_map_to_termination_signals() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    assert_eq!(TerminationSignal::from_raw(SIGINT), Some(TerminationSignal::SigInt));
    assert_eq!(TerminationSignal::from_raw(SIGTERM), Some(TerminationSignal::SigTerm));
    assert_eq!(TerminationSignal::from_raw(SIGHUP), None);
}
