use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::SetCursorStyle::BlinkingBar
        )?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Best-effort restore: try all steps even if one fails.
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape
        ) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };

            let _ = tx.send(signal);

            // Grace period: if the main loop is wedged, restore + hard-exit.
            std::thread::sleep(Duration::from_secs(2));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingOps {
        setups: AtomicUsize,
        restores: AtomicUsize,
    }

    impl TerminalOps for CountingOps {
        fn setup(&self) -> io::Result<()> {
            self.setups.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn restore(&self) -> io::Result<()> {
            self.restores.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_guard_runs_setup_and_restores_on_drop() {
        let ops = Arc::new(CountingOps::default());
        let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        assert_eq!(ops.setups.load(Ordering::SeqCst), 1);
        assert_eq!(ops.restores.load(Ordering::SeqCst), 0);
        drop(guard);
        assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_restore_is_idempotent() {
        let ops = Arc::new(CountingOps::default());
        let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        let restorer = guard.restorer();
        restorer.restore().unwrap();
        restorer.restore().unwrap();
        drop(guard);
        assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_setup_propagates() {
        struct FailingOps;
        impl TerminalOps for FailingOps {
            fn setup(&self) -> io::Result<()> {
                Err(io::Error::other("setup failed"))
            }
            fn restore(&self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(TerminalGuard::with_ops(Arc::new(FailingOps)).is_err());
    }

    #[test]
    fn test_signal_exit_codes() {
        assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
        assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
    }
}
