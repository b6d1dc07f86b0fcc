use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use choicepad::app::Workbench;
use choicepad::core::event::InputEvent;
use choicepad::fs::LocalFs;
use choicepad::logging;
use choicepad::tui::TerminalGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn document_root() -> PathBuf {
    if let Some(arg) = env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join("Documents");
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let root = document_root();
    tracing::info!(root = %root.display(), "starting");

    let guard = TerminalGuard::new()?;

    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread = choicepad::tui::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut workbench = Workbench::new(&root, Box::new(LocalFs::new()));

    while !workbench.should_quit() {
        terminal.draw(|frame| workbench.render(frame))?;

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal received");
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            let input = InputEvent::from(event::read()?);
            workbench.handle_input(&input);
        }
    }

    drop(terminal);
    guard.restorer().restore()?;
    Ok(())
}
