use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal when dropped or when the process panics.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        *self.cleanup.lock() = Some(Box::new(cleanup));
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(cleanup) = cleanup.lock().take() {
                cleanup();
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Some(cleanup) = self.cleanup.lock().take() {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let (terminal, guard) = guarded(restore_terminal, || {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })?;
    guard.install_panic_hook();

    Ok((terminal, guard))
}

/// Arm a guard with `cleanup`, then run `setup`.
///
/// If `setup` fails the guard is dropped and `cleanup` runs before the
/// error is returned.
fn guarded<T, C, S>(cleanup: C, setup: S) -> io::Result<(T, TerminalGuard)>
where
    C: FnOnce() + Send + 'static,
    S: FnOnce() -> io::Result<T>,
{
    let guard = TerminalGuard::new();
    guard.set_cleanup(cleanup);
    let value = setup()?;
    Ok((value, guard))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(runs: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
        let runs = Arc::clone(runs);
        move || {
            runs.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn failed_setup_restores_immediately() {
        let runs = Arc::new(AtomicUsize::new(0));
        let result: io::Result<((), TerminalGuard)> = guarded(counting(&runs), || {
            Err(io::Error::other("mouse capture unsupported"))
        });
        assert!(result.is_err());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn successful_setup_restores_on_drop_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let (value, guard) = guarded(counting(&runs), || Ok(7)).expect("setup");
        assert_eq!(value, 7);
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        guard.restore();
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
