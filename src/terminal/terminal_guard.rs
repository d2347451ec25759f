use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Puts the terminal into drawing mode and takes it back out.
pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode plus a cleared alternate screen. The cursor stays visible so the parking position
/// shows.
#[derive(Debug, Default)]
pub struct AlternateScreenOps;

impl ScreenOps for AlternateScreenOps {
    fn enter(&self) -> io::Result<()> {
        use ::crossterm::{
            execute,
            terminal::{enable_raw_mode, Clear, ClearType, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Clear(ClearType::All))
    }

    fn leave(&self) -> io::Result<()> {
        use ::crossterm::{
            cursor, execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Try both steps even if one fails.
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct ScreenRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn ScreenOps>,
}

impl ScreenRestorer {
    /// Leaves drawing mode once; later calls are no-ops.
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }
}

/// Restores the screen when dropped, including during unwinding.
pub struct ScreenGuard {
    restorer: ScreenRestorer,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(AlternateScreenOps))
    }

    pub fn with_ops(ops: Arc<dyn ScreenOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: ScreenRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restorer.restore() {
            tracing::warn!(error = %error, "screen restore failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/terminal_guard.rs"]
mod tests;
