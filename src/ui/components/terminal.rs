use std::io::Stdout;

use crossterm::{execute, terminal, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// RAII wrapper that keeps raw/alternate mode scoped to the form session.
pub struct TerminalGuard {
    terminal: Tui,
    restored: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Idempotent.
    pub fn restore(&mut self) -> Result<()> {
        if !self.restored {
            self.terminal.show_cursor()?;
            self.terminal
                .backend_mut()
                .execute(terminal::LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
            self.restored = true;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Leave raw mode before the default hook prints, so panics stay readable.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(std::io::stdout(), terminal::LeaveAlternateScreen);
        previous(info);
    }));
}
