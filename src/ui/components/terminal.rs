use std::io::{self, Stdout};

use crossterm::{cursor, execute, terminal};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::Result;

/// Owns the terminal for the lifetime of one screen.
///
/// Raw mode and the alternate screen are entered on construction and left
/// exactly once, either through [`TerminalGuard::finish`] or on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Hand the terminal back to the shell and yield the screen's result.
    pub fn finish<T>(mut self, value: T) -> Result<T> {
        self.release()?;
        Ok(value)
    }

    fn release(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            terminal::disable_raw_mode()?;
            execute!(
                self.terminal.backend_mut(),
                terminal::LeaveAlternateScreen,
                cursor::Show
            )?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
