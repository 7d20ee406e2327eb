//! Terminal UI for the recipe grid
//!
//! ratatui + crossterm front end: header strip, search bar, card grid,
//! status bar. All state lives in [`app::App`]; the catalog is loaded once
//! when the screen opens and never reloaded.

pub mod app;
pub mod grid;
pub mod search;
pub mod ui;

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::AppConfig;

pub use app::App;

/// Restores the terminal when dropped, so errors and panics anywhere after
/// raw mode is enabled still leave the shell usable.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, Show);
}

/// Run the TUI until the user quits. The terminal is restored even when the
/// app loop errors or panics.
pub fn run(config: AppConfig) -> crate::Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    execute!(std::io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = App::new(config);
    app.run(&mut terminal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_on_panic_unwind() {
        // Restoration must run during unwind, not only on the happy path.
        // Off a tty the crossterm calls fail and are ignored, so this only
        // checks the drop path executes without a secondary panic.
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard;
            panic!("app loop died");
        });
        assert!(result.is_err());
    }

    #[test]
    fn restore_is_idempotent() {
        restore_terminal();
        restore_terminal();
    }
}
