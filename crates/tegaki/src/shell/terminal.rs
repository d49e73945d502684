//! Terminal setup and teardown for the capture shell.
//!
//! Handles crossterm terminal initialization and restoration.
//!
//! Critical: includes a custom panic hook to restore the terminal on crash.

use std::io::{self, stdout};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Install a panic hook that restores the terminal before showing panic info.
/// Without this, a panic in raw mode leaves the terminal unusable.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal FIRST, before printing anything
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        );

        original_hook(panic_info);
    }));
}

/// Initialize the terminal for the capture shell.
///
/// - Installs the panic hook (before entering raw mode)
/// - Enables raw mode (no line buffering)
/// - Enters the alternate screen (preserves scrollback)
/// - Enables mouse capture (pointer events drive the surface)
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured.
pub fn init() -> io::Result<Tui> {
    install_panic_hook();

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
///
/// # Errors
///
/// Returns an error if the terminal cannot be restored.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
