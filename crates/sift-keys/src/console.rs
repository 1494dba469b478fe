//! Console abstraction for the confirmation prompt.
//!
//! The [`Console`] trait bundles everything the confirmation loop needs from
//! its host: a blocking key read, a transient status line, a help display,
//! and an alert for invalid input. The default implementation,
//! [`TermConsole`], drives a real terminal through crossterm; tests and
//! headless embedders use [`crate::script::ScriptedConsole`] instead.

use crate::keyboard::KeyPress;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, is_raw_mode_enabled, Clear, ClearType,
};
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Capabilities the confirmation loop requires from its host environment.
///
/// All display text is transient: the last `status` call wins, and the
/// driver clears it on normal termination.
pub trait Console {
    /// Reads one key press, blocking until input arrives.
    fn read_key(&mut self) -> io::Result<KeyPress>;

    /// Shows a transient single-line message, replacing any previous one.
    fn status(&mut self, text: &str) -> io::Result<()>;

    /// Erases the status line.
    fn clear_status(&mut self) -> io::Result<()>;

    /// Displays multi-line help text.
    fn show_help(&mut self, text: &str) -> io::Result<()>;

    /// Signals invalid input: an audible/visual bell plus a short
    /// instruction. Interactive implementations should pause briefly so the
    /// message is readable before the prompt is redrawn.
    fn alert(&mut self, text: &str) -> io::Result<()>;

    /// The key bound to help invocation.
    fn help_key(&self) -> KeyPress;
}

/// A RAII guard for managing raw mode.
///
/// When this guard is dropped, the previous raw mode state is restored.
struct RawModeGuard {
    /// Whether raw mode was already enabled when we entered.
    was_enabled: bool,
}

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        let was_enabled = is_raw_mode_enabled().unwrap_or(false);
        if !was_enabled {
            enable_raw_mode()?;
        }
        Ok(Self { was_enabled })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.was_enabled {
            let _ = disable_raw_mode();
        }
    }
}

/// Crossterm-backed console writing to stderr.
///
/// Raw mode is entered only for the duration of each key read, so status
/// output uses ordinary line discipline. The help key defaults to `?`.
pub struct TermConsole {
    help_key: KeyPress,
    /// How long `alert` pauses so the message is readable.
    alert_pause: Duration,
}

impl TermConsole {
    /// Creates a console with the default `?` help binding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            help_key: KeyPress::plain('?'),
            alert_pause: Duration::from_millis(750),
        }
    }

    /// Sets the help-invocation key.
    #[must_use]
    pub fn with_help_key(mut self, key: KeyPress) -> Self {
        self.help_key = key;
        self
    }

    /// Sets the pause after an alert.
    #[must_use]
    pub fn with_alert_pause(mut self, pause: Duration) -> Self {
        self.alert_pause = pause;
        self
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn read_key(&mut self) -> io::Result<KeyPress> {
        let _guard = RawModeGuard::new()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key.into());
                }
            }
        }
    }

    fn status(&mut self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr();
        queue!(
            stderr,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        stderr.flush()
    }

    fn clear_status(&mut self) -> io::Result<()> {
        let mut stderr = io::stderr();
        execute!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine))
    }

    fn show_help(&mut self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr();
        queue!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for line in text.lines() {
            queue!(stderr, Print(line), Print("\r\n"))?;
        }
        stderr.flush()
    }

    fn alert(&mut self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr();
        queue!(
            stderr,
            Print("\x07"),
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        stderr.flush()?;
        std::thread::sleep(self.alert_pause);
        Ok(())
    }

    fn help_key(&self) -> KeyPress {
        self.help_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_help_key() {
        let console = TermConsole::new();
        assert_eq!(console.help_key(), KeyPress::plain('?'));
    }

    #[test]
    fn test_with_help_key() {
        let console = TermConsole::new().with_help_key(KeyPress::ctrl('h'));
        assert_eq!(console.help_key(), KeyPress::ctrl('h'));
    }

    // Tests that read keys require a real terminal and cannot run in
    // automated test environments; the driver's behavior is covered through
    // ScriptedConsole instead.
}
