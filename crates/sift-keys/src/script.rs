//! A deterministic in-memory console.
//!
//! [`ScriptedConsole`] feeds the confirmation loop a fixed sequence of key
//! presses and records everything the loop displays. It backs the driver's
//! test suite and is also useful for headless embedding.

use crate::console::Console;
use crate::keyboard::KeyPress;
use std::collections::VecDeque;
use std::io;

/// A console that replays a scripted key sequence and records output.
#[derive(Debug)]
pub struct ScriptedConsole {
    keys: VecDeque<KeyPress>,
    help_key: KeyPress,
    statuses: Vec<String>,
    help_screens: Vec<String>,
    alerts: Vec<String>,
    key_reads: usize,
    clear_count: usize,
}

impl ScriptedConsole {
    /// Creates a console that will produce the given key presses in order.
    ///
    /// The help key defaults to `?`.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            help_key: KeyPress::plain('?'),
            statuses: Vec::new(),
            help_screens: Vec::new(),
            alerts: Vec::new(),
            key_reads: 0,
            clear_count: 0,
        }
    }

    /// Sets the help-invocation key.
    #[must_use]
    pub fn with_help_key(mut self, key: KeyPress) -> Self {
        self.help_key = key;
        self
    }

    /// Every status line shown so far, in order.
    #[must_use]
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Every help screen shown so far.
    #[must_use]
    pub fn help_screens(&self) -> &[String] {
        &self.help_screens
    }

    /// Every alert message shown so far.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// How many times `read_key` was called.
    #[must_use]
    pub fn key_reads(&self) -> usize {
        self.key_reads
    }

    /// How many times the status line was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Keys remaining in the script.
    #[must_use]
    pub fn keys_remaining(&self) -> usize {
        self.keys.len()
    }
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> io::Result<KeyPress> {
        self.key_reads += 1;
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })
    }

    fn status(&mut self, text: &str) -> io::Result<()> {
        self.statuses.push(text.to_string());
        Ok(())
    }

    fn clear_status(&mut self) -> io::Result<()> {
        self.clear_count += 1;
        Ok(())
    }

    fn show_help(&mut self, text: &str) -> io::Result<()> {
        self.help_screens.push(text.to_string());
        Ok(())
    }

    fn alert(&mut self, text: &str) -> io::Result<()> {
        self.alerts.push(text.to_string());
        Ok(())
    }

    fn help_key(&self) -> KeyPress {
        self.help_key
    }
}
