//! Per-item prompt results.
//!
//! The prompt function answers one question per item: should the user be
//! asked, and if not, what is the verdict? A [`Prompt`] is either a question
//! to display, an immediate verdict, or a deferred verdict evaluated lazily
//! when the loop actually reaches the item.

use std::fmt;

/// What the prompt function decided for one item.
pub enum Prompt {
    /// Ask the user, displaying this text.
    Ask(String),
    /// Do not ask. `true` acts on the item, `false` skips it.
    Verdict(bool),
    /// Do not ask; evaluate the closure for the verdict. The closure runs at
    /// most once, and only if the loop reaches the item.
    Deferred(Box<dyn FnOnce() -> bool>),
}

impl Prompt {
    /// Wraps a lazy verdict.
    #[must_use]
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> bool + 'static,
    {
        Prompt::Deferred(Box::new(f))
    }

    /// Returns true if this prompt requires user interaction.
    #[must_use]
    pub fn is_ask(&self) -> bool {
        matches!(self, Prompt::Ask(_))
    }

    /// Resolves a non-interactive prompt to its verdict.
    ///
    /// Returns `None` for [`Prompt::Ask`]; deferred verdicts are evaluated
    /// here, consuming the prompt.
    #[must_use]
    pub fn resolve(self) -> Option<bool> {
        match self {
            Prompt::Ask(_) => None,
            Prompt::Verdict(v) => Some(v),
            Prompt::Deferred(f) => Some(f()),
        }
    }

    /// Resolves any prompt to a verdict, treating [`Prompt::Ask`] as
    /// `ask_default`.
    ///
    /// The accept-all path uses this with `true`: an interactive prompt
    /// counts as pre-approved once the user has accepted the rest of the
    /// run, while explicit verdicts are still honored per item.
    #[must_use]
    pub fn resolve_or(self, ask_default: bool) -> bool {
        self.resolve().unwrap_or(ask_default)
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Ask(text) => f.debug_tuple("Ask").field(text).finish(),
            Prompt::Verdict(v) => f.debug_tuple("Verdict").field(v).finish(),
            Prompt::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Prompt::Ask(text)
    }
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Prompt::Ask(text.to_string())
    }
}

impl From<bool> for Prompt {
    fn from(verdict: bool) -> Self {
        Prompt::Verdict(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_does_not_resolve() {
        assert_eq!(Prompt::from("delete it?").resolve(), None);
    }

    #[test]
    fn test_verdict_resolves() {
        assert_eq!(Prompt::from(true).resolve(), Some(true));
        assert_eq!(Prompt::from(false).resolve(), Some(false));
    }

    #[test]
    fn test_deferred_runs_lazily() {
        use std::cell::Cell;
        use std::rc::Rc;

        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let prompt = Prompt::deferred(move || {
            flag.set(true);
            true
        });
        assert!(!ran.get());
        assert_eq!(prompt.resolve(), Some(true));
        assert!(ran.get());
    }

    #[test]
    fn test_resolve_or_treats_ask_as_default() {
        assert!(Prompt::from("ask me").resolve_or(true));
        assert!(!Prompt::from("ask me").resolve_or(false));
        assert!(!Prompt::from(false).resolve_or(true));
    }

    #[test]
    fn test_debug_formatting() {
        assert_eq!(format!("{:?}", Prompt::from("hi")), "Ask(\"hi\")");
        assert_eq!(format!("{:?}", Prompt::deferred(|| true)), "Deferred(..)");
    }
}
