//! The item-by-item confirmation loop.
//!
//! [`run`] pulls items from a source, asks the console's user whether to act
//! on each, and returns how many items were acted on. The key protocol:
//!
//! | key                      | effect                                        |
//! |--------------------------|-----------------------------------------------|
//! | `y`, `Y`, space          | act on this item, continue                    |
//! | `n`, `N`, delete, bksp   | skip this item, continue                      |
//! | `!`                      | act on this and all remaining items           |
//! | `.`                      | act on this item, then exit                   |
//! | `q`, `Q`, ESC, Ctrl+G    | exit, skipping all remaining items            |
//! | help key                 | show help, then re-present the same item      |
//! | custom binding           | run the caller's handler                      |
//! | anything else            | alert, then re-present the same item          |
//!
//! The prompt function can bypass the question entirely by returning a
//! verdict instead of prompt text; such items resolve with no key read.

use crate::error::{ActionError, Error, Result};
use crate::handlers::HandlerTable;
use crate::help::{help_text, hint_text};
use crate::labels::Labels;
use crate::prompt::Prompt;
use sift_keys::{Console, Key, KeyPress};
use tracing::{debug, trace};

/// Configuration for one confirmation run: display labels plus custom key
/// bindings.
#[derive(Debug)]
pub struct Options<T> {
    /// Display labels for help and status text.
    pub labels: Labels,
    /// Custom key bindings.
    pub handlers: HandlerTable<T>,
}

impl<T> Options<T> {
    /// Creates options with default labels and no custom bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: Labels::default(),
            handlers: HandlerTable::new(),
        }
    }

    /// Sets the display labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the custom key bindings.
    #[must_use]
    pub fn with_handlers(mut self, handlers: HandlerTable<T>) -> Self {
        self.handlers = handlers;
        self
    }
}

impl<T> Default for Options<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What the loop does after resolving one item.
enum Step {
    /// Move on to the next item.
    Next,
    /// The user asked to stop; no further items are pulled.
    Exit,
    /// The user accepted everything remaining; act without prompting.
    AcceptRest,
}

/// Runs the confirmation loop over `source` and returns the number of items
/// acted on.
///
/// For each item, `prompter` decides whether the user is asked at all: an
/// [`Prompt::Ask`] value prompts interactively, while verdicts (immediate or
/// deferred) resolve the item with no key read. `actor` runs once per
/// accepted item, in source order. `prompter` may be consulted again for the
/// same item after help is shown or after a custom handler declines, so it
/// must tolerate repeat calls.
///
/// The status line is cleared on every normal return, whether the source was
/// exhausted or the user exited early.
///
/// # Errors
///
/// Returns [`Error::ReservedKey`] if a custom binding collides with the
/// console's help key, [`Error::Io`] if the console fails, and
/// [`Error::Action`] if `actor` fails; an action fault aborts the run and
/// the partial count is lost.
pub fn run<T, I, P, A, C>(
    console: &mut C,
    source: I,
    mut prompter: P,
    mut actor: A,
    options: Options<T>,
) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> Prompt,
    A: FnMut(&T) -> std::result::Result<(), ActionError>,
    C: Console,
{
    let Options {
        labels,
        mut handlers,
    } = options;

    let help_key = console.help_key();
    // The handler table cannot see the console's help binding at bind time,
    // so the collision check happens here, before any item is pulled.
    if handlers.contains(&help_key) {
        return Err(Error::ReservedKey { key: help_key });
    }

    let hints = hint_text(&help_key);
    let mut items = source.into_iter();
    let mut count = 0usize;

    while let Some(item) = items.next() {
        let step = present(
            console,
            &item,
            &mut prompter,
            &mut actor,
            &mut handlers,
            &labels,
            &help_key,
            &hints,
            &mut count,
        )?;
        match step {
            Step::Next => {}
            Step::Exit => break,
            Step::AcceptRest => {
                for rest in items.by_ref() {
                    if prompter(&rest).resolve_or(true) {
                        act(&mut actor, &rest, &mut count)?;
                    } else {
                        trace!("skipping item in accept-all mode");
                    }
                }
                break;
            }
        }
    }

    debug!(count, "confirmation loop finished");
    console.clear_status()?;
    Ok(count)
}

/// Resolves a single item: prompts if needed, reads keys until one of them
/// settles the item's fate.
#[allow(clippy::too_many_arguments)]
fn present<T, P, A, C>(
    console: &mut C,
    item: &T,
    prompter: &mut P,
    actor: &mut A,
    handlers: &mut HandlerTable<T>,
    labels: &Labels,
    help_key: &KeyPress,
    hints: &str,
    count: &mut usize,
) -> Result<Step>
where
    P: FnMut(&T) -> Prompt,
    A: FnMut(&T) -> std::result::Result<(), ActionError>,
    C: Console,
{
    // Outer loop: each pass consults the prompter once. Help display and a
    // declined custom handler come back here so the prompt is regenerated
    // for the same, still-unconsumed item.
    loop {
        let text = match prompter(item) {
            Prompt::Ask(text) => text,
            verdict => {
                // Non-interactive resolution: no key is read for this item.
                if verdict.resolve().unwrap_or(false) {
                    act(actor, item, count)?;
                } else {
                    trace!("prompter skipped item without asking");
                }
                return Ok(Step::Next);
            }
        };

        // Inner loop: redisplay the same prompt until a key settles it.
        loop {
            console.status(&format!("{text} ({hints}) "))?;
            let key = console.read_key()?;
            trace!(key = %key, "key press");

            if is_exit(&key) {
                debug!("user exited");
                return Ok(Step::Exit);
            }
            if is_accept(&key) {
                act(actor, item, count)?;
                return Ok(Step::Next);
            }
            if is_decline(&key) {
                return Ok(Step::Next);
            }
            if key == KeyPress::plain('.') {
                act(actor, item, count)?;
                debug!("user accepted and exited");
                return Ok(Step::Exit);
            }
            if key == KeyPress::plain('!') {
                act(actor, item, count)?;
                debug!("user accepted all remaining items");
                return Ok(Step::AcceptRest);
            }
            if key == *help_key {
                console.show_help(&help_text(labels, handlers))?;
                break; // regenerate the prompt for the same item
            }
            match handlers.dispatch(&key, item) {
                Some(true) => {
                    // The handler already performed its effect; it only
                    // counts as an action here.
                    *count += 1;
                    return Ok(Step::Next);
                }
                Some(false) => {
                    trace!(key = %key, "handler declined, re-presenting item");
                    break; // back to the prompter with the same item
                }
                None => {
                    console.alert(&format!("Type {} for help", help_key.describe()))?;
                }
            }
        }
    }
}

fn act<T, A>(actor: &mut A, item: &T, count: &mut usize) -> Result<()>
where
    A: FnMut(&T) -> std::result::Result<(), ActionError>,
{
    actor(item).map_err(Error::Action)?;
    *count += 1;
    Ok(())
}

fn is_exit(key: &KeyPress) -> bool {
    *key == KeyPress::plain('q')
        || *key == KeyPress::plain('Q')
        || *key == KeyPress::bare(Key::Esc)
        || key.is_ctrl('g')
}

fn is_accept(key: &KeyPress) -> bool {
    *key == KeyPress::plain('y') || *key == KeyPress::plain('Y') || *key == KeyPress::plain(' ')
}

fn is_decline(key: &KeyPress) -> bool {
    *key == KeyPress::plain('n')
        || *key == KeyPress::plain('N')
        || *key == KeyPress::bare(Key::Delete)
        || *key == KeyPress::bare(Key::Backspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_keys::ScriptedConsole;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ask<T>(_: &T) -> Prompt {
        Prompt::Ask("keep going?".to_string())
    }

    fn no_op<T>(_: &T) -> std::result::Result<(), ActionError> {
        Ok(())
    }

    #[test]
    fn test_empty_source_returns_zero() {
        let mut console = ScriptedConsole::new([]);
        let count = run(&mut console, Vec::<u32>::new(), ask, no_op, Options::new()).unwrap();
        assert_eq!(count, 0);
        assert_eq!(console.key_reads(), 0);
        assert_eq!(console.clear_count(), 1);
    }

    #[test]
    fn test_ctrl_g_exits() {
        let mut console = ScriptedConsole::new([KeyPress::ctrl('g')]);
        let count = run(&mut console, vec![1, 2, 3], ask, no_op, Options::new()).unwrap();
        assert_eq!(count, 0);
        assert_eq!(console.key_reads(), 1);
    }

    #[test]
    fn test_help_key_collision_rejected() {
        let mut console = ScriptedConsole::new([]).with_help_key(KeyPress::plain('h'));
        let mut handlers: HandlerTable<u32> = HandlerTable::new();
        handlers.bind(KeyPress::plain('h'), "clash", |_| true).unwrap();
        let err = run(
            &mut console,
            vec![1],
            ask,
            no_op,
            Options::new().with_handlers(handlers),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ReservedKey { .. }));
        // Rejected before anything was displayed or read.
        assert_eq!(console.key_reads(), 0);
        assert!(console.statuses().is_empty());
    }

    #[test]
    fn test_actor_fault_aborts_run() {
        let mut console = ScriptedConsole::new([KeyPress::plain('y'), KeyPress::plain('y')]);
        let err = run(
            &mut console,
            vec![1, 2],
            ask,
            |n: &u32| {
                if *n == 2 {
                    Err("boom".into())
                } else {
                    Ok(())
                }
            },
            Options::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Action(_)));
        // Faulting exit does not clear the status line.
        assert_eq!(console.clear_count(), 0);
    }

    #[test]
    fn test_deferred_verdicts_resolve_without_prompting() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let acted = Rc::clone(&seen);
        let mut console = ScriptedConsole::new([]);
        let count = run(
            &mut console,
            vec![1u32, 2, 3],
            |n: &u32| {
                let keep = *n != 2;
                Prompt::deferred(move || keep)
            },
            move |n: &u32| {
                acted.borrow_mut().push(*n);
                Ok(())
            },
            Options::new(),
        )
        .unwrap();
        assert_eq!(count, 2);
        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert_eq!(console.key_reads(), 0);
    }

    #[test]
    fn test_prompt_shows_hints() {
        let mut console = ScriptedConsole::new([KeyPress::plain('y')]);
        run(&mut console, vec![1], ask, no_op, Options::new()).unwrap();
        assert_eq!(
            console.statuses(),
            ["keep going? (y, n, !, ., q, or ? for help) "]
        );
    }
}
