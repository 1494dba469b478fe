//! Caller-supplied per-key handlers.
//!
//! Beyond the built-in accept/decline/exit keys, a caller can bind extra
//! keys to its own handlers. A handler returning `true` consumes the item
//! and counts as an action; returning `false` declines, and the loop
//! re-presents the same item.

use crate::error::{Error, Result};
use sift_keys::{Key, KeyPress};
use smallvec::SmallVec;

/// A custom key handler. Receives the current item; returns whether the
/// item is now handled (counted and consumed) or declined (re-prompted).
pub type Handler<T> = Box<dyn FnMut(&T) -> bool>;

struct Binding<T> {
    key: KeyPress,
    help: String,
    handler: Handler<T>,
}

/// Keys the confirmation protocol reserves for its built-in branches.
pub(crate) const RESERVED_CHARS: &[char] = &['y', 'Y', ' ', 'n', 'N', '.', '!', 'q', 'Q'];

/// Returns true if the protocol reserves this key for a built-in branch.
#[must_use]
pub fn is_reserved(key: &KeyPress) -> bool {
    if key.is_ctrl('g') {
        return true;
    }
    if !key.modifiers.is_empty() {
        return false;
    }
    match key.key {
        Key::Char(c) => RESERVED_CHARS.contains(&c),
        Key::Esc | Key::Delete | Key::Backspace => true,
        _ => false,
    }
}

/// An ordered table of custom key bindings.
///
/// Lookup is first-match in insertion order, which also fixes the order of
/// the per-binding lines in generated help text.
pub struct HandlerTable<T> {
    bindings: SmallVec<[Binding<T>; 4]>,
}

impl<T> HandlerTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }

    /// Binds a key to a handler with a one-line help description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedKey`] if the key belongs to the protocol's
    /// reserved set, and [`Error::DuplicateKey`] if it is already bound.
    pub fn bind<F>(&mut self, key: KeyPress, help: impl Into<String>, handler: F) -> Result<()>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        if is_reserved(&key) {
            return Err(Error::ReservedKey { key });
        }
        if self.contains(&key) {
            return Err(Error::DuplicateKey { key });
        }
        self.bindings.push(Binding {
            key,
            help: help.into(),
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Returns true if the key is bound.
    #[must_use]
    pub fn contains(&self, key: &KeyPress) -> bool {
        self.bindings.iter().any(|b| b.key == *key)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no keys are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Runs the handler bound to `key`, if any, on `item`.
    ///
    /// Returns `None` when the key is unbound, otherwise the handler's
    /// handled/declined result.
    pub(crate) fn dispatch(&mut self, key: &KeyPress, item: &T) -> Option<bool> {
        self.bindings
            .iter_mut()
            .find(|b| b.key == *key)
            .map(|b| (b.handler)(item))
    }

    /// Iterates over `(key, help)` pairs in insertion order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&KeyPress, &str)> {
        self.bindings.iter().map(|b| (&b.key, b.help.as_str()))
    }
}

impl<T> Default for HandlerTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for HandlerTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries().map(|(key, help)| (key.describe(), help)))
            .finish()
    }
}
