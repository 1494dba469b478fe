//! Error types for the confirmation loop.

use sift_keys::KeyPress;
use thiserror::Error;

/// Boxed error type returned by caller-supplied action functions.
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for confirmation loop operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A console I/O error occurred.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A custom binding collides with a key the protocol reserves.
    #[error("key {key} is reserved by the confirmation protocol")]
    ReservedKey {
        /// The offending key.
        key: KeyPress,
    },

    /// The same key was bound twice.
    #[error("key {key} is already bound")]
    DuplicateKey {
        /// The offending key.
        key: KeyPress,
    },

    /// The caller's action function failed. The run aborts and the partial
    /// action count is lost; the loop is not a transaction manager.
    #[error("action failed: {0}")]
    Action(#[source] ActionError),
}

/// Result type alias using the confirmation loop Error type.
pub type Result<T> = std::result::Result<T, Error>;
