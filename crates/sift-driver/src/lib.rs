//! # `sift` Driver
//!
//! The item-by-item confirmation loop: given a sequence of candidate items
//! and an action, ask the user one item at a time whether to apply it, with
//! batch-accept, early exit, help, and caller-supplied key bindings.
//!
//! ## Quick start
//!
//! ```
//! use sift_driver::{run, Labels, Options, Prompt};
//! use sift_keys::{KeyPress, ScriptedConsole};
//!
//! // A user who accepts the first file, skips the second, then exits.
//! let mut console = ScriptedConsole::new([
//!     KeyPress::plain('y'),
//!     KeyPress::plain('n'),
//!     KeyPress::plain('q'),
//! ]);
//!
//! let files = vec!["a.txt", "b.txt", "c.txt"];
//! let mut deleted = Vec::new();
//! let count = run(
//!     &mut console,
//!     files,
//!     |file| Prompt::Ask(format!("Delete {file}?")),
//!     |file| {
//!         deleted.push(file.to_string());
//!         Ok(())
//!     },
//!     Options::new().with_labels(Labels::new("file", "files", "delete")),
//! )
//! .unwrap();
//!
//! assert_eq!(count, 1);
//! assert_eq!(deleted, ["a.txt"]);
//! ```
//!
//! The prompt function can also return [`Prompt::Verdict`] or
//! [`Prompt::deferred`] to act or skip without asking, and custom keys can
//! be bound through [`HandlerTable`].

pub mod driver;
pub mod error;
pub mod handlers;
pub mod help;
pub mod labels;
pub mod prompt;

pub use driver::{run, Options};
pub use error::{ActionError, Error, Result};
pub use handlers::{is_reserved, Handler, HandlerTable};
pub use help::help_text;
pub use labels::Labels;
pub use prompt::Prompt;
