//! # `sift` Keys
//!
//! Key press model and console abstraction for the `sift` confirmation loop.
//!
//! This crate provides:
//!
//! - **Key model**: [`Key`], [`Modifiers`], and [`KeyPress`], with
//!   conversions from crossterm events and display names suitable for
//!   generated help text.
//!
//! - **Console seam**: the [`Console`] trait, which bundles the blocking key
//!   read, transient status line, help display, and invalid-input alert the
//!   confirmation loop needs from its host.
//!
//! - **Implementations**: [`TermConsole`] for a real terminal, and
//!   [`ScriptedConsole`] for tests and headless embedding.
//!
//! ## Quick start
//!
//! ```
//! use sift_keys::{Console, KeyPress, ScriptedConsole};
//!
//! let mut console = ScriptedConsole::new([KeyPress::plain('y')]);
//! console.status("act on this object? (y, n) ").unwrap();
//! let key = console.read_key().unwrap();
//! assert_eq!(key, KeyPress::plain('y'));
//! ```

pub mod console;
pub mod keyboard;
pub mod script;

pub use console::{Console, TermConsole};
pub use keyboard::{Key, KeyPress, Modifiers};
pub use script::ScriptedConsole;
