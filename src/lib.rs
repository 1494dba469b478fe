//! # sift
//!
//! An interactive act-or-skip confirmation loop for terminal tools, in the
//! style of the confirmation prompt of search-and-replace commands: items
//! are presented one at a time, and the user accepts, declines,
//! batch-accepts the rest, asks for help, or exits.
//!
//! This facade re-exports the member crates:
//!
//! - [`keys`]: key press model and the console seam ([`keys::Console`],
//!   [`keys::TermConsole`], [`keys::ScriptedConsole`]).
//! - [`driver`]: the confirmation loop itself ([`driver::run`]) with prompt
//!   results, custom key bindings, and generated help.
//!
//! # Example
//!
//! ```no_run
//! use sift::prelude::*;
//!
//! fn main() -> sift::driver::Result<()> {
//!     let stale = vec!["build/", "target/", "dist/"];
//!     let mut console = TermConsole::new();
//!     let count = run(
//!         &mut console,
//!         stale,
//!         |dir| Prompt::Ask(format!("Remove {dir}?")),
//!         |dir| {
//!             std::fs::remove_dir_all(dir)?;
//!             Ok(())
//!         },
//!         Options::new().with_labels(Labels::new("directory", "directories", "remove")),
//!     )?;
//!     eprintln!("removed {count} directories");
//!     Ok(())
//! }
//! ```

pub use sift_driver as driver;
pub use sift_keys as keys;

pub mod prelude {
    pub use sift_driver::{run, Error, HandlerTable, Labels, Options, Prompt, Result};
    pub use sift_keys::{Console, Key, KeyPress, Modifiers, ScriptedConsole, TermConsole};
}
