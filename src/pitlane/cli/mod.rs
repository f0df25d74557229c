//! # CLI Behavior
//!
//! This is **one possible UI client** for pitlane. The CLI is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`pitlane`)
//!
//! Running `pitlane` with no arguments opens the interactive menu. Choosing
//! "Save and exit" (or closing stdin) writes the roster and quits.
//!
//! ## One-shot Subcommands
//!
//! Every menu action also exists as a subcommand (`list`, `add`, `search`,
//! `standings`, `edit`, `delete`, `save`). Mutating subcommands persist
//! immediately, just like the menu does.
//!
//! ## Data File Resolution
//!
//! 1. `--file <path>`
//! 2. `PITLANE_DATA`
//! 3. the `data-file` config key (default `drivers.csv`)
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `menu`: The interactive loop
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
