//! # Pitlane CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/pitlane/cli/`, while
//! this file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + one-shot dispatch (commands.rs)         │
//! │  - The interactive menu (menu.rs)                           │
//! │  - Tables, standings and messages (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses field selectors, fills in defaults                │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns every
//! user-facing concern: argument parsing, prompting, logging setup, rendering
//! and exit codes.
//!
//! ## Testing Approach
//!
//! - **Commands layer**: unit tests against `InMemoryStore`.
//! - **Storage**: `tests/csv_store_test.rs` runs the CSV store on temp dirs.
//! - **CLI layer**: `tests/cli_e2e.rs` drives the built binary with `assert_cmd`,
//!   both through subcommands and through the menu on stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
