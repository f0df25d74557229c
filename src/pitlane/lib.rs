//! # Pitlane Architecture
//!
//! Pitlane keeps a roster of Formula 1 drivers in a single CSV file. It is a
//! library with a CLI client, not a CLI with some library code: everything
//! from the API inward takes Rust values and returns Rust values.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap subcommands and the interactive menu                │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's Roster and config                     │
//! │  - Parses field selectors, fills in defaults                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / edit / delete rules, list / search / standings     │
//! │  - Returns CmdResult: drivers plus advisory messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (roster.rs) over Storage (store/)                   │
//! │  - In-memory collection, loaded once, saved whole           │
//! │  - CsvFileStore (production), InMemoryStore (testing)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Every driver in memory has all ten schema fields, correctly typed.
//! - Racing numbers are unique after every mutation.
//! - A failed mutation changes neither the roster nor the file.
//! - The file is written sorted by racing number; memory keeps insertion order.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`roster`]: The in-memory record store
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: CSV encoding and decoding
//! - [`schema`]: Fields, their types, and the editable subset
//! - [`model`]: The `Driver` record
//! - [`query`]: Search and ranking
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod roster;
pub mod schema;
pub mod store;
