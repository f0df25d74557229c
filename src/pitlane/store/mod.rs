//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the roster and wherever the
//! roster is persisted. It deals in whole collections: a load hands back every
//! driver that survived decoding, a save replaces everything that was there.
//!
//! ## Implementations
//!
//! - [`fs::CsvFileStore`]: Production storage, a single CSV file.
//!   - A missing file is not an error: the load reports [`LoadOutcome::Absent`]
//!     and the file is created on the first save.
//!   - Saves go to a temporary sibling file that is renamed over the target,
//!     so readers see either the old content or the new content.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing.
//!   - Keeps the last saved snapshot and counts saves, so tests can assert
//!     that a mutation did (or did not) persist.

use crate::error::Result;
use crate::model::Driver;

pub mod fs;
pub mod memory;

/// Result of reading the persisted roster.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<Driver>),
    /// Nothing persisted yet; the roster starts empty.
    Absent,
}

impl LoadOutcome {
    pub fn into_drivers(self) -> Vec<Driver> {
        match self {
            LoadOutcome::Loaded(drivers) => drivers,
            LoadOutcome::Absent => Vec::new(),
        }
    }
}

pub trait DataStore {
    /// Read every valid driver. Malformed rows are skipped, never raised.
    fn load(&self) -> Result<LoadOutcome>;

    /// Replace the persisted roster with `drivers`.
    fn save(&mut self, drivers: &[Driver]) -> Result<()>;

    /// Human-readable name of the backing location, for messages.
    fn location(&self) -> String;
}
