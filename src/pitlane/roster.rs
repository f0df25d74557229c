//! # Roster
//!
//! The in-memory collection of drivers plus the storage it was read from.
//!
//! A roster is loaded once, mutated in place by the commands, and written back
//! in full by [`Roster::save`]. Collection order is insertion order (file order
//! for loaded drivers); only the persisted file is sorted, by racing number.
//!
//! Racing numbers are unique. A persisted file that repeats a number keeps
//! the first row and drops the rest on load.

use crate::error::Result;
use crate::model::Driver;
use crate::store::{DataStore, LoadOutcome};
use std::collections::HashSet;
use tracing::{debug, info};

pub struct Roster<S: DataStore> {
    store: S,
    drivers: Vec<Driver>,
}

/// What the initial load found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    FileAbsent,
}

impl<S: DataStore> Roster<S> {
    pub fn load(store: S) -> Result<(Self, LoadStatus)> {
        let outcome = store.load()?;
        let absent = outcome == LoadOutcome::Absent;
        if absent {
            info!(location = %store.location(), "roster file not found");
        }

        let mut seen = HashSet::new();
        let drivers: Vec<Driver> = outcome
            .into_drivers()
            .into_iter()
            .filter(|d| {
                let fresh = seen.insert(d.number);
                if !fresh {
                    debug!(number = d.number, "dropping repeated racing number");
                }
                fresh
            })
            .collect();

        let status = if absent {
            LoadStatus::FileAbsent
        } else {
            LoadStatus::Loaded(drivers.len())
        };
        Ok((Self { store, drivers }, status))
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn find(&self, number: i64) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.number == number)
    }

    pub fn find_mut(&mut self, number: i64) -> Option<&mut Driver> {
        self.drivers.iter_mut().find(|d| d.number == number)
    }

    pub fn contains(&self, number: i64) -> bool {
        self.find(number).is_some()
    }

    /// Append without checks. Callers enforce number uniqueness.
    pub(crate) fn push(&mut self, driver: Driver) {
        self.drivers.push(driver);
    }

    /// Remove a driver, returning it with the position it held.
    pub(crate) fn remove(&mut self, number: i64) -> Option<(usize, Driver)> {
        let pos = self.drivers.iter().position(|d| d.number == number)?;
        Some((pos, self.drivers.remove(pos)))
    }

    /// Put a removed driver back where it was.
    pub(crate) fn insert(&mut self, pos: usize, driver: Driver) {
        let pos = pos.min(self.drivers.len());
        self.drivers.insert(pos, driver);
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.drivers)
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
