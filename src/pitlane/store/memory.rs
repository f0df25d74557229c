use super::{DataStore, LoadOutcome};
use crate::error::Result;
use crate::model::Driver;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Vec<Driver>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `drivers`, as if a file had been read.
    pub fn with_drivers(drivers: Vec<Driver>) -> Self {
        Self {
            saved: Some(drivers),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&[Driver]> {
        self.saved.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LoadOutcome> {
        Ok(match &self.saved {
            Some(drivers) => LoadOutcome::Loaded(drivers.clone()),
            None => LoadOutcome::Absent,
        })
    }

    fn save(&mut self, drivers: &[Driver]) -> Result<()> {
        let mut snapshot = drivers.to_vec();
        snapshot.sort_by_key(|d| d.number);
        self.saved = Some(snapshot);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A driver with plausible stats and the given number, name, team and points.
    pub fn driver(number: i64, name: &str, team: &str, season_points: f64) -> Driver {
        Driver {
            number,
            name: name.to_string(),
            team: team.to_string(),
            age: 30,
            nationality: "British".to_string(),
            podiums: 10,
            entries: 100,
            championships: 0,
            career_points: 500.0,
            season_points,
        }
    }

    pub fn hamilton() -> Driver {
        Driver {
            number: 44,
            name: "Lewis Hamilton".to_string(),
            team: "Ferrari".to_string(),
            age: 40,
            nationality: "British".to_string(),
            podiums: 200,
            entries: 350,
            championships: 7,
            career_points: 5000.0,
            season_points: 120.0,
        }
    }

    /// Loads `drivers` like a healthy file, but every save fails.
    pub struct FailingStore {
        drivers: Vec<Driver>,
    }

    impl FailingStore {
        pub fn with_drivers(drivers: Vec<Driver>) -> Self {
            Self { drivers }
        }
    }

    impl DataStore for FailingStore {
        fn load(&self) -> Result<LoadOutcome> {
            Ok(LoadOutcome::Loaded(self.drivers.clone()))
        }

        fn save(&mut self, _drivers: &[Driver]) -> Result<()> {
            Err(crate::error::PitlaneError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }

        fn location(&self) -> String {
            "failing".to_string()
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        drivers: Vec<Driver>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                drivers: Vec::new(),
            }
        }

        pub fn with_driver(mut self, driver: Driver) -> Self {
            self.drivers.push(driver);
            self.store = InMemoryStore::with_drivers(self.drivers.clone());
            self
        }

        pub fn with_grid(self) -> Self {
            self.with_driver(driver(1, "Max Verstappen", "Red Bull", 155.0))
                .with_driver(driver(4, "Lando Norris", "McLaren", 200.0))
                .with_driver(driver(16, "Charles Leclerc", "Ferrari", 94.5))
                .with_driver(hamilton())
                .with_driver(driver(81, "Oscar Piastri", "McLaren", 180.0))
                .with_driver(driver(63, "George Russell", "Mercedes", 120.0))
        }
    }
}
