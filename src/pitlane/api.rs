//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every roster operation, whatever UI drives it.
//!
//! The facade:
//! - **Owns the session state**: the loaded [`Roster`] and the active config
//! - **Normalizes inputs** (field selectors from text, default standings size)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what the store and config do, and never
//! formats output.
//!
//! Configuration is the one operation that does not need a roster, so it is
//! the free function [`config`]: a broken data file must never block fixing
//! the `data-file` setting.
//!
//! ## Generic Over DataStore
//!
//! `PitlaneApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PitlaneApi<CsvFileStore>`
//! - Testing: `PitlaneApi<InMemoryStore>`

use crate::commands;
use crate::config::PitlaneConfig;
use crate::error::{PitlaneError, Result};
use crate::model::Driver;
use crate::roster::{LoadStatus, Roster};
use crate::schema::EditableField;
use crate::store::DataStore;
use std::path::Path;

/// The main API facade for pitlane operations.
pub struct PitlaneApi<S: DataStore> {
    roster: Roster<S>,
    config: PitlaneConfig,
}

impl<S: DataStore> PitlaneApi<S> {
    /// Load the roster from `store`.
    ///
    /// The returned result carries the startup advisories (a missing file is
    /// reported here, not as an error).
    pub fn open(store: S, config: PitlaneConfig) -> Result<(Self, commands::CmdResult)> {
        let (roster, status) = Roster::load(store)?;
        let mut result = commands::CmdResult::default();
        if status == LoadStatus::FileAbsent {
            result.add_message(commands::CmdMessage::warning(format!(
                "Warning: {} not found. A new one will be created when you add a driver.",
                roster.location()
            )));
        }
        let api = Self { roster, config };
        Ok((api, result))
    }

    pub fn list_drivers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn add_driver(&mut self, driver: Driver) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.roster, driver)
    }

    pub fn delete_driver<C: commands::Confirm + ?Sized>(
        &mut self,
        number: i64,
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.roster, number, confirm)
    }

    pub fn edit_driver(
        &mut self,
        number: i64,
        field: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        if self.roster.find(number).is_none() {
            return Err(PitlaneError::NotFound(number));
        }
        let field: EditableField = field.parse()?;
        commands::edit::run(&mut self.roster, number, field, value)
    }

    pub fn search_drivers(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.roster, term)
    }

    /// Top drivers by season points; `None` uses the configured size.
    pub fn standings(&self, top: Option<usize>) -> Result<commands::CmdResult> {
        let top = top.unwrap_or(self.config.standings_size);
        commands::standings::run(&self.roster, top)
    }

    pub fn standings_size(&self) -> usize {
        self.config.standings_size
    }

    pub fn save_now(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.roster)
    }

    pub fn find_driver(&self, number: i64) -> Option<&Driver> {
        self.roster.find(number)
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }
}

/// Show or change settings stored under `config_dir`.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{is_affirmative, CmdMessage, CmdResult, Confirm, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::store::memory::fixtures::{driver, hamilton, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn api_with(store: InMemoryStore) -> PitlaneApi<InMemoryStore> {
        PitlaneApi::open(store, PitlaneConfig::default()).unwrap().0
    }

    #[test]
    fn open_reports_absent_file() {
        let (api, startup) = PitlaneApi::open(InMemoryStore::new(), PitlaneConfig::default()).unwrap();
        assert!(api.roster().is_empty());
        assert_eq!(startup.messages.len(), 1);
        assert_eq!(startup.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn open_is_quiet_when_file_exists() {
        let (_, startup) =
            PitlaneApi::open(StoreFixture::new().with_grid().store, PitlaneConfig::default()).unwrap();
        assert!(startup.messages.is_empty());
    }

    #[test]
    fn edit_parses_field_selector() {
        let mut api = api_with(StoreFixture::new().with_driver(hamilton()).store);

        api.edit_driver(44, "podiums", "201").unwrap();
        assert_eq!(api.find_driver(44).unwrap().podiums, 201);

        let err = api.edit_driver(44, "Name", "Sir Lewis").unwrap_err();
        assert!(matches!(err, PitlaneError::InvalidField(_)));
        assert_eq!(api.find_driver(44).unwrap().name, "Lewis Hamilton");
    }

    #[test]
    fn standings_default_to_configured_size() {
        let drivers: Vec<_> = (1..=8).map(|n| driver(n, "D", "T", n as f64)).collect();
        let api = api_with(InMemoryStore::with_drivers(drivers));

        assert_eq!(api.standings(None).unwrap().listed_drivers.len(), 5);
        assert_eq!(api.standings(Some(3)).unwrap().listed_drivers.len(), 3);
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let mut api = api_with(StoreFixture::new().with_grid().store);

        api.delete_driver(1, &mut |_: &Driver| false).unwrap();
        assert!(api.find_driver(1).is_some());

        api.delete_driver(1, &mut |_: &Driver| true).unwrap();
        assert!(api.find_driver(1).is_none());
    }

    #[test]
    fn edit_of_missing_driver_is_not_found_before_field_check() {
        let mut api = api_with(StoreFixture::new().with_grid().store);

        let err = api.edit_driver(99, "colour", "1").unwrap_err();
        assert!(matches!(err, PitlaneError::NotFound(99)));
    }

    #[test]
    fn config_works_without_a_roster() {
        let dir = tempfile::tempdir().unwrap();

        config(dir.path(), ConfigAction::Set(ConfigKey::StandingsSize, "3".into())).unwrap();
        let result = config(dir.path(), ConfigAction::ShowKey(ConfigKey::StandingsSize)).unwrap();

        assert_eq!(result.messages[0].content, "standings-size = 3");
    }
}
