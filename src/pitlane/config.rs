use crate::error::{PitlaneError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "drivers.csv";
const DEFAULT_STANDINGS_SIZE: usize = 5;

/// Configuration for pitlane, stored in `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PitlaneConfig {
    /// Roster file; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How many drivers `standings` shows when no count is given
    #[serde(default = "default_standings_size")]
    pub standings_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_standings_size() -> usize {
    DEFAULT_STANDINGS_SIZE
}

impl Default for PitlaneConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            standings_size: default_standings_size(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataFile,
    StandingsSize,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::DataFile, ConfigKey::StandingsSize];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::DataFile => "data-file",
            ConfigKey::StandingsSize => "standings-size",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = PitlaneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.replace('_', "-").as_str() {
            "data-file" => Ok(ConfigKey::DataFile),
            "standings-size" => Ok(ConfigKey::StandingsSize),
            _ => Err(PitlaneError::Config(format!("Unknown config key: {}", s))),
        }
    }
}

impl PitlaneConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PitlaneError::Io)?;
        let config: PitlaneConfig =
            serde_json::from_str(&content).map_err(PitlaneError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PitlaneError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PitlaneError::Serialization)?;
        fs::write(config_path, content).map_err(PitlaneError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DataFile => self.data_file.display().to_string(),
            ConfigKey::StandingsSize => self.standings_size.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DataFile => {
                if value.trim().is_empty() {
                    return Err(PitlaneError::Config("data-file cannot be empty".into()));
                }
                self.data_file = PathBuf::from(value.trim());
            }
            ConfigKey::StandingsSize => {
                let size: usize = value.trim().parse().map_err(|_| {
                    PitlaneError::Config(format!("standings-size must be a number, got {:?}", value))
                })?;
                if size == 0 {
                    return Err(PitlaneError::Config("standings-size must be at least 1".into()));
                }
                self.standings_size = size;
            }
        }
        Ok(())
    }
}
