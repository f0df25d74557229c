use super::{DataStore, LoadOutcome};
use crate::codec;
use crate::error::{PitlaneError, Result};
use crate::model::Driver;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PitlaneError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "drivers.csv".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for CsvFileStore {
    fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::Absent);
        }
        let file = File::open(&self.path).map_err(PitlaneError::Io)?;
        let drivers = codec::decode(BufReader::new(file))?;
        debug!(path = %self.path.display(), count = drivers.len(), "loaded roster");
        Ok(LoadOutcome::Loaded(drivers))
    }

    fn save(&mut self, drivers: &[Driver]) -> Result<()> {
        self.ensure_parent()?;

        let tmp = self.tmp_path();
        let written = File::create(&tmp)
            .map_err(PitlaneError::Io)
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                codec::encode(&mut writer, drivers)?;
                writer.flush().map_err(PitlaneError::Io)
            });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        fs::rename(&tmp, &self.path).map_err(PitlaneError::Io)?;
        debug!(path = %self.path.display(), count = drivers.len(), "saved roster");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
