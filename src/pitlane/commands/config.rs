use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, PitlaneConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PitlaneConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in ConfigKey::ALL {
                result.add_message(CmdMessage::info(format!(
                    "{} = {}",
                    key.name(),
                    config.get(key)
                )));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key.name(),
                config.get(key)
            )));
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key.name(),
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}
