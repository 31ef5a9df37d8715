use std::path::PathBuf;

use puzzle2048_engine::GameSettings;
use puzzle2048_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::ReplayConfig;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_EVENT_LOG_SIZE};

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub replays: ReplayConfig,
    #[serde(default = "default_event_log_size")]
    pub event_log_size: usize,
}

fn default_event_log_size() -> usize {
    DEFAULT_EVENT_LOG_SIZE
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.replays.validate()?;
        if self.event_log_size == 0 {
            return Err("event log size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            replays: ReplayConfig::default(),
            event_log_size: DEFAULT_EVENT_LOG_SIZE,
        }
    }
}
