use puzzle2048_engine::config::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPLAY_LOCATION;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReplayConfig {
    pub save: bool,
    pub location: String,
}

impl Validate for ReplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("replay location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            save: true,
            location: DEFAULT_REPLAY_LOCATION.to_string(),
        }
    }
}
