use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::config::Validate;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 16;
pub const MIN_WIN_VALUE: u32 = 4;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameSettings {
    pub size: usize,
    pub win_value: u32,
    #[serde(default = "default_four_probability")]
    pub four_probability: f64,
    /// Adds the value of a spawned 4 to the score.
    #[serde(default)]
    pub spawn_bonus: bool,
}

fn default_four_probability() -> f64 {
    0.1
}

impl GameSettings {
    pub fn new(size: usize, win_value: u32) -> Self {
        Self {
            size,
            win_value,
            ..Self::default()
        }
    }

    pub fn check(&self) -> Result<(), GameError> {
        self.validate().map_err(GameError::InvalidConfiguration)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.size < MIN_SIZE || self.size > MAX_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_SIZE, MAX_SIZE, self.size
            ));
        }
        if self.win_value < MIN_WIN_VALUE {
            return Err(format!(
                "Win value must be at least {}, got {}",
                MIN_WIN_VALUE, self.win_value
            ));
        }
        if !self.win_value.is_power_of_two() {
            return Err(format!(
                "Win value must be a power of 2, got {}",
                self.win_value
            ));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(format!(
                "Four probability must be between 0 and 1, got {}",
                self.four_probability
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: 4,
            win_value: 2048,
            four_probability: default_four_probability(),
            spawn_bonus: false,
        }
    }
}
