mod main_config;
mod replay_config;

pub use main_config::{Config, get_config_manager};
pub use replay_config::ReplayConfig;
