pub const CONFIG_FILE_NAME: &str = "puzzle2048_config.yaml";
pub const DEFAULT_EVENT_LOG_SIZE: usize = 8;
pub const DEFAULT_REPLAY_LOCATION: &str = "puzzle2048replays";
