use std::path::Path;

use serde::Deserialize;

use super::{REPLAY_FILE_EXTENSION, REPLAY_VERSION, Replay};
use crate::puzzle2048::GameError;

#[derive(Debug)]
pub enum ReplayError {
    IoError(std::io::Error),
    FormatError(serde_yaml_ng::Error),
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
    Game(GameError),
    Desync { move_index: usize },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::IoError(e) => write!(f, "IO error: {}", e),
            ReplayError::FormatError(e) => write!(f, "Format error: {}", e),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported replay version: found {}, expected {}", found, expected)
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
            ReplayError::Game(e) => write!(f, "Game error: {}", e),
            ReplayError::Desync { move_index } => {
                write!(f, "Replay desynchronized: move {} was rejected", move_index)
            }
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for ReplayError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ReplayError::FormatError(e)
    }
}

impl From<GameError> for ReplayError {
    fn from(e: GameError) -> Self {
        ReplayError::Game(e)
    }
}

#[derive(Deserialize)]
struct ReplayHeader {
    version: u8,
}

pub fn save_replay(path: &Path, replay: &Replay) -> Result<(), ReplayError> {
    std::fs::write(path, save_replay_to_string(replay)?)?;
    Ok(())
}

pub fn save_replay_to_string(replay: &Replay) -> Result<String, ReplayError> {
    Ok(serde_yaml_ng::to_string(replay)?)
}

pub fn load_replay(path: &Path) -> Result<Replay, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    load_replay_from_str(&content)
}

pub fn load_replay_from_str(content: &str) -> Result<Replay, ReplayError> {
    if content.trim().is_empty() {
        return Err(ReplayError::EmptyFile);
    }

    // Checked first so a newer layout reports its version, not a field error.
    let header: ReplayHeader = serde_yaml_ng::from_str(content)?;
    if header.version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: header.version,
            expected: REPLAY_VERSION,
        });
    }

    Ok(serde_yaml_ng::from_str(content)?)
}

pub fn generate_replay_filename(seed: u64, version: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");
    format!(
        "{}_PUZZLE2048_{}_{}.{}",
        timestamp, seed, sanitized_version, REPLAY_FILE_EXTENSION
    )
}
