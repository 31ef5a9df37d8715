#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidDirection(String),
    InvalidConfiguration(String),
    ValueOverflow { value: u32 },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidDirection(input) => write!(f, "Invalid direction: {}", input),
            GameError::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
            GameError::ValueOverflow { value } => {
                write!(f, "Merging two {} tiles overflows the tile value range", value)
            }
        }
    }
}

impl std::error::Error for GameError {}
