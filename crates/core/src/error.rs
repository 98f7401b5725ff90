use std::error::Error;
use std::fmt;

/// Rejected generator settings, reported before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDimensions { width: i32, height: i32 },
    FillPercentOutOfRange(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "map dimensions must be positive, got {width}x{height}")
            }
            Self::FillPercentOutOfRange(value) => {
                write!(f, "fill percent must be within 0..=100, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    Config(ConfigError),
    /// Every open region was smaller than the room threshold.
    NoViableRooms { room_threshold_size: usize },
    /// The connector ran out of candidate passages while rooms were still cut off.
    UnreachableRooms { remaining: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(f, "invalid generator config: {error}"),
            Self::NoViableRooms { room_threshold_size } => {
                write!(f, "no viable rooms: every open region is below {room_threshold_size} tiles")
            }
            Self::UnreachableRooms { remaining } => {
                write!(f, "{remaining} room(s) could not be connected to the main room")
            }
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigError> for GenerationError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}
