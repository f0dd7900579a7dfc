use core::fmt;

/// Hard failures: a configuration that can never produce a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    InvalidConfig(&'static str),
    InvalidCorridorWidth(u8),
    ConfigParse(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidConfig(reason) => write!(f, "invalid generation config: {reason}"),
            LayoutError::InvalidCorridorWidth(width) => {
                write!(f, "corridor width must be 1, 2 or 3, got {width}")
            }
            LayoutError::ConfigParse(message) => write!(f, "could not parse config: {message}"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::ConfigParse(err.to_string())
    }
}

/// Soft failures: the run finished without anything worth painting. The
/// surface is left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenerationWarning {
    /// No room of any kind came out of the pipeline.
    NoRooms,
    /// No candidate room reached the main-room area threshold.
    NoMainRooms,
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::NoRooms => {
                write!(f, "no rooms were generated, check generation settings")
            }
            GenerationWarning::NoMainRooms => write!(
                f,
                "no room reached the main room area threshold, check generation settings"
            ),
        }
    }
}
