pub mod get;
pub mod set;

use std::{fmt, str::FromStr};

pub use get::collect_option_settings;
pub use set::{Prompt, SetError, store_parameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fetch every parameter and render the option settings
    #[default]
    Get,
    /// Store every component parameter
    Set,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeError(String);

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid mode: {}", self.0)
    }
}

impl std::error::Error for ModeError {}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Mode::Get),
            "set" => Ok(Mode::Set),
            other => Err(ModeError(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Get => write!(f, "get"),
            Mode::Set => write!(f, "set"),
        }
    }
}
