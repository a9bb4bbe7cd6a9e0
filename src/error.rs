//! Configuration and settings errors
//!
//! The simulation itself has no runtime failures; everything here is raised
//! before a match starts.

use core::fmt;
use std::io;

/// Screen axis named in dimension errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension {
        axis: Axis,
    },
    ScreenTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    InvalidBestOf(u8),
    UnknownBestOf(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { axis } => write!(f, "screen {axis} must be positive"),
            Self::ScreenTooSmall {
                width,
                height,
                min_width,
                min_height,
            } => write!(
                f,
                "screen {width}x{height} too small: need at least {min_width}x{min_height}"
            ),
            Self::InvalidBestOf(n) => write!(f, "best-of must be 3, 5 or 7, got {n}"),
            Self::UnknownBestOf(s) => write!(f, "unrecognised best-of option: {s:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(ConfigError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings i/o failed: {err}"),
            Self::Parse(err) => write!(f, "settings are not valid JSON: {err}"),
            Self::Invalid(err) => write!(f, "settings rejected: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigError> for SettingsError {
    fn from(err: ConfigError) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::ZeroDimension { axis: Axis::Height }.to_string(),
            "screen height must be positive"
        );
        assert_eq!(
            ConfigError::InvalidBestOf(4).to_string(),
            "best-of must be 3, 5 or 7, got 4"
        );
    }

    #[test]
    fn test_settings_error_chains_source() {
        let err = SettingsError::from(ConfigError::InvalidBestOf(9));
        let source = err.source().expect("invalid settings should expose a source");
        assert_eq!(source.to_string(), "best-of must be 3, 5 or 7, got 9");
    }
}
