//! Log level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry, ordered from least to most severe.
///
/// The filter threshold comparison is inclusive: an entry passes when
/// `entry.level >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info = 0,
    /// Announcement: noteworthy but not a problem
    Ann = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// All levels in ascending order
    pub const ALL: [LogLevel; 4] = [LogLevel::Info, LogLevel::Ann, LogLevel::Warn, LogLevel::Error];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Ann => "Ann",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
        }
    }

    /// Default console palette. `None` leaves the terminal color unchanged.
    pub fn color(&self) -> Option<Color> {
        match self {
            LogLevel::Info => None,
            LogLevel::Ann => Some(Color::Cyan),
            LogLevel::Warn => Some(Color::Yellow),
            LogLevel::Error => Some(Color::Red),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "ANN" | "ANNOUNCE" | "ANNOUNCEMENT" => Ok(LogLevel::Ann),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Info < LogLevel::Ann);
        assert!(LogLevel::Ann < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Announcement".parse::<LogLevel>(), Ok(LogLevel::Ann));
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(LogLevel::Info.color(), None);
        assert_eq!(LogLevel::Ann.color(), Some(Color::Cyan));
        assert_eq!(LogLevel::Warn.color(), Some(Color::Yellow));
        assert_eq!(LogLevel::Error.color(), Some(Color::Red));
    }
}
