//! Log severity named by the `logLevel` setting
//!
//! Names follow the log4j level vocabulary used by existing Quicksort
//! configuration files. The core only reports the severity; applying it
//! to a logger is up to the caller (see [`LogSeverity::level_filter`]).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::level_filters::LevelFilter;

use crate::error::Error;

/// Recognized `logLevel` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogSeverity {
    Off,
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    All,
}

impl LogSeverity {
    pub const ALL_NAMES: [&'static str; 8] = [
        "OFF", "FATAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE", "ALL",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogSeverity::Off => "OFF",
            LogSeverity::Fatal => "FATAL",
            LogSeverity::Error => "ERROR",
            LogSeverity::Warn => "WARN",
            LogSeverity::Info => "INFO",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Trace => "TRACE",
            LogSeverity::All => "ALL",
        }
    }

    /// Closest `tracing` filter for this severity.
    ///
    /// `tracing` has no FATAL level, so FATAL and ERROR both map to ERROR.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogSeverity::Off => LevelFilter::OFF,
            LogSeverity::Fatal | LogSeverity::Error => LevelFilter::ERROR,
            LogSeverity::Warn => LevelFilter::WARN,
            LogSeverity::Info => LevelFilter::INFO,
            LogSeverity::Debug => LevelFilter::DEBUG,
            LogSeverity::Trace | LogSeverity::All => LevelFilter::TRACE,
        }
    }
}

impl FromStr for LogSeverity {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Ok(LogSeverity::Off),
            "FATAL" => Ok(LogSeverity::Fatal),
            "ERROR" => Ok(LogSeverity::Error),
            "WARN" => Ok(LogSeverity::Warn),
            "INFO" => Ok(LogSeverity::Info),
            "DEBUG" => Ok(LogSeverity::Debug),
            "TRACE" => Ok(LogSeverity::Trace),
            "ALL" => Ok(LogSeverity::All),
            _ => Err(Error::InvalidSeverity {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogSeverity::default(), LogSeverity::Info);
    }

    #[test]
    fn test_every_name_round_trips() {
        for name in LogSeverity::ALL_NAMES {
            let severity: LogSeverity = name.parse().unwrap();
            assert_eq!(severity.to_string(), name);
        }
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("debug".parse::<LogSeverity>().unwrap(), LogSeverity::Debug);
        assert_eq!("Warn".parse::<LogSeverity>().unwrap(), LogSeverity::Warn);
    }

    #[test]
    fn test_from_str_trims_surrounding_whitespace() {
        assert_eq!(" INFO ".parse::<LogSeverity>().unwrap(), LogSeverity::Info);
        assert_eq!("\tdebug\n".parse::<LogSeverity>().unwrap(), LogSeverity::Debug);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "VERBOSE_XYZ".parse::<LogSeverity>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSeverity {
                name: "VERBOSE_XYZ".into()
            }
        );
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(LogSeverity::Off.level_filter(), LevelFilter::OFF);
        assert_eq!(LogSeverity::Fatal.level_filter(), LevelFilter::ERROR);
        assert_eq!(LogSeverity::All.level_filter(), LevelFilter::TRACE);
        assert_eq!(LogSeverity::Info.level_filter(), LevelFilter::INFO);
    }
}
