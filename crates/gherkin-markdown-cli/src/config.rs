//! Log level resolution for `g2md`.
//!
//! The level comes from `--log-level` when given, otherwise from
//! `G2MD_LOG_LEVEL`, otherwise it is `warn`, which keeps successful runs
//! silent.

use std::env;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "G2MD_LOG_LEVEL";

/// How much `g2md` reports on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including parser internals.
    Trace,
    /// One line per converted file.
    Debug,
    /// Directory summaries.
    Info,
    /// Only problems.
    #[default]
    Warn,
    /// Only failures.
    Error,
    /// Nothing at all.
    Off,
}

const LEVEL_NAMES: [(&str, LogLevel); 7] = [
    ("trace", LogLevel::Trace),
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warn", LogLevel::Warn),
    ("warning", LogLevel::Warn),
    ("error", LogLevel::Error),
    ("off", LogLevel::Off),
];

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|&(_, level)| level)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "unknown log level '{s}', expected one of: trace, debug, info, warn, error, off"
                ))
            })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
            LogLevel::Off => Self::OFF,
        }
    }
}

/// Settings for one `g2md` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Verbosity of stderr diagnostics.
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Resolve the configuration from the `--log-level` flag and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when the flag is absent and
    /// `G2MD_LOG_LEVEL` holds an unknown level.
    pub fn load(flag: Option<LogLevel>) -> Result<Self, CliError> {
        Self::load_with(flag, |key| env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    ///
    /// The lookup is not consulted when `flag` is set.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when the looked-up level is unknown.
    pub fn load_with<F>(flag: Option<LogLevel>, lookup: F) -> Result<Self, CliError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let log_level = flag.map_or_else(
            || lookup(LOG_LEVEL_ENV).map_or_else(|| Ok(LogLevel::default()), |value| value.parse()),
            Ok,
        )?;
        Ok(Self { log_level })
    }
}
