use std::io::IsTerminal;

use crate::logger::{
    error::LoggerResult,
    object::{LoggerFormat, LoggerLevel},
};

/// Key selecting the output format.
pub const LOG_FORMAT_KEY: &str = "LOG_FORMAT";
/// Key holding the filter expression.
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"info"`, `"imds_core=debug,info"`).
    pub level: LoggerLevel,
    /// Include module targets in output.
    pub with_targets: bool,
    /// Colored output, honored only when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Builds a config from a key lookup (`LOG_FORMAT`, `LOG_LEVEL`).
    ///
    /// Missing or empty keys keep the defaults; malformed values are errors,
    /// since nothing can be logged about them before the logger exists.
    pub fn resolve<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(format) = lookup(LOG_FORMAT_KEY).filter(|v| !v.is_empty()) {
            cfg.format = format.parse()?;
        }
        if let Some(level) = lookup(LOG_LEVEL_KEY).filter(|v| !v.is_empty()) {
            cfg.level = LoggerLevel::new(level)?;
        }
        Ok(cfg)
    }

    /// Whether ANSI colors should be emitted right now.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
