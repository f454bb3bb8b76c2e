// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "apm_log.txt";

/// Where the logs go, and how much of them.
///
/// Logging is off unless [`Self::level_filter`] is something other than
/// [`LevelFilter::OFF`] and [`Self::writer_config`] isn't [`WriterConfig::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the path of the log file. Eg: `/tmp/apm_log.txt` or `apm_log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    /// Debug level logs to `filename`, or to [`DEFAULT_LOG_FILE_NAME`].
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.level_filter != LevelFilter::OFF && self.writer_config != WriterConfig::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_off() {
        let it = TracingConfig::default();
        assert!(!it.is_enabled());
        assert_eq!(it.get_level_filter(), LevelFilter::OFF);
    }

    #[test]
    fn test_new_file_and_enabled() {
        let it = TracingConfig::new_file(None);
        assert!(it.is_enabled());
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let it = TracingConfig::new_file(Some("x.log".to_string()));
        assert_eq!(it.writer_config, WriterConfig::File("x.log".to_string()));

        let it = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stdout),
            level_filter: LevelFilter::OFF,
        };
        assert!(!it.is_enabled());
    }
}
