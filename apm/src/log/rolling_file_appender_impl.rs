// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Log file that is never rotated. A bare file name lands in the current folder.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - The folder can't be created, or the file can't be opened for appending
pub fn try_create_log_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(format!(
            "Can't use {} as a log file, it has no file name.",
            path.display()
        ))
    })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|error| {
            miette::miette!(format!(
                "Can't open log file {}. It might not exist, or don't have required permissions. {error}",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("apm.log");

        let appender = try_create_log_file_appender(file_path.to_str().unwrap());

        assert!(appender.is_ok());
        assert!(file_path.exists());
    }

    #[test]
    fn test_no_file_name() {
        assert!(try_create_log_file_appender("..").is_err());
    }
}
