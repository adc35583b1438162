//! Tests for the logger module

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::logger::config::*;
use crate::logger::error::LoggerError;
use crate::logger::writer::open_log_file;

fn file_config(path: PathBuf, append: bool) -> FileConfig {
    FileConfig {
        enabled: true,
        path,
        append,
        format: LogFormat::Json,
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.colored);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_both_outputs_disabled_is_rejected() {
        let console = ConsoleConfig {
            enabled: false,
            colored: false,
        };
        let result = LoggerConfig::new(console, FileConfig::default(), "info".to_string());
        assert!(matches!(result, Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_parse_level_is_case_insensitive() {
        let mut config = LoggerConfig::default();
        for (input, expected) in [
            ("TRACE", tracing::Level::TRACE),
            ("Debug", tracing::Level::DEBUG),
            ("warn", tracing::Level::WARN),
            ("error", tracing::Level::ERROR),
        ] {
            config.level = input.to_string();
            assert_eq!(config.parse_level().unwrap(), expected);
        }

        config.level = "loud".to_string();
        assert!(config.parse_level().is_err());
    }

    #[test]
    fn test_enabled_file_needs_path() {
        let config = file_config(PathBuf::new(), true);
        assert!(config.validate().is_err());

        let disabled = FileConfig {
            enabled: false,
            ..config
        };
        assert!(disabled.validate().is_ok());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("Full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LoggerError::Format { .. })
        ));
        assert_eq!(LogFormat::default(), LogFormat::Full);
        assert_eq!(LogFormat::Compact.as_str(), "compact");
    }
}

mod writer_tests {
    use super::*;

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/deeper/app.log");

        let writer = open_log_file(&file_config(path.clone(), true)).unwrap();
        writeln!(writer.lock().unwrap(), "first line").unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first line\n");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "old\n").unwrap();

        let writer = open_log_file(&file_config(path.clone(), true)).unwrap();
        writeln!(writer.lock().unwrap(), "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_truncate_discards_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "old content that should vanish\n").unwrap();

        let writer = open_log_file(&file_config(path.clone(), false)).unwrap();
        writeln!(writer.lock().unwrap(), "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }
}
