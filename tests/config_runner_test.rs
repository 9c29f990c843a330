use pg_interval::utils::validation::Validate;
use pg_interval::{Command, CommandRunner, IntervalError, ResolvedConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_duration_uses_file_settings() {
    let file = config_file(
        r#"
[conversion]
days_in_month = 30
seconds_in_day = 84000
"#,
    );

    let config = ResolvedConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(None, None, true);
    let runner = CommandRunner::new(config);
    let out = runner
        .run(&Command::Duration {
            interval: "-10 mons -5 days -00:00:01".to_string(),
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["nanoseconds"], -25_620_001_000_000_000i64);
    assert_eq!(value["seconds_in_day"], 84000);
}

#[test]
fn test_cli_overrides_file_settings() {
    let file = config_file("[conversion]\ndays_in_month = 28\n");

    let config = ResolvedConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(Some(30), Some(86_400), true);
    assert!(config.validate().is_ok());

    let out = CommandRunner::new(config)
        .run(&Command::Duration {
            interval: "1 mons".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["nanoseconds"], 2_592_000_000_000_000i64);
    assert_eq!(value["days_in_month"], 30);
}

#[test]
fn test_timestamp_layout_from_file() {
    let file = config_file("[output]\ntimestamp_layout = \"%Y-%m-%d %H:%M:%S\"\n");

    let runner = CommandRunner::new(ResolvedConfig::load(Some(file.path())).unwrap());
    let out = runner
        .run(&Command::Shift {
            timestamp: "2024-03-01 00:00:00".to_string(),
            interval: "1 days".to_string(),
            subtract: true,
        })
        .unwrap();

    assert_eq!(out, "2024-02-29 00:00:00");
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = config_file("[output]\nformat = \"xml\"\n");
    let err = ResolvedConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, IntervalError::InvalidConfigValueError { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ResolvedConfig::load(Some(std::path::Path::new("/nonexistent/pg-interval.toml")))
        .unwrap_err();
    assert!(matches!(err, IntervalError::IoError(_)));
}

#[test]
fn test_normalize_and_format_commands() {
    let runner = CommandRunner::new(ResolvedConfig::default());

    let normalized = runner
        .run(&Command::Normalize {
            interval: "-10 year -8 mons 97 days 06:40:01.789".to_string(),
        })
        .unwrap();
    assert_eq!(
        normalized,
        "years=-10 months=-8 days=97 hours=6 minutes=40 seconds=1 nanoseconds=789000000"
    );

    let formatted = runner
        .run(&Command::Format {
            months: 1000,
            days: 0,
            seconds: 0.0,
        })
        .unwrap();
    assert_eq!(formatted, "83 year 4 mons");
}
