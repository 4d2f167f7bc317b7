use crate::{LogLevel, LoggingConfig};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;

#[test]
fn given_level_names_when_parsed_then_case_insensitive() {
    assert_that!(LogLevel::from_str("TRACE").unwrap().0, eq(LevelFilter::Trace));
    assert_that!(LogLevel::from_str("off").unwrap().0, eq(LevelFilter::Off));
}

#[test]
fn given_unknown_level_when_parsed_then_info() {
    assert_that!(LogLevel::from_str("loud").unwrap().0, eq(LevelFilter::Info));
}

#[test]
fn given_level_in_toml_when_deserialized_then_parsed() {
    let parsed: LoggingConfig = toml::from_str("level = \"debug\"").unwrap();

    assert_that!(*parsed.level, eq(LevelFilter::Debug));
    assert_that!(parsed.dir.as_str(), eq("log"));
}

#[test]
fn given_default_logging_when_validate_then_ok() {
    assert_that!(LoggingConfig::default().validate(), ok(anything()));
}

#[test]
fn given_escaping_log_dir_when_validate_then_error() {
    let config = LoggingConfig {
        dir: "../elsewhere".to_string(),
        ..LoggingConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_log_file_with_path_when_validate_then_error() {
    let config = LoggingConfig {
        file: Some("nested/kb.log".to_string()),
        ..LoggingConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
