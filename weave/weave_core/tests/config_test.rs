use std::io::Write;
use std::path::{Path, PathBuf};

use weave_core::error::{ConfigError, Error};
use weave_core::{LogLevel, WeaverConfig};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
app_dir = "/srv/shop"
exclude_paths = ["/srv/shop/tests"]
log_level = "warn"
debug = true
"#
    )
    .unwrap();

    let config = WeaverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.app_dir, PathBuf::from("/srv/shop"));
    assert_eq!(config.log_level, LogLevel::Warning);
    assert!(config.debug);

    let filter = config.source_filter();
    assert!(filter.accepts(Path::new("/srv/shop/src/Order.src")));
    assert!(!filter.accepts(Path::new("/srv/shop/tests/OrderTest.src")));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WeaverConfig::from_file(dir.path().join("weave.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "include_paths = \"not a list\"").unwrap();

    let err = WeaverConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}
