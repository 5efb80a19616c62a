//! Integration tests for loading client configuration from disk

use std::io::Write;
use std::time::Duration;
use swapi_table::prelude::*;

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
base_url: https://swapi.example.com/api
page_size: 10
debounce_ms: 150
"#
    )
    .unwrap();

    let config = ClientConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.base_url, "https://swapi.example.com/api");
    assert_eq!(config.page_size, 10);
    assert_eq!(config.debounce(), Duration::from_millis(150));
    assert_eq!(config.min_loading(), Duration::from_millis(500));
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::from_yaml_file(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = ClientConfig::from_yaml_str("page_size: [1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_options_follow_config() {
    let config = ClientConfig::from_yaml_str("page_size: 25\nmin_loading_ms: 0").unwrap();
    let options = ListOptions::from_config(&config);

    assert_eq!(options.page_size, 25);
    assert_eq!(options.min_loading, Duration::ZERO);
    assert_eq!(options.default_sort, SortColumn::Name);
}

#[test]
fn test_client_from_config() {
    let config = ClientConfig::from_yaml_str("base_url: http://localhost:9000/api/").unwrap();
    let client = SwapiClient::new(&config).unwrap();

    assert_eq!(client.base_url(), "http://localhost:9000/api");
    assert_eq!(
        client.endpoint(Resource::Planets.path()),
        "http://localhost:9000/api/planets"
    );
}
