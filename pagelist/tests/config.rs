use pagelist::{ConfigError, PageRequest, PagingConfig};
use std::io::Write;

#[test]
fn test_default_config() {
    let config = PagingConfig::default();
    assert_eq!(config.default_page_size, 20);
}

#[test]
fn test_from_yaml_section() {
    let yaml = r#"
app:
  name: "posts"
pagination:
  default_page_size: 25
"#;
    let config = PagingConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.default_page_size, 25);
}

#[test]
fn test_missing_section_uses_defaults() {
    let config = PagingConfig::from_yaml_str("app:\n  name: posts\n").unwrap();
    assert_eq!(config, PagingConfig::default());

    let config = PagingConfig::from_yaml_str("pagination:\n").unwrap();
    assert_eq!(config, PagingConfig::default());
}

#[test]
fn test_negative_size_is_accepted() {
    let config = PagingConfig::from_yaml_str("pagination:\n  default_page_size: -1\n").unwrap();
    assert_eq!(config.default_page_size, -1);
}

#[test]
fn test_invalid_yaml() {
    let err = PagingConfig::from_yaml_str("pagination: [unclosed").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));

    let err = PagingConfig::from_yaml_str("pagination:\n  default_page_size: lots\n").unwrap_err();
    assert!(err.to_string().starts_with("Config load error:"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pagination:\n  default_page_size: 50").unwrap();

    let config = PagingConfig::load(file.path()).unwrap();
    assert_eq!(config.default_page_size, 50);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = PagingConfig::load(dir.path().join("pagelist.yaml")).unwrap();
    assert_eq!(config, PagingConfig::default());
}

#[test]
fn test_request_fills_omitted_values() {
    let config = PagingConfig {
        default_page_size: 15,
    };
    assert_eq!(config.request(None, None), PageRequest::new(1, 15));
    assert_eq!(config.request(Some(4), None), PageRequest::new(4, 15));
    assert_eq!(config.request(Some(-2), Some(0)), PageRequest::new(-2, 0));
}
