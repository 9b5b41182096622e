use crate::config::{load_config_from, save_config_to, Config};
use crate::permissions::UserRole;

#[test]
fn test_config_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        api_key: Some("plane_api_123".to_string()),
        base_url: Some("https://plane.example.com".to_string()),
        workspace_slug: Some("acme".to_string()),
        default_project_id: Some("proj-1".to_string()),
        role: UserRole::Admin,
    };
    save_config_to(&path, &config).unwrap();

    assert_eq!(load_config_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));

    assert_eq!(config, Config::default());
    assert_eq!(config.role, UserRole::Member);
}

#[test]
fn test_corrupt_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_role_is_optional_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_key": "k", "workspace_slug": "acme"}"#).unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.api_key.as_deref(), Some("k"));
    assert_eq!(config.role, UserRole::Member);
}
