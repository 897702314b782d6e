mod common;

use std::fs;
use tempfile::TempDir;
use view_counter::config::structs::configuration::Configuration;

#[test]
fn test_config_test_store_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = common::create_test_config(&temp_dir);
    assert!(config.database.path.ends_with("viewCounter.db"), "Store file should keep its default name");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"
log_console_interval = 15

[database]
path = "views.db"
persistent_interval = 600

[database_structure]
table_name = "historicData"
column_key = "key"
column_value = "value"
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_console_interval, 15);
    assert_eq!(config.database.path, "views.db");
    assert_eq!(config.database.persistent_interval, 600);
}

#[test]
fn test_config_missing_file_without_create() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
    assert!(!config_path.exists(), "No file should be written without --create-config");
}

#[test]
fn test_config_missing_file_with_create() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), true).is_err(), "Creating the file should still stop startup");
    assert!(config_path.exists());

    let created = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(created, Configuration::init());
}

#[test]
fn test_config_invalid_values_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.database_structure.table_name = String::from("bad name");
    Configuration::save_from_config(&config, config_path.to_str().unwrap()).unwrap();

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}
