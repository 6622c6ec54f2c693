mod common;

use std::fs;
use std::time::Duration;
use mogile_client::config::structs::configuration::Configuration;
use mogile_client::file_system::structs::file_system_settings::FileSystemSettings;
use mogile_client::file_system::structs::mogile_file_system::MogileFileSystem;

#[test]
fn test_config_file_drives_file_system() {
    let tracker = common::TestTrackerServer::start(|command| match command.split(' ').next() {
        Some("delete") => Some("OK \r\n".to_string()),
        _ => Some("ERR unknown_command unknown\r\n".to_string()),
    });
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = format!(
        r#"
log_level = "debug"
trackers = "{}"
client_id = "node-7"

[file_system]
max_retries = 3
retry_wait_ms = 25
tracker_timeout_ms = 1500
file_server_timeout_ms = 800
max_buffer_size = 4096

[maintenance]
enabled = false
poll_interval_secs = 2
connection_expire_secs = 60
"#,
        tracker.address()
    );
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false);
    assert!(config.is_ok(), "Should load a valid configuration file");
    let config = config.unwrap();

    let settings = FileSystemSettings::from(&config);
    assert_eq!(settings.max_retries, 3);
    assert_eq!(settings.retry_wait, Duration::from_millis(25));
    assert_eq!(settings.tracker_timeout, Duration::from_millis(1500));
    assert_eq!(settings.client_id.as_deref(), Some("node-7"));

    let registry = config.build_registry().expect("Should build registry from configuration");
    assert_eq!(registry.tracker_count(), 1);
    assert!(!registry.maintenance_enabled(), "Maintenance should follow the configuration");

    let file_system = MogileFileSystem::new(settings, Some(registry)).expect("Should create file system");
    let result = file_system.delete("images", "logo");
    assert!(result.is_ok(), "Delete should succeed: {:?}", result);
    assert_eq!(tracker.commands(), vec!["delete domain=images&key=logo&client_id=node-7".to_string()]);
}

#[test]
fn test_config_with_unreachable_trackers_still_loads() {
    let mut config = Configuration::init();
    config.trackers = format!("127.0.0.1:{},127.0.0.1:{}", common::closed_port(), common::closed_port());
    config.maintenance.enabled = false;
    assert!(config.validate().is_ok(), "Two tracker addresses should validate");

    let registry = config.build_registry().expect("Unreachable trackers are only found out on use");
    assert_eq!(registry.tracker_count(), 2);
    assert_eq!(registry.active_count(), 2);
}

#[test]
fn test_config_rejects_invalid_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "trackers = [not toml").unwrap();

    let result = Configuration::load_from_file(config_path.to_str().unwrap(), false);
    assert!(result.is_err(), "Corrupt configuration should fail to load");
}
