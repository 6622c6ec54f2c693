use std::fs::File;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::file_system_config::FileSystemConfig;
use crate::config::structs::maintenance_config::MaintenanceConfig;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::tracker_registry::TrackerRegistry;
use crate::tracker::tracker::parse_tracker_list;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            trackers: String::from("127.0.0.1:7001"),
            client_id: Some(uuid::Uuid::new_v4().to_string()),
            file_system: FileSystemConfig {
                max_retries: 2,
                retry_wait_ms: 1000,
                tracker_timeout_ms: 2000,
                file_server_timeout_ms: 2000,
                max_buffer_size: 100 * 1024,
            },
            maintenance: MaintenanceConfig {
                enabled: true,
                poll_interval_secs: 2,
                connection_expire_secs: 60,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. A missing or corrupt file is written with
    /// defaults when `create` is set; either way the caller gets an error
    /// and is expected to exit.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit the {} file, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        if let Err(e) = config.validate() {
            eprintln!("[VALIDATE] {}", e);
            return Err(CustomError::new(&e.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let host_port = r"[A-Za-z0-9.\-]+:[0-9]{1,5}|\[[0-9A-Fa-f:.]+\]:[0-9]{1,5}";
        let mut check_map = vec![
            ("[CONFIG] log_level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$".to_string()),
            ("[CONFIG] trackers", self.trackers.clone(), format!(r"^\s*({host_port})(\s*,\s*({host_port}))*\s*,?\s*$")),
        ];
        if let Some(client_id) = &self.client_id {
            check_map.push(("[CONFIG] client_id", client_id.clone(), r"^[A-Za-z0-9_.\-]{0,64}$".to_string()));
        }

        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }

        if self.file_system.max_retries == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[VALIDATE CONFIG] file_system.max_retries must be at least 1")));
        }
        if let Err(e) = parse_tracker_list(&self.trackers) {
            return Err(ConfigurationError::ValidationError(format!("[VALIDATE CONFIG] {}", e)));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: String, regex: String) -> Result<(), ConfigurationError>
    {
        let regex_check = match Regex::new(regex.as_str()) {
            Ok(regex_check) => regex_check,
            Err(e) => return Err(ConfigurationError::ValidationError(format!("[VALIDATE CONFIG] Invalid regex for {}: {}", name, e))),
        };
        if !regex_check.is_match(value.as_str()) {
            return Err(ConfigurationError::ValidationError(format!(
                "[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }

    /// Builds a registry for the configured trackers, starting maintenance
    /// when it is enabled.
    pub fn build_registry(&self) -> Result<Arc<TrackerRegistry>, TrackerError> {
        let trackers = parse_tracker_list(&self.trackers)?;
        let mut builder = TrackerRegistry::builder(trackers.len())
            .maintenance(self.maintenance.enabled)
            .poll_interval(Duration::from_secs(self.maintenance.poll_interval_secs.max(1)))
            .connection_expiry(Duration::from_secs(self.maintenance.connection_expire_secs))
            .tracker_timeout(Duration::from_millis(self.file_system.tracker_timeout_ms));
        for (host, port) in trackers.iter() {
            builder.register(host, *port)?;
        }
        Ok(builder.build())
    }
}
