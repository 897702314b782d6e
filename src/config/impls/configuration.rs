use std::fs::File;
use std::io::Write;
use std::time::Duration;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;

const IDENTIFIER_REGEX: &str = r"^[A-Za-z_][A-Za-z0-9_]{0,30}$";

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            database: DatabaseConfig {
                path: String::from("viewCounter.db"),
                persistent_interval: 60,
            },
            database_structure: DatabaseStructureConfig {
                table_name: String::from("historicData"),
                column_key: String::from("key"),
                column_value: String::from("value"),
            }
        }
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.database.persistent_interval)
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
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

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_err() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level \"{}\"", self.log_level)));
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[DB] path must not be empty")));
        }
        if self.database.persistent_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[DB] persistent_interval must be at least 1 second")));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval must be at least 1 second")));
        }

        let structure = &self.database_structure;
        let check_map = [
            ("[DB: structure] Table", &structure.table_name),
            ("[DB: structure] Column: key", &structure.column_key),
            ("[DB: structure] Column: value", &structure.column_value),
        ];
        for (name, value) in check_map {
            Self::validate_value(name, value, IDENTIFIER_REGEX)?;
        }
        if structure.column_key == structure.column_value {
            return Err(ConfigurationError::ValidationError(String::from("[DB: structure] key and value columns must differ")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(
                format!("Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")
            ));
        }
        Ok(())
    }
}
