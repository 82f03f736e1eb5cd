//! Configuration management module.
//!
//! This module handles loading and initializing the application
//! configuration: the debounce period, where the session is persisted, the
//! theme, and the log level.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::form::DEFAULT_QUIET_PERIOD;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/login-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub debounce_ms: u64,
    pub storage_file: String,
    pub theme_name: String,
    pub log_level: String,
    dir_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_QUIET_PERIOD.as_millis() as u64
}

fn default_storage_file() -> String {
    "storage.yml".to_string()
}

fn default_theme_name() -> String {
    "rose-pine-dawn".to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            debounce_ms: default_debounce_ms(),
            storage_file: default_storage_file(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            dir_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided, or the
    /// default one otherwise. A missing file is created with the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.dir_path = Some(dir_path);

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.debounce_ms = data.debounce_ms;
            self.storage_file = data.storage_file;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
        } else {
            self.create_file(&file_path)?;
        }

        // Reject unusable values up front rather than at first use
        self.log_level_filter()?;
        Ok(())
    }

    /// Serialize the current configuration and write it to the given path.
    ///
    fn create_file(&self, file_path: &Path) -> Result<(), AppError> {
        let data = FileSpec {
            debounce_ms: self.debounce_ms,
            storage_file: self.storage_file.clone(),
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Quiet period used by the form validity debounce.
    ///
    pub fn debounce_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Path of the key-value storage file, relative to the config directory.
    ///
    pub fn storage_path(&self) -> Result<PathBuf, AppError> {
        let dir_path = match &self.dir_path {
            Some(dir_path) => dir_path.clone(),
            None => Config::default_path()?,
        };
        Ok(dir_path.join(&self.storage_file))
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn load_from(dir: &Path) -> Result<Config, AppError> {
        let mut config = Config::new();
        config.load(dir.to_str())?;
        Ok(config)
    }

    #[test]
    fn new_uses_defaults() {
        let config = Config::new();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.debounce_period(), Duration::from_millis(500));
        assert_eq!(config.storage_file, "storage.yml");
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn load_creates_missing_file_with_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from(dir.path()).unwrap();
        assert!(dir.path().join(FILE_NAME).exists());
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(
            config.storage_path().unwrap(),
            dir.path().join("storage.yml")
        );
    }

    #[test]
    fn load_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        load_from(&nested).unwrap();
        assert!(nested.join(FILE_NAME).exists());
    }

    #[test]
    fn load_reads_existing_file_and_fills_missing_fields() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "debounce_ms: 250\ntheme_name: tokyo-night\n",
        )
        .unwrap();
        let config = load_from(dir.path()).unwrap();
        assert_eq!(config.debounce_period(), Duration::from_millis(250));
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.storage_file, "storage.yml");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "debounce_ms: [1, 2]\n").unwrap();
        let result = load_from(dir.path());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn load_rejects_unknown_log_level() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "log_level: loud\n").unwrap();
        let result = load_from(dir.path());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidLogLevel(_)))
        ));
    }
}
