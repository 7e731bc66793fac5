//! Application configuration.

use crate::consts::dashboard_consts::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CITY, DEFAULT_DAILY_FILE, DEFAULT_DATA_DIR,
    DEFAULT_HOURLY_FILE, DEFAULT_LOCALE, LOG_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory holding both Feather files.
    pub data_dir: String,
    pub hourly_file: String,
    pub daily_file: String,
    /// City shown in the dashboard title.
    pub city: String,
    /// Preferred locale for weekday and month names.
    pub locale: String,
    /// Log file; defaults to `dashboard.log` next to the config file.
    pub log_file: Option<String>,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            hourly_file: DEFAULT_HOURLY_FILE.to_string(),
            daily_file: DEFAULT_DAILY_FILE.to_string(),
            city: DEFAULT_CITY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

/// `~/.weather-dashboard`
pub fn get_app_dir() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(ErrorKind::NotFound, "Could not determine home directory")
    })?;
    Ok(home.join(APP_DIR_NAME))
}

/// `~/.weather-dashboard/config.json`
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_app_dir()?.join(CONFIG_FILE_NAME))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but an absent file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        match Self::load_from_file(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replaces the data directory when one was given on the command line.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir.to_string_lossy().into_owned();
        }
        self
    }

    pub fn hourly_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.hourly_file)
    }

    pub fn daily_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.daily_file)
    }

    /// Configured log file, or `dashboard.log` inside `app_dir`.
    pub fn log_path(&self, app_dir: &Path) -> PathBuf {
        match &self.log_file {
            Some(file) => PathBuf::from(file),
            None => app_dir.join(LOG_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            city: "Valparaíso, Chile".to_string(),
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Fields missing from the file take their default values.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "data_dir": "/srv/weather" }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.data_dir, "/srv/weather");
        assert_eq!(config.hourly_file, "temp_data.feather");
        assert_eq!(config.city, "Santiago, Chile");
        assert_eq!(
            config.daily_path(),
            Path::new("/srv/weather").join("temp_diario.feather")
        );
    }

    #[test]
    // An absent file means defaults, an invalid one is an error.
    fn test_load_or_default() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());

        let invalid = dir.path().join("invalid_config.json");
        let mut file = File::create(&invalid).unwrap();
        writeln!(file, "invalid json").unwrap();
        assert!(Config::load_or_default(&invalid).is_err());
    }

    #[test]
    // The command-line data directory wins over the configured one.
    fn test_with_data_dir_overrides() {
        let config = Config::default().with_data_dir(Some(PathBuf::from("/tmp/forecast")));
        assert_eq!(
            config.hourly_path(),
            Path::new("/tmp/forecast").join("temp_data.feather")
        );
        let unchanged = Config::default().with_data_dir(None);
        assert_eq!(unchanged.data_dir, "data");
    }

    #[test]
    fn test_log_path_defaults_to_app_dir() {
        let app_dir = Path::new("/home/user/.weather-dashboard");
        assert_eq!(
            Config::default().log_path(app_dir),
            app_dir.join("dashboard.log")
        );
        let custom = Config {
            log_file: Some("/var/log/dashboard.log".to_string()),
            ..Config::default()
        };
        assert_eq!(custom.log_path(app_dir), PathBuf::from("/var/log/dashboard.log"));
    }
}
