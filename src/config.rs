//! Application configuration.

use crate::consts::cli_consts::refresh::refresh_interval;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Base URL of the loan-management backend, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Seconds between automatic refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,

    /// Whether the dashboard paints its own background colour.
    #[serde(default)]
    pub with_background_color: bool,
}

impl Config {
    /// Create Config pinned to the given backend URL.
    pub fn new(api_url: Option<String>, refresh_interval_secs: Option<u64>) -> Self {
        Config {
            api_url,
            refresh_interval_secs,
            with_background_color: false,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Config {
    /// Pick the backend. A CLI URL wins over the saved URL, which wins over the
    /// `LOAN_DASHBOARD_ENVIRONMENT` value, which wins over the default.
    pub fn resolve_environment(
        &self,
        cli_api_url: Option<String>,
        env_var: Option<&str>,
    ) -> Environment {
        let from_env = env_var
            .and_then(|value| value.parse::<Environment>().ok())
            .unwrap_or_default();
        from_env
            .with_override(self.api_url.clone())
            .with_override(cli_api_url)
    }

    /// Refresh period from the CLI, then the file, then the built-in default. Zero is ignored.
    pub fn resolve_refresh_interval(&self, cli_secs: Option<u64>) -> Duration {
        cli_secs
            .filter(|secs| *secs > 0)
            .or(self.refresh_interval_secs.filter(|secs| *secs > 0))
            .map(Duration::from_secs)
            .unwrap_or_else(refresh_interval)
    }
}

/// Get the path to the dashboard configuration file, typically located at ~/.loan-dashboard/config.json.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    let config_path = home_path.join(".loan-dashboard").join("config.json");
    Ok(config_path)
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

        let config = Config::new(Some("http://localhost:5000".to_string()), Some(15));
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new(None, None);
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = Config::new(Some("http://first.test".to_string()), None);
        config1.save(&path).unwrap();

        let config2 = Config::new(Some("http://second.test".to_string()), Some(60));
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // An empty object is a valid config with every field defaulted.
    fn test_load_accepts_empty_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    fn test_environment_precedence() {
        let empty = Config::default();
        assert_eq!(empty.resolve_environment(None, None), Environment::Lan);
        assert_eq!(
            empty.resolve_environment(None, Some("local")),
            Environment::Local
        );
        assert_eq!(
            empty.resolve_environment(None, Some("nonsense")),
            Environment::Lan
        );

        let pinned = Config::new(Some("http://saved.test".to_string()), None);
        assert_eq!(
            pinned.resolve_environment(None, Some("local")).base_url(),
            "http://saved.test"
        );
        assert_eq!(
            pinned
                .resolve_environment(Some("http://cli.test/".to_string()), Some("local"))
                .base_url(),
            "http://cli.test"
        );
    }

    #[test]
    fn test_refresh_interval_precedence() {
        let empty = Config::default();
        assert_eq!(empty.resolve_refresh_interval(None), Duration::from_secs(30));
        assert_eq!(empty.resolve_refresh_interval(Some(0)), Duration::from_secs(30));

        let saved = Config::new(None, Some(45));
        assert_eq!(saved.resolve_refresh_interval(None), Duration::from_secs(45));
        assert_eq!(saved.resolve_refresh_interval(Some(5)), Duration::from_secs(5));
    }
}
