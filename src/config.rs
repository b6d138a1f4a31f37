//! Host configuration, loaded from TOML.
//!
//! ```toml
//! [client]
//! base_url = "https://www.searchtruth.com"
//! timeout_seconds = 10
//!
//! [limits]
//! quran_results = 5
//! cities_display = 10
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use crate::error::{AppError, Result};
use searchtruth_engine::{ClientConfig, Domain};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Result caps per domain and how many city names to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub quran_results: usize,
    pub hadith_results: usize,
    pub dictionary_results: usize,
    /// City names shown; the engine still reports the full count.
    pub cities_display: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            quran_results: 5,
            hadith_results: 5,
            dictionary_results: 8,
            cities_display: 10,
        }
    }
}

impl Limits {
    /// The result cap to put on a query in `domain`.
    pub fn max_results(&self, domain: Domain) -> usize {
        match domain {
            Domain::Verses => self.quran_results,
            Domain::Narrations => self.hadith_results,
            Domain::DictionaryEntries => self.dictionary_results,
            Domain::Cities => domain.default_max_results(),
        }
    }
}

/// Top-level host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub limits: Limits,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `explicit` if given, otherwise from the default path when
    /// a file exists there, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be read cannot be loaded.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let path = Self::default_config_path();
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path: `~/.config/searchtruth/config.toml`.
    pub fn default_config_path() -> PathBuf {
        config_path_from(
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        )
    }

    /// Validates client settings and limits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for a zero limit and
    /// [`AppError::Search`] for invalid client settings.
    pub fn validate(&self) -> Result<()> {
        self.client.validate()?;
        let limits = [
            ("quran_results", self.limits.quran_results),
            ("hadith_results", self.limits.hadith_results),
            ("dictionary_results", self.limits.dictionary_results),
            ("cities_display", self.limits.cities_display),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(AppError::Config(format!(
                "limits.{name} must be greater than 0"
            )));
        }
        Ok(())
    }
}

fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    if let Some(config) = xdg_config_home.filter(|v| !v.is_empty()) {
        PathBuf::from(config).join("searchtruth").join("config.toml")
    } else if let Some(home) = home {
        PathBuf::from(home)
            .join(".config")
            .join("searchtruth")
            .join("config.toml")
    } else {
        PathBuf::from("/tmp/searchtruth-config/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = AppConfig::default();
        assert_eq!(config.limits.quran_results, 5);
        assert_eq!(config.limits.hadith_results, 5);
        assert_eq!(config.limits.dictionary_results, 8);
        assert_eq!(config.limits.cities_display, 10);
        assert_eq!(config.client.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn limits_map_to_domains() {
        let limits = Limits::default();
        assert_eq!(limits.max_results(Domain::Verses), 5);
        assert_eq!(limits.max_results(Domain::DictionaryEntries), 8);
        assert_eq!(limits.max_results(Domain::Cities), 20);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [client]
            timeout_seconds = 3

            [limits]
            quran_results = 2
            "#,
        )
        .expect("parse");
        assert_eq!(config.client.timeout_seconds, 3);
        assert_eq!(config.client.base_url, "https://www.searchtruth.com");
        assert_eq!(config.limits.quran_results, 2);
        assert_eq!(config.limits.hadith_results, 5);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.limits.cities_display = 4;
        config.client.user_agent = "test-agent/1.0".into();
        config.save_to_file(&path).expect("save");

        let loaded = AppConfig::from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn from_file_nonexistent_returns_io_error() {
        let result = AppConfig::from_file(Path::new("/nonexistent/searchtruth/config.toml"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits\nquran_results = ").expect("write");
        assert!(matches!(AppConfig::from_file(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn from_file_rejects_zero_limit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\nhadith_results = 0\n").expect("write");
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("hadith_results"));
    }

    #[test]
    fn from_file_rejects_bad_client() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nbase_url = \"not a url\"\n").expect("write");
        assert!(matches!(AppConfig::from_file(&path), Err(AppError::Search(_))));
    }

    #[test]
    fn load_with_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[limits]\ncities_display = 3\n").expect("write");
        let config = AppConfig::load(Some(&path)).expect("load");
        assert_eq!(config.limits.cities_display, 3);
    }

    #[test]
    fn config_path_prefers_xdg() {
        let path = config_path_from(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/xdg/searchtruth/config.toml"));
    }

    #[test]
    fn config_path_falls_back_to_home() {
        let path = config_path_from(None, Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/home/u/.config/searchtruth/config.toml"));

        let path = config_path_from(Some("".into()), Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/home/u/.config/searchtruth/config.toml"));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with("searchtruth/config.toml"));
    }
}
