use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Documentation API address used when nothing overrides it
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment override for the documentation API address
pub const API_URL_ENV: &str = "NEONECTAR_API_URL";

/// Environment switch for the mock backend
pub const USE_MOCK_ENV: &str = "NEONECTAR_USE_MOCK";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings persisted between sessions in `config.json`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub api_url: Option<String>,
    pub use_mock: Option<bool>,
    pub language: Option<String>,
    pub assets_dir: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("neonectar").join("config.json"))
    }
}

/// Pick the API base address: CLI flag, then environment, then config file,
/// then [`DEFAULT_API_URL`]. Blank values are skipped.
pub fn resolve_base_url(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Interpret a boolean-ish environment value
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Mock mode is on if any source asks for it.
pub fn resolve_use_mock(cli: bool, env: Option<&str>, file: Option<bool>) -> bool {
    cli || env.map(parse_flag).unwrap_or(false) || file.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_base_url() {
        assert_eq!(resolve_base_url(None, None, None), "http://localhost:8000");
    }

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://cli:1"), Some("http://env:2"), Some("http://file:3")),
            "http://cli:1"
        );
        assert_eq!(
            resolve_base_url(None, Some("http://env:2"), Some("http://file:3")),
            "http://env:2"
        );
        assert_eq!(resolve_base_url(None, None, Some("http://file:3")), "http://file:3");
    }

    #[test]
    fn test_blank_override_is_skipped() {
        assert_eq!(resolve_base_url(Some("  "), Some(""), None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(None, Some("https://api.example.com/"), None), "https://api.example.com");
    }

    #[test]
    fn test_use_mock_sources() {
        assert!(!resolve_use_mock(false, None, None));
        assert!(resolve_use_mock(true, None, None));
        assert!(resolve_use_mock(false, Some("TRUE"), None));
        assert!(resolve_use_mock(false, Some("1"), None));
        assert!(!resolve_use_mock(false, Some("0"), Some(false)));
        assert!(resolve_use_mock(false, None, Some(true)));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_url: Some("https://api.example.com".to_string()),
            use_mock: Some(true),
            language: Some("ger".to_string()),
            assets_dir: Some(PathBuf::from("/srv/videos")),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
