//! Configuration management for ntfy Messenger

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Public ntfy instance used when no server is configured
pub const DEFAULT_SERVER_URL: &str = "https://ntfy.sh";

const APP_DIR: &str = "ntfy-messenger";
const TOPICS_FILE: &str = "topics.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
    /// Request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Topic history file; defaults to the XDG data directory
    #[serde(default)]
    pub topics_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Topic preselected in a new draft
    #[serde(default)]
    pub topic: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing config file is not an error: the built-in defaults are
    /// used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }

    /// Resolve where the topic history lives
    pub fn topics_path(&self) -> Result<PathBuf> {
        match self.storage.topics_file {
            Some(ref path) => Ok(PathBuf::from(shellexpand::tilde(path).to_string())),
            None => Ok(resolve_data_path()?.join(TOPICS_FILE)),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("NTFY_MESSENGER_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_points_at_public_server() {
        let config = Config::default_config();
        assert_eq!(config.server.url, "https://ntfy.sh");
        assert!(config.server.timeout_secs.is_none());
        assert!(config.defaults.topic.is_none());
    }

    #[test]
    fn test_load_from_path_full() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
url = "https://ntfy.example.org"
timeout_secs = 15

[storage]
topics_file = "/tmp/ntfy-topics.json"

[defaults]
topic = "alerts"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.server.url, "https://ntfy.example.org");
        assert_eq!(config.server.timeout_secs, Some(15));
        assert_eq!(
            config.topics_path().unwrap(),
            PathBuf::from("/tmp/ntfy-topics.json")
        );
        assert_eq!(config.defaults.topic.as_deref(), Some("alerts"));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ntopic = \"builds\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.server.url, DEFAULT_SERVER_URL);
        assert!(config.storage.topics_file.is_none());
        assert_eq!(config.defaults.topic.as_deref(), Some("builds"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server\nurl = ").unwrap();

        let result = Config::load_from_path(&path);
        assert!(matches!(
            result,
            Err(crate::NtfyError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_topics_path_expands_tilde() {
        let mut config = Config::default_config();
        config.storage.topics_file = Some("~/ntfy/topics.json".to_string());

        let path = config.topics_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("ntfy/topics.json"));
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        std::env::set_var("NTFY_MESSENGER_CONFIG", "/tmp/custom-ntfy.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("NTFY_MESSENGER_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/custom-ntfy.toml"));
    }

    #[test]
    #[serial]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        std::env::set_var("NTFY_MESSENGER_CONFIG", &missing);
        let config = Config::load();
        std::env::remove_var("NTFY_MESSENGER_CONFIG");

        assert_eq!(config.unwrap().server.url, DEFAULT_SERVER_URL);
    }
}
