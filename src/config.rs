use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::docs::docs_rs;
use crate::version::error::ConfigError;
use crate::version::registries::crates_io;

const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Default time the CLI waits for the documentation probe (5 seconds)
pub const DEFAULT_DOCS_WAIT_MS: u64 = 5_000;

/// Client configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub registry: RegistryConfig,
    pub docs: DocsConfig,
}

impl ClientConfig {
    /// Load configuration from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
        }
    }
}

/// Registry-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: crates_io::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Documentation probe configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    pub enabled: bool,
    pub base_url: String,
    /// How long the CLI waits for the probe before exiting, in milliseconds
    pub wait_ms: u64,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: docs_rs::DEFAULT_BASE_URL.to_string(),
            wait_ms: DEFAULT_DOCS_WAIT_MS,
        }
    }
}

/// Returns the path to the data directory.
/// Uses $XDG_DATA_HOME/crate-version-resolver if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/crate-version-resolver,
/// or ./crate-version-resolver if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(format!("{APP_NAME}.log"))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn client_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<ClientConfig>(json!({
            "docs": {
                "enabled": false
            }
        }))
        .unwrap();

        assert!(!result.docs.enabled);
        assert_eq!(result.docs.base_url, "https://docs.rs");
        assert_eq!(result.docs.wait_ms, DEFAULT_DOCS_WAIT_MS);
        assert_eq!(result.registry, RegistryConfig::default());
    }

    #[test]
    fn client_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<ClientConfig>(json!({
            "registry": { "baseUrl": "http://localhost:8888" },
            "docs": {
                "enabled": true,
                "baseUrl": "http://localhost:9999",
                "waitMs": 100
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            ClientConfig {
                registry: RegistryConfig {
                    base_url: "http://localhost:8888".to_string()
                },
                docs: DocsConfig {
                    enabled: true,
                    base_url: "http://localhost:9999".to_string(),
                    wait_ms: 100,
                }
            }
        );
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"docs": {{"waitMs": 250}}}}"#).unwrap();

        let result = ClientConfig::load(Some(file.path())).unwrap();

        assert_eq!(result.docs.wait_ms, 250);
    }

    #[test]
    fn load_without_path_returns_defaults() {
        assert_eq!(ClientConfig::load(None).unwrap(), ClientConfig::default());
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = ClientConfig::load(Some(file.path()));

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/crate-version-resolver"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/crate-version-resolver")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./crate-version-resolver"));
    }
}
