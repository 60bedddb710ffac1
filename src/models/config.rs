use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "lpgdesk.toml";

/// Errors that can occur when loading or saving the desk configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[from] std::io::Error),
}

/// Desk configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Listener names, attached in this order; duplicates are kept
    pub listeners: Vec<String>,

    /// Abort the session on non-numeric input instead of re-prompting
    pub strict_input: bool,

    /// Print the option list before each read
    pub show_menu: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            listeners: vec!["Customer".to_string()],
            strict_input: false,
            show_menu: true,
        }
    }
}

impl DeskConfig {
    /// Load config
    ///
    /// An explicit path must exist. Without one, `lpgdesk.toml` in the
    /// working directory is used when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        Self::load_file(&path)
    }

    /// Parse a specific config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config as pretty TOML
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.listeners, vec!["Customer".to_string()]);
        assert!(!config.strict_input);
        assert!(config.show_menu);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("desk.toml");
        std::fs::write(&path, "strict_input = true\n").unwrap();

        let config = DeskConfig::load(Some(&path)).unwrap();
        assert!(config.strict_input);
        assert!(config.show_menu);
        assert_eq!(config.listeners, vec!["Customer".to_string()]);
    }

    #[test]
    fn test_load_keeps_duplicate_listeners() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("desk.toml");
        std::fs::write(&path, "listeners = [\"Customer\", \"Dealer\", \"Customer\"]\n").unwrap();

        let config = DeskConfig::load(Some(&path)).unwrap();
        assert_eq!(config.listeners, vec!["Customer", "Dealer", "Customer"]);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let err = DeskConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("desk.toml");
        std::fs::write(&path, "listeners = 3\n").unwrap();

        let err = DeskConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);
        let config = DeskConfig {
            listeners: vec!["Dealer".to_string()],
            strict_input: true,
            show_menu: false,
        };

        config.save(&path).unwrap();
        assert_eq!(DeskConfig::load_file(&path).unwrap(), config);
    }
}
