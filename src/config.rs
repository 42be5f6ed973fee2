//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\song-enricher\config.toml
//! - macOS: ~/Library/Application Support/song-enricher/config.toml
//! - Linux: ~/.config/song-enricher/config.toml
//!
//! Every setting has a default, so the file is optional and may be partial.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::enrichment::{EnrichmentConfig, deezer, itunes, ytmusic};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metadata provider settings
    pub providers: ProvidersConfig,
}

/// Metadata provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Deezer API root
    pub deezer_url: String,

    /// iTunes Search API root
    pub itunes_url: String,

    /// Consult YouTube Music for artwork neither Deezer nor iTunes had
    pub ytmusic_enabled: bool,

    /// YouTube Music innertube root
    pub ytmusic_url: String,

    /// Language code for YouTube Music (e.g. "en", "de")
    pub ytmusic_language: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            deezer_url: deezer::DEFAULT_BASE_URL.to_string(),
            itunes_url: itunes::DEFAULT_BASE_URL.to_string(),
            ytmusic_enabled: true,
            ytmusic_url: ytmusic::DEFAULT_BASE_URL.to_string(),
            ytmusic_language: "en".to_string(),
        }
    }
}

impl From<ProvidersConfig> for EnrichmentConfig {
    fn from(providers: ProvidersConfig) -> Self {
        Self {
            deezer_url: providers.deezer_url,
            itunes_url: providers.itunes_url,
            use_ytmusic: providers.ytmusic_enabled,
            ytmusic_url: providers.ytmusic_url,
            ytmusic_language: providers.ytmusic_language,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("song-enricher"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Resolve an explicit config path, falling back to the default location
pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => config_path().ok_or(ConfigError::NoConfigDir),
    }
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[providers]"));
        assert!(toml.contains("ytmusic_enabled = true"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[providers]
ytmusic_enabled = false
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert!(!config.providers.ytmusic_enabled);
        assert_eq!(config.providers.deezer_url, "https://api.deezer.com");
        assert_eq!(config.providers.ytmusic_language, "en");
    }

    #[test]
    fn test_into_enrichment_config() {
        let providers = ProvidersConfig {
            ytmusic_enabled: false,
            itunes_url: "http://localhost:9000".to_string(),
            ..Default::default()
        };

        let config = EnrichmentConfig::from(providers);
        assert!(!config.use_ytmusic);
        assert_eq!(config.itunes_url, "http://localhost:9000");
    }

    #[test]
    fn test_defaults_match_service_defaults() {
        assert_eq!(
            EnrichmentConfig::from(ProvidersConfig::default()),
            EnrichmentConfig::default()
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.providers.ytmusic_language = "de".to_string();

        save_to(&config, &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        assert_eq!(load_from(&path), config);
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = Path::new("/tmp/elsewhere/config.toml");
        assert_eq!(resolve_path(Some(path)).unwrap(), path.to_path_buf());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "providers = [not toml").unwrap();

        assert_eq!(load_from(&path), Config::default());
    }
}
