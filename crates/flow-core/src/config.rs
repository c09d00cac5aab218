use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FlowError, Result};

/// Top-level configuration for the Flow application.
///
/// Loaded from `~/.flow/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            speech: SpeechConfig::default(),
        }
    }
}

impl FlowConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FlowConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FlowError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the API server to.
    pub host: String,
    /// Port for the API server.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Speech capture and synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// BCP 47 tag for the recognition language.
    pub locale: String,
    /// Keep capturing after the first final result.
    pub continuous: bool,
    /// Surface interim (non-final) recognition results.
    pub interim_results: bool,
    /// Playback rate for automatic reply narration.
    pub reply_rate: f32,
    /// Playback rate for manual replay of a transcript message.
    pub replay_rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            continuous: false,
            interim_results: false,
            reply_rate: 0.9,
            replay_rate: 0.85,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = FlowConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.speech.locale, "en-US");
        assert!(!config.speech.continuous);
        assert!(!config.speech.interim_results);
        assert_eq!(config.speech.reply_rate, 0.9);
        assert_eq!(config.speech.replay_rate, 0.85);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[server]
host = "0.0.0.0"
port = 8080

[speech]
locale = "en-GB"
reply_rate = 1.0
"#;
        let file = create_temp_config(content);
        let config = FlowConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.speech.locale, "en-GB");
        assert_eq!(config.speech.reply_rate, 1.0);
        // Unspecified fields keep their defaults.
        assert_eq!(config.speech.replay_rate, 0.85);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[server]
port = 9000
"#;
        let file = create_temp_config(content);
        let config = FlowConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.speech.locale, "en-US");
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = FlowConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = FlowConfig::load(Path::new("/nonexistent/flow/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let file = create_temp_config("not [ valid toml");
        let result = FlowConfig::load(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FlowError::Config(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = FlowConfig::load_or_default(Path::new("/nonexistent/flow/config.toml"));
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let file = create_temp_config("???");
        let config = FlowConfig::load_or_default(file.path());
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = FlowConfig::default();
        config.server.port = 7000;
        config.speech.locale = "en-IN".to_string();
        config.save(&path).unwrap();

        let reloaded = FlowConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, 7000);
        assert_eq!(reloaded.speech.locale, "en-IN");
        assert_eq!(reloaded.general.log_level, "info");
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let content = r#"
[server]
port = 6000

[experimental]
shiny = true
"#;
        let file = create_temp_config(content);
        let config = FlowConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 6000);
    }
}
