/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder values shipped in sample configs; serving refuses to
/// start until one is replaced with a real path
const PLACEHOLDER_MUSIC_DIRS: [&str; 2] = ["/path/to/your/music", r"C:\Path\To\Your\Music"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_library")]
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// Root directory to index. The one required setting.
    #[serde(default)]
    pub music_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with TONEARM,
        // e.g. TONEARM_LIBRARY__MUSIC_DIR)
        settings = settings.add_source(
            config::Environment::with_prefix("TONEARM")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration. Serving must not start when this fails.
    pub fn validate(&self) -> Result<()> {
        let music_dir = &self.library.music_dir;

        if music_dir.as_os_str().is_empty() {
            return Err(ServerError::Config(
                "library.music_dir is required; set it in config.toml \
                 or via TONEARM_LIBRARY__MUSIC_DIR"
                    .to_string(),
            ));
        }

        if PLACEHOLDER_MUSIC_DIRS
            .iter()
            .any(|placeholder| music_dir == Path::new(placeholder))
        {
            return Err(ServerError::Config(format!(
                "library.music_dir is still the placeholder {}; point it at your music folder",
                music_dir.display()
            )));
        }

        if !music_dir.exists() {
            return Err(ServerError::Config(format!(
                "library.music_dir {} does not exist",
                music_dir.display()
            )));
        }

        if !music_dir.is_dir() {
            return Err(ServerError::Config(format!(
                "library.music_dir {} is not a directory",
                music_dir.display()
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_library() -> LibrarySettings {
    LibrarySettings {
        music_dir: PathBuf::new(),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            library: default_library(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_dir(dir: impl Into<PathBuf>) -> ServerConfig {
        ServerConfig {
            library: LibrarySettings {
                music_dir: dir.into(),
            },
            ..ServerConfig::default()
        }
    }

    #[test]
    fn empty_music_dir_is_rejected() {
        let err = config_with_dir("").validate().unwrap_err();
        assert!(err.to_string().contains("music_dir is required"));
    }

    #[test]
    fn placeholder_music_dir_is_rejected() {
        for placeholder in PLACEHOLDER_MUSIC_DIRS {
            let err = config_with_dir(placeholder).validate().unwrap_err();
            assert!(err.to_string().contains("placeholder"));
        }
    }

    #[test]
    fn missing_music_dir_is_rejected() {
        let err = config_with_dir("/definitely/not/here").validate().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn file_music_dir_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("a.mp3");
        std::fs::write(&file, b"").unwrap();

        let err = config_with_dir(file).validate().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn existing_directory_passes() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(config_with_dir(dir.path()).validate().is_ok());
    }
}
