use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Older name for the API key, still honoured when [`API_KEY_VAR`] is unset.
pub const LEGACY_API_KEY_VAR: &str = "VITE_YOUTUBE_API_KEY";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base data directory (~/.yt-browse/)
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        std::env::var("YT_BROWSE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".yt-browse")
            })
    })
}

/// Get the .env file path
pub fn env_file_path() -> PathBuf {
    data_dir().join(".env")
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    let env_path = env_file_path();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        // Try current directory as fallback
        let _ = dotenvy::dotenv();
    }
}

/// Settings that decide where video data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// YouTube Data API key. `None` means the sample catalog is used.
    pub api_key: Option<String>,
}

impl Settings {
    /// Build settings from an optional key. Blank keys count as absent.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self { api_key }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::new(youtube_api_key())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Get the YouTube API key, preferring [`API_KEY_VAR`] over the legacy name
pub fn youtube_api_key() -> Option<String> {
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| std::env::var(LEGACY_API_KEY_VAR).ok())
}

/// Write the API key to the data directory's .env file
pub fn save_api_key(api_key: &str, force: bool) -> Result<PathBuf> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(Error::Config("API key is required".to_string()));
    }

    std::fs::create_dir_all(data_dir())?;
    let env_file = env_file_path();

    if env_file.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            env_file.display()
        )));
    }

    std::fs::write(&env_file, format!("{}={}\n", API_KEY_VAR, api_key))?;
    Ok(env_file)
}
