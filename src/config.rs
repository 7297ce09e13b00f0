//! Configuration inputs consumed by the engine.
//!
//! Loaded from a TOML file under the platform config directory. Every value
//! is opaque to the core: the script-store location feeds [`FileStore`],
//! the chat section feeds [`ChatClient`], and the deletion-secret hash
//! gates [`ScriptRepository::delete`].
//!
//! [`FileStore`]: crate::scripts::FileStore
//! [`ChatClient`]: crate::services::ChatClient
//! [`ScriptRepository::delete`]: crate::scripts::ScriptRepository::delete

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default endpoint for the astronomical-data fetch.
const EXOPLANET_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync?query=select+pl_name,disc_year,discoverymethod,hostname,disc_facility,disc_instrument,pl_orbper_reflink+from+ps&format=json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the script collection is persisted.
    pub script_store: PathBuf,
    /// Lowercase hex SHA-256 of the secret required to report a script
    /// deletion as authorized.
    pub delete_secret_hash: String,
    /// URL of the exoplanet record feed.
    pub exoplanet_url: String,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Bearer token for the chat-completion service. When absent the chat
    /// feature short-circuits without a network call.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            script_store: Self::dir()
                .map(|dir| dir.join("scripts.json"))
                .unwrap_or_else(|| PathBuf::from("scripts.json")),
            delete_secret_hash: String::new(),
            exoplanet_url: EXOPLANET_URL.to_string(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|e| {
                Error::configuration(format!("invalid config file {}: {e}", path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::store(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Platform config directory for this crate, e.g. `~/.config/textforge`.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("textforge"))
    }

    /// Path of the TOML config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join("config.toml"))
    }
}
