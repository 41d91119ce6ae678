use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{config::ConfigError, BotError};

/// Fixed relative path the credentials file is read from.
pub const CREDENTIALS_PATH: &str = "Keys/Credentials.json";

/// Application configuration, loaded once at startup from the credentials file.
///
/// The file is a JSON record holding the bot token together with the identities
/// the command handler needs at runtime:
///
/// ```json
/// {
///     "bot_token": "...",
///     "authorized_user_id": 144851584478740481,
///     "debug_guild_id": 832001341865197579
/// }
/// ```
///
/// `debug_guild_id` is optional. When set, slash commands are registered
/// against that guild only (updates propagate instantly, which is what you
/// want while developing); when absent, registration is global.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord bot token used to authenticate the gateway session.
    pub bot_token: String,

    /// The only user allowed to invoke resource-creating commands.
    pub authorized_user_id: u64,

    /// Guild to scope command registration to, instead of registering globally.
    #[serde(default)]
    pub debug_guild_id: Option<u64>,
}

impl Config {
    /// Loads the configuration from the fixed credentials path.
    ///
    /// # Returns
    /// - `Ok(Config)` - Credentials file read and parsed
    /// - `Err(BotError::ConfigErr)` - File missing, unreadable, or malformed
    pub fn load() -> Result<Self, BotError> {
        Self::from_file(CREDENTIALS_PATH)
    }

    /// Loads the configuration from an explicit file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BotError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                ConfigError::MissingCredentialsFile(path.display().to_string())
            }
            _ => ConfigError::UnreadableCredentials {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let config = serde_json::from_str(&contents).map_err(|e| {
            ConfigError::InvalidCredentials {
                path: path.display().to_string(),
                source: e,
            }
        })?;

        Ok(config)
    }
}
