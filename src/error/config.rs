use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The credentials file does not exist at the expected path.
    ///
    /// The bot requires a JSON credentials file before it can authenticate.
    /// See the `Config` documentation for the expected record shape.
    #[error("Missing credentials file at '{0}'")]
    MissingCredentialsFile(String),

    /// The credentials file exists but could not be read.
    #[error("Failed to read credentials file '{path}': {source}")]
    UnreadableCredentials {
        /// Path the read was attempted from
        path: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The credentials file is not a valid credentials record.
    ///
    /// Covers both malformed JSON and a record missing required fields
    /// (`bot_token`, `authorized_user_id`).
    #[error("Failed to parse credentials file '{path}': {source}")]
    InvalidCredentials {
        /// Path the record was read from
        path: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
