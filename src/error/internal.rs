use thiserror::Error;

/// Internal issues with an invocation's data indicating unexpected input or
/// a mismatch between the declared command and the received payload.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A required option was absent from the command payload.
    ///
    /// Options are declared `required` at registration time, so the platform
    /// enforces their presence; hitting this means the declared command set
    /// and the handler disagree.
    #[error("Missing required option '{name}' on command invocation")]
    MissingOption {
        /// Name of the option that was expected
        name: String,
    },

    /// Failure to parse a timestamp argument.
    ///
    /// Timestamps must match the documented `YYYY-MM-DD hh:mm:ss` format and
    /// are interpreted as UTC.
    #[error("Failed to parse timestamp '{value}' (expected YYYY-MM-DD hh:mm:ss): {source}")]
    InvalidTimestamp {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Failure to convert a Unix timestamp to a Discord timestamp.
    ///
    /// Occurs when a parsed timestamp falls outside the range Discord's
    /// timestamp format can represent.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
