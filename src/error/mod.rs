//! Error types for bot startup and command handling.
//!
//! `BotError` is the top-level error type. Configuration errors only occur
//! before the gateway session is opened and abort the process; every other
//! variant stays confined to the command invocation it arose in and is
//! reported back to the invoker.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum BotError {
    /// Configuration error while loading the credentials file at startup.
    ///
    /// Always fatal; the process never starts serving without credentials.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue with an invocation's data (missing option, bad timestamp).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A command was invoked that the dispatch table has no handler for.
    #[error("Command /{0} is not implemented")]
    UnknownCommand(String),
}

/// Manual conversion from serenity::Error to BotError.
///
/// Boxes the error to reduce the size of the BotError enum, as serenity::Error
/// is very large and would make all BotError variants larger if not boxed.
impl From<serenity::Error> for BotError {
    fn from(err: serenity::Error) -> Self {
        BotError::DiscordErr(Box::new(err))
    }
}
