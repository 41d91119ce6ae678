//! Slash command surface of the bot.
//!
//! Each command module exposes `register()`, producing the command's
//! declaration, and `run()`, handling one invocation. [`definitions`]
//! collects the full set declared to Discord on ready; declaration is a bulk
//! overwrite, so re-declaring the same set is idempotent and never produces
//! duplicates.

pub mod jam;
pub mod ping;

use serenity::all::{CommandData, CreateCommand, ResolvedValue};

use crate::error::{internal::InternalError, BotError};

/// The full command set declared to Discord.
pub fn definitions() -> Vec<CreateCommand> {
    vec![ping::register(), jam::register()]
}

/// Looks up a required string option by name on an invocation payload.
///
/// # Arguments
/// - `data` - Command payload carried by the interaction
/// - `name` - Option name as declared at registration
///
/// # Returns
/// - `Ok(String)` - The option's value
/// - `Err(BotError::InternalErr(MissingOption))` - The option is absent or
///   not a string; the platform enforces required options, so this indicates
///   a mismatch between the declared command and the handler
pub(crate) fn required_string_option(data: &CommandData, name: &str) -> Result<String, BotError> {
    data.options()
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match &option.value {
            ResolvedValue::String(value) => Some((*value).to_string()),
            _ => None,
        })
        .ok_or_else(|| {
            InternalError::MissingOption {
                name: name.to_string(),
            }
            .into()
        })
}
