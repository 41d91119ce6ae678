//! Ready event handler for bot initialization.
//!
//! The `ready` event fires when the bot completes the gateway handshake. It
//! can fire again on reconnect, so command registration is guarded to run
//! exactly once per process.
//!
//! Registration bulk-overwrites the declared command set, either scoped to
//! the configured debug guild or globally. Bulk overwrite makes re-running
//! registration idempotent: the declared set always matches
//! `command::definitions()`, with no duplicates.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Command, Context, GuildId, Ready};

use crate::command;
use crate::config::Config;
use crate::error::BotError;

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connected user and, on the first ready only, declares the slash
/// command set. A registration failure is logged; the session stays up and
/// keeps serving whatever commands Discord already has declared.
///
/// # Arguments
/// - `config` - Application configuration (selects guild-scoped vs global)
/// - `registered` - One-shot registration guard owned by the handler
/// - `ctx` - Discord context for issuing the registration call
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    config: &Config,
    registered: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if registered.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = register_commands(config, &ctx).await {
        tracing::error!("Failed to register application commands: {e}");
    }
}

async fn register_commands(config: &Config, ctx: &Context) -> Result<(), BotError> {
    let definitions = command::definitions();

    let registered = match config.debug_guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, definitions)
                .await?
        }
        None => Command::set_global_commands(&ctx.http, definitions).await?,
    };

    tracing::info!("Registered {} application commands", registered.len());

    Ok(())
}
