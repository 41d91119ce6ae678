use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::BotError;

/// Starts the Discord bot in a blocking manner.
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down; after a successful start the process makes no further
/// progress except through the registered event handlers.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(BotError)` if client construction or the gateway connection fails
pub async fn start_bot(config: Config) -> Result<(), BotError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(config.clone());

    // Build the client
    let mut client = Client::builder(&config.bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
