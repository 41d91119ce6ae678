mod bot;
mod command;
mod config;
mod error;
mod util;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::BotError;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Initialising bot");

    // A missing or malformed credentials file aborts startup before the
    // gateway connection is opened.
    let config = Config::load()?;

    bot::start::start_bot(config).await
}
