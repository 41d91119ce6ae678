use std::sync::atomic::AtomicBool;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::config::Config;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    config: Config,
    /// One-shot guard so command registration runs on the first ready only.
    /// Checked-and-set atomically; concurrent ready signals race safely.
    registered: AtomicBool,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registered: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, &self.registered, ctx, ready).await;
    }

    /// Called for every inbound interaction, including command invocations
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.config, ctx, interaction).await;
    }
}
