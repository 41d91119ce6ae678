//! Command interaction dispatch.
//!
//! Routes command invocations to their handlers by name. Every outcome is
//! reported back to the invoker: unknown commands and handler errors alike
//! surface as an ephemeral reply carrying the error's full text, and nothing
//! escapes this boundary to terminate the session.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::command::{jam, ping};
use crate::config::Config;
use crate::error::BotError;

/// Handles an inbound interaction, dispatching command invocations.
///
/// # Arguments
/// - `config` - Application configuration consulted by the handlers
/// - `ctx` - Discord context for issuing replies and creation calls
/// - `interaction` - The inbound interaction event
pub async fn handle_interaction(config: &Config, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Dispatching /{} for user {}",
        command.data.name,
        command.user.id
    );

    let result = match command.data.name.as_str() {
        "ping" => ping::run(&ctx, &command).await,
        "jam" => jam::run(config, &ctx, &command).await,
        name => Err(BotError::UnknownCommand(name.to_string())),
    };

    if let Err(err) = result {
        tracing::error!("Command /{} failed: {err}", command.data.name);
        report_error(&ctx, &command, &err).await;
    }
}

/// Reports a command failure to the invoker as an ephemeral reply.
///
/// If the invocation was already acknowledged (the jam sequence defers
/// before doing work), an immediate response is no longer possible and the
/// report goes out as an ephemeral follow-up instead.
async fn report_error(ctx: &Context, command: &CommandInteraction, err: &BotError) {
    let content = error_reply_content(err);

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content.as_str())
            .ephemeral(true),
    );
    if command.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(content.as_str())
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        tracing::error!("Failed to report command error to invoker: {e}");
    }
}

/// Formats the reply shown to the invoker when a command fails.
fn error_reply_content(err: &BotError) -> String {
    format!("An error occurred:\n```\n{err}\n```")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the error reply embeds the failure's full display text.
    ///
    /// Expected: reply contains the command name from the unknown-command
    /// error, wrapped in a code block
    #[test]
    fn error_reply_embeds_full_error_text() {
        let err = BotError::UnknownCommand("frobnicate".to_string());

        let content = error_reply_content(&err);
        assert!(content.starts_with("An error occurred:"));
        assert!(content.contains("Command /frobnicate is not implemented"));
        assert!(content.contains("```"));
    }
}
