//! Latency check command.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, InteractionId,
};

use crate::error::BotError;

/// Discord epoch (first second of 2015), the zero point of snowflake ids.
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Ping the bot")
}

/// Replies (visibly only to the invoker) with the time elapsed since the
/// invocation was created. No side effects beyond the reply.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), BotError> {
    let latency = latency_ms(command.id, Utc::now().timestamp_millis());

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(format!("Pong!\n{latency}ms"))
            .ephemeral(true),
    );
    command.create_response(&ctx.http, response).await?;

    Ok(())
}

/// Milliseconds between the creation of `interaction_id` and `now_ms`.
///
/// The interaction's creation time is encoded in the upper bits of its
/// snowflake id, relative to the Discord epoch.
fn latency_ms(interaction_id: InteractionId, now_ms: i64) -> i64 {
    let created_ms = (interaction_id.get() >> 22) as i64 + DISCORD_EPOCH_MS;
    now_ms - created_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snowflake_at(unix_ms: i64) -> InteractionId {
        InteractionId::new(((unix_ms - DISCORD_EPOCH_MS) as u64) << 22)
    }

    /// Tests that latency is the elapsed time since snowflake creation.
    ///
    /// Expected: exactly the artificial delay
    #[test]
    fn latency_is_elapsed_time_since_snowflake_creation() {
        let created_ms = 1_735_725_600_000; // 2025-01-01 10:00:00 UTC
        assert_eq!(latency_ms(snowflake_at(created_ms), created_ms + 125), 125);
        assert_eq!(latency_ms(snowflake_at(created_ms), created_ms), 0);
    }

    /// Tests that latency never goes negative for interactions created in
    /// the past.
    ///
    /// Expected: at least the artificial 5s delay
    #[test]
    fn latency_is_non_negative_for_past_interactions() {
        let id = snowflake_at(Utc::now().timestamp_millis() - 5_000);
        let latency = latency_ms(id, Utc::now().timestamp_millis());
        assert!(latency >= 5_000);
    }
}
