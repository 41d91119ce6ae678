//! Jam provisioning command.
//!
//! `/jam` lays out everything a jam needs in one pass: a category holding
//! `info` and `general` text channels, an external scheduled event, a role
//! granted access to the category, and the key links posted to `info`.
//!
//! The creation steps run strictly in sequence because each depends on
//! identifiers returned by the previous one. There is no rollback: whatever
//! was created before a failing step stays in the guild, and the failure is
//! reported to the invoker instead of a confirmation.

use serenity::all::{
    ChannelType, CommandData, CommandInteraction, CommandOptionType, Context, CreateChannel,
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    CreateScheduledEvent, EditRole, PermissionOverwrite, PermissionOverwriteType, Permissions,
    RoleId, ScheduledEventType, Timestamp, UserId,
};

use crate::command::required_string_option;
use crate::config::Config;
use crate::error::BotError;
use crate::util::parse::{event_url, parse_timestamp};

pub fn register() -> CreateCommand {
    CreateCommand::new("jam")
        .description("Create a new jam")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Name of the jam")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "start",
                "Start YYYY-MM-DD hh:mm:ss (UTC)",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "end",
                "End YYYY-MM-DD hh:mm:ss (UTC)",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "link", "Link").required(true),
        )
}

/// Typed arguments of a `/jam` invocation.
///
/// Timestamps are validated here, before any remote creation call is issued.
#[derive(Debug)]
struct JamArgs {
    name: String,
    start: Timestamp,
    end: Timestamp,
    link: String,
}

impl JamArgs {
    fn from_data(data: &CommandData) -> Result<Self, BotError> {
        Ok(Self {
            name: required_string_option(data, "name")?,
            start: parse_timestamp(&required_string_option(data, "start")?)?,
            end: parse_timestamp(&required_string_option(data, "end")?)?,
            link: required_string_option(data, "link")?,
        })
    }
}

fn is_authorized(config: &Config, user_id: UserId) -> bool {
    user_id.get() == config.authorized_user_id
}

/// Permission overwrites hiding a jam category from everyone but its role.
fn category_overwrites(everyone: RoleId, jam_role: RoleId) -> [PermissionOverwrite; 2] {
    [
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(everyone),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL
                | Permissions::MANAGE_CHANNELS
                | Permissions::MANAGE_MESSAGES,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(jam_role),
        },
    ]
}

/// Handles a `/jam` invocation.
///
/// Only the configured authorized user may run this, and only from within a
/// guild; anyone or anywhere else gets an ephemeral denial and nothing is
/// created. Errors raised by the creation sequence propagate to the dispatch
/// boundary, which reports them to the invoker.
pub async fn run(
    config: &Config,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), BotError> {
    if !is_authorized(config, command.user.id) {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("You don't have the perms for that")
                .ephemeral(true),
        );
        command.create_response(&ctx.http, response).await?;
        return Ok(());
    }

    let Some(guild_id) = command.guild_id else {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("This can only be done in a guild")
                .ephemeral(true),
        );
        command.create_response(&ctx.http, response).await?;
        return Ok(());
    };

    // The provisioning sequence takes longer than the immediate-response
    // window, so acknowledge now and follow up when done.
    command.defer(&ctx.http).await?;

    let args = JamArgs::from_data(&command.data)?;

    tracing::info!("Creating jam '{}' in guild {}", args.name, guild_id);

    // Category with its two text channels
    let category = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new(args.name.as_str()).kind(ChannelType::Category),
        )
        .await?;
    let info = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new("info")
                .kind(ChannelType::Text)
                .category(category.id),
        )
        .await?;
    guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new("general")
                .kind(ChannelType::Text)
                .category(category.id),
        )
        .await?;

    // Scheduled event spanning the jam, held at the submission link
    let event = guild_id
        .create_scheduled_event(
            &ctx.http,
            CreateScheduledEvent::new(ScheduledEventType::External, args.name.as_str(), args.start)
                .end_time(args.end)
                .location(args.link.as_str()),
        )
        .await?;

    // Role for participants
    let role = guild_id
        .create_role(&ctx.http, EditRole::new().name(args.name.as_str()))
        .await?;

    // The @everyone role shares the guild's id
    let everyone = RoleId::new(guild_id.get());
    for overwrite in category_overwrites(everyone, role.id) {
        category.create_permission(&ctx.http, overwrite).await?;
    }

    // Post the important links in #info
    info.id
        .send_message(&ctx.http, CreateMessage::new().content(args.link.as_str()))
        .await?;
    info.id
        .send_message(
            &ctx.http,
            CreateMessage::new().content(event_url(event.guild_id, event.id)),
        )
        .await?;

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().content("Event created!"),
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jam_data(options: serde_json::Value) -> CommandData {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "jam",
            "type": 1,
            "options": options,
        }))
        .expect("valid command data")
    }

    fn test_config() -> Config {
        Config {
            bot_token: "token".to_string(),
            authorized_user_id: 144851584478740481,
            debug_guild_id: None,
        }
    }

    /// Tests the authorization decision against the configured identity.
    ///
    /// Expected: true only for the configured user
    #[test]
    fn only_the_configured_user_is_authorized() {
        let config = test_config();
        assert!(is_authorized(&config, UserId::new(144851584478740481)));
        assert!(!is_authorized(&config, UserId::new(144851584478740482)));
        assert!(!is_authorized(&config, UserId::new(1)));
    }

    /// Tests extraction and validation of a well-formed invocation.
    ///
    /// Expected: Ok with parsed timestamps matching the inputs
    #[test]
    fn extracts_and_parses_valid_arguments() {
        let data = jam_data(serde_json::json!([
            {"name": "name", "type": 3, "value": "Test"},
            {"name": "start", "type": 3, "value": "2025-01-01 10:00:00"},
            {"name": "end", "type": 3, "value": "2025-01-01 12:00:00"},
            {"name": "link", "type": 3, "value": "https://example.com"},
        ]));

        let args = JamArgs::from_data(&data).unwrap();
        assert_eq!(args.name, "Test");
        assert_eq!(args.start.unix_timestamp(), 1735725600);
        assert_eq!(args.end.unix_timestamp(), 1735732800);
        assert_eq!(args.link, "https://example.com");
    }

    /// Tests that a locale-style start date fails validation before any
    /// creation step would run, with the rejected input preserved for the
    /// error reply.
    ///
    /// Expected: Err echoing the rejected value
    #[test]
    fn malformed_start_fails_validation_with_input_preserved() {
        let data = jam_data(serde_json::json!([
            {"name": "name", "type": 3, "value": "Test"},
            {"name": "start", "type": 3, "value": "01/01/2025 10:00 AM"},
            {"name": "end", "type": 3, "value": "2025-01-01 12:00:00"},
            {"name": "link", "type": 3, "value": "https://example.com"},
        ]));

        let err = JamArgs::from_data(&data).unwrap_err();
        assert!(err.to_string().contains("01/01/2025 10:00 AM"));
    }

    /// Tests that an absent option is reported by name.
    ///
    /// Expected: Err naming the missing option
    #[test]
    fn missing_option_is_reported_by_name() {
        let data = jam_data(serde_json::json!([
            {"name": "name", "type": 3, "value": "Test"},
        ]));

        let err = JamArgs::from_data(&data).unwrap_err();
        assert!(err.to_string().contains("'start'"));
    }

    /// Tests the category permission overwrites.
    ///
    /// Expected: view denied for @everyone; view, manage channel, and manage
    /// messages allowed for the jam role
    #[test]
    fn category_overwrites_hide_the_category_and_grant_the_jam_role() {
        let everyone = RoleId::new(832001341865197579);
        let jam_role = RoleId::new(42);
        let [for_everyone, for_role] = category_overwrites(everyone, jam_role);

        assert!(for_everyone.allow.is_empty());
        assert_eq!(for_everyone.deny, Permissions::VIEW_CHANNEL);
        assert!(
            matches!(for_everyone.kind, PermissionOverwriteType::Role(id) if id == everyone)
        );

        assert_eq!(
            for_role.allow,
            Permissions::VIEW_CHANNEL | Permissions::MANAGE_CHANNELS | Permissions::MANAGE_MESSAGES
        );
        assert!(for_role.deny.is_empty());
        assert!(matches!(for_role.kind, PermissionOverwriteType::Role(id) if id == jam_role));
    }
}
