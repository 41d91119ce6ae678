use chrono::NaiveDateTime;
use serenity::all::{GuildId, ScheduledEventId, Timestamp};

use crate::error::{internal::InternalError, BotError};

/// Format timestamp arguments must match, interpreted as UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a timestamp argument into a Discord timestamp.
///
/// The input must match [`TIMESTAMP_FORMAT`] exactly; no locale-dependent
/// formats are accepted. Validation happens here, before the value reaches
/// any remote call.
///
/// # Arguments
/// - `value` - The string to parse, e.g. `"2025-01-01 10:00:00"`
///
/// # Returns
/// - `Ok(Timestamp)` - Successfully parsed timestamp
/// - `Err(BotError::InternalErr(InvalidTimestamp))` - Input does not match
///   the documented format
/// - `Err(BotError::InternalErr(InvalidDiscordTimestamp))` - Input parsed but
///   is outside the representable range
pub fn parse_timestamp(value: &str) -> Result<Timestamp, BotError> {
    let parsed = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        InternalError::InvalidTimestamp {
            value: value.to_string(),
            source: e,
        }
    })?;

    let unix = parsed.and_utc().timestamp();
    let timestamp = Timestamp::from_unix_timestamp(unix).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        }
    })?;

    Ok(timestamp)
}

/// Builds the shareable URL of a guild scheduled event.
pub fn event_url(guild_id: GuildId, event_id: ScheduledEventId) -> String {
    format!("https://discord.com/events/{guild_id}/{event_id}")
}
