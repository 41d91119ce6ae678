//! Discord bot session wiring.
//!
//! This module owns the gateway session: it builds the Serenity client,
//! installs the event handler, and keeps the connection alive for the
//! process lifetime. On the first ready signal the slash command set is
//! declared to Discord; every subsequent command interaction is routed into
//! the command handlers.
//!
//! Serenity runs each inbound event as its own task, so handlers for
//! separate invocations may overlap. Nothing here coordinates them beyond
//! the one-shot registration guard; within a single invocation the command
//! handlers themselves are strictly sequential.
//!
//! # Gateway Intents
//!
//! The bot only needs the `GUILDS` intent. Command interactions are
//! delivered regardless of intents; `GUILDS` covers the guild metadata the
//! session uses.

pub mod handler;
pub mod start;
