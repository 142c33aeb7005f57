//! Discord bot integration: gateway client, event handlers, and commands.
//!
//! The bot owns the primary control flow of the application. Gateway events
//! arrive through the `handler` module: slash commands are dispatched by name
//! to exactly one handler in `command/`, and plain messages run through the
//! passive trigger in `trigger`. Every interaction receives exactly one
//! user-visible response; handlers that perform a remote call acknowledge
//! receipt (defer) before the call and deliver the final content once it
//! resolves.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild lifecycle events and interaction context
//! - `GUILD_MESSAGES` - Messages in guild channels for the passive trigger
//! - `DIRECT_MESSAGES` - DMs, which always trigger the chat path
//! - `MESSAGE_CONTENT` - Reading message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod commands;
pub mod handler;
pub mod notify;
pub mod start;
pub mod trigger;
