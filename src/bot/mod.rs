//! Discord adapter for the support commands.
//!
//! This module connects the services to Discord through serenity. Every command is
//! available both as a slash command, registered globally once the gateway reports
//! ready, and as a text command with the `!` prefix. Responses are built as
//! [`DisplayBlock`](crate::model::display::DisplayBlock)s by the services and only
//! converted to embeds here.
//!
//! Responses can be removed again: deleting the invocation of a text command
//! deletes the bot's answer, and adding the wastebasket reaction the bot placed on
//! an answer deletes it too.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and populate the cache
//! - `GUILD_MESSAGES` - Receive text commands and message deletions in guilds
//! - `DIRECT_MESSAGES` - Receive text commands sent in direct messages
//! - `MESSAGE_CONTENT` - Read the content of text commands (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Receive wastebasket reactions on responses in guilds
//! - `DIRECT_MESSAGE_REACTIONS` - Receive wastebasket reactions on responses in direct messages
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod cleanup;
pub mod command;
pub mod embed;
pub mod handler;
pub mod start;

#[cfg(test)]
mod test;
