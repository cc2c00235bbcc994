use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command::{create_commands, PREFIX};

/// Handle the bot becoming ready
///
/// Registers every slash command globally. Registration replaces the previous set,
/// so commands that no longer exist are removed.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::listening(format!("{}help", PREFIX))));

    match Command::set_global_commands(&ctx.http, create_commands()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
