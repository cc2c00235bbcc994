use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, CreateMessage, GetMessages, Message, MessageId};

use crate::{
    bot::{
        cleanup,
        command::{
            args::{parse_text, split_command},
            run::{run, BotProfile},
        },
        embed::build_embed,
    },
    error::AppError,
    state::AppState,
};

/// Number of messages after a deleted invocation searched for its response.
const CLEANUP_SCAN_LIMIT: u8 = 100;

/// Handle message creation in a channel
///
/// Answers text commands with a reply carrying the response tracker. Messages of
/// bots and commands outside the permitted channel are ignored.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some((bot_command, args)) = split_command(&message.content) else {
        return;
    };

    let guild_id = message.guild_id.map(|id| id.get());
    if !state.restriction.allows(guild_id, message.channel_id.get()) {
        tracing::debug!(
            "Ignoring !{} command in restricted channel {}",
            bot_command.name(),
            message.channel_id
        );
        return;
    }

    let profile = BotProfile::from_context(&ctx);
    let block = run(state, parse_text(bot_command, args), &profile).await;
    let block = cleanup::insert_response_tracker(block, message.id.get());

    let reply = CreateMessage::new()
        .embed(build_embed(&block))
        .reference_message(&message);

    if let Err(e) = message.channel_id.send_message(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply to !{} command in channel {}: {}",
            bot_command.name(),
            message.channel_id,
            e
        );
    }
}

/// Handle message deletion in a channel
///
/// Deletes the bot's response to the deleted message, if one was posted within an
/// hour after it.
pub async fn handle_message_delete(
    ctx: Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
) {
    if let Err(e) = delete_tracked_response(&ctx, channel_id, deleted_message_id).await {
        tracing::error!(
            "Failed to clean up response to deleted message {}: {}",
            deleted_message_id,
            e
        );
    }
}

async fn delete_tracked_response(
    ctx: &Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
) -> Result<(), AppError> {
    let bot_id = ctx.cache.current_user().id;
    let deleted_at = *deleted_message_id.created_at();

    let messages = channel_id
        .messages(
            &ctx.http,
            GetMessages::new()
                .after(deleted_message_id)
                .limit(CLEANUP_SCAN_LIMIT),
        )
        .await?;

    let response = messages.into_iter().find(|candidate| {
        candidate.author.id == bot_id
            && cleanup::within_cleanup_window(deleted_at, *candidate.timestamp)
            && cleanup::is_response_to(
                candidate
                    .embeds
                    .first()
                    .and_then(|embed| embed.footer.as_ref())
                    .map(|footer| footer.text.as_str()),
                deleted_message_id.get(),
            )
    });

    if let Some(response) = response {
        response.delete(&ctx.http).await?;
        tracing::debug!(
            "Deleted response {} to deleted message {}",
            response.id,
            deleted_message_id
        );
    }

    Ok(())
}
