use dioxus_logger::tracing;
use serenity::all::{Context, Reaction, UserId};

use crate::{bot::cleanup, error::AppError};

/// Handle a reaction being added to a message
///
/// Deletes a bot response when someone other than the bot clicks the wastebasket
/// the bot placed on it.
pub async fn handle_reaction_add(ctx: Context, reaction: Reaction) {
    if !cleanup::is_wastebasket(&reaction.emoji) {
        return;
    }

    let bot_id = ctx.cache.current_user().id;
    if reaction.user_id == Some(bot_id) {
        return;
    }

    if let Err(e) = delete_marked_response(&ctx, &reaction, bot_id).await {
        tracing::error!(
            "Failed to delete response {} after wastebasket reaction: {}",
            reaction.message_id,
            e
        );
    }
}

async fn delete_marked_response(
    ctx: &Context,
    reaction: &Reaction,
    bot_id: UserId,
) -> Result<(), AppError> {
    let message = reaction.message(&ctx.http).await?;
    if message.author.id != bot_id {
        return Ok(());
    }

    let marked_by_bot = message
        .reactions
        .iter()
        .any(|existing| existing.me && cleanup::is_wastebasket(&existing.reaction_type));
    if !marked_by_bot {
        return Ok(());
    }

    message.delete(&ctx.http).await?;
    tracing::debug!(
        "Deleted response {} on wastebasket reaction by {:?}",
        message.id,
        reaction.user_id
    );

    Ok(())
}
