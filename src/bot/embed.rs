use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::model::display::DisplayBlock;

/// Converts a display block into a Discord embed.
///
/// # Arguments
/// - `block` - Block rendered by a service
///
/// # Returns
/// - `CreateEmbed` - Embed carrying every part of the block that is set
pub fn build_embed(block: &DisplayBlock) -> CreateEmbed {
    let mut embed = CreateEmbed::new().color(block.color).fields(
        block
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
    );

    if let Some(title) = &block.title {
        embed = embed.title(title);
    }
    if let Some(url) = &block.url {
        embed = embed.url(url);
    }
    if let Some(description) = &block.description {
        embed = embed.description(description);
    }
    if let Some(thumbnail) = &block.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }
    if let Some(footer) = &block.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    embed
}
