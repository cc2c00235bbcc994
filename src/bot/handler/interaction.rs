use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::{
    bot::{
        cleanup,
        command::{
            args::{parse_options, SlashArgs},
            run::{run, BotProfile},
            BotCommand,
        },
        embed::build_embed,
    },
    error::AppError,
    state::AppState,
};

/// Handle a slash command interaction
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(bot_command) = BotCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown slash command /{}", command.data.name);
        return;
    };

    let args = parse_options(bot_command, &command.data.options());

    if let Err(e) = respond(state, &ctx, &command, bot_command, args).await {
        tracing::error!(
            "Failed to respond to /{} command: {}",
            bot_command.name(),
            e
        );
    }
}

/// Sends the response and adds the wastebasket to public responses.
///
/// Search commands are deferred first since their lookups may outlast the
/// interaction deadline.
async fn respond(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    bot_command: BotCommand,
    args: SlashArgs,
) -> Result<(), AppError> {
    let profile = BotProfile::from_context(ctx);
    let ephemeral = !args.show_to_everyone;

    let response = if bot_command.is_search() {
        if ephemeral {
            command.defer_ephemeral(&ctx.http).await?;
        } else {
            command.defer(&ctx.http).await?;
        }

        let block = run(state, args.invocation, &profile).await;
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().embed(build_embed(&block)),
            )
            .await?
    } else {
        let block = run(state, args.invocation, &profile).await;
        command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .embed(build_embed(&block))
                        .ephemeral(ephemeral),
                ),
            )
            .await?;
        command.get_response(&ctx.http).await?
    };

    // Ephemeral responses cannot carry reactions
    if !ephemeral {
        response.react(&ctx.http, cleanup::wastebasket()).await?;
    }

    Ok(())
}
