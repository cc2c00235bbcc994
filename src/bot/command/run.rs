use dioxus_logger::tracing;
use serenity::all::Context;

use crate::{
    bot::command::{help_entries, Invocation, PREFIX},
    model::display::DisplayBlock,
    service::{docs::DocsService, info::InfoService, wiki::WikiService},
    state::AppState,
};

/// Name and avatar of the bot account, shown by the info command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotProfile {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl BotProfile {
    /// Reads the current bot user from the cache.
    pub fn from_context(ctx: &Context) -> Self {
        let user = ctx.cache.current_user();
        Self {
            name: user.name.clone(),
            avatar_url: Some(user.face()),
        }
    }
}

/// Answers an invocation.
///
/// Never fails: search failures are rendered as the error block by the services.
///
/// # Arguments
/// - `state` - Shared fetchers and settings
/// - `invocation` - Parsed command
/// - `profile` - Bot account shown by the info command
///
/// # Returns
/// - `DisplayBlock` - Response to send
pub async fn run(state: &AppState, invocation: Invocation, profile: &BotProfile) -> DisplayBlock {
    tracing::debug!("Running {:?}", invocation);

    let info = InfoService::new(&state.version_resolver, state.icon_url.as_deref());

    match invocation {
        Invocation::Docs(query) => {
            DocsService::new(&state.version_resolver, &state.doc_fetcher, &state.paginator)
                .execute(&query)
                .await
        }
        Invocation::Wiki(query) => {
            WikiService::new(&state.wiki_fetcher, &state.paginator)
                .execute(&query)
                .await
        }
        Invocation::Maven => info.maven().await,
        Invocation::Gradle => info.gradle().await,
        Invocation::Setup => info.setup().await,
        Invocation::Invite => info.invite(),
        Invocation::Github => info.github(),
        Invocation::Example => info.example(),
        Invocation::Info => info.info(&profile.name, profile.avatar_url.as_deref()),
        Invocation::Help => info.help(PREFIX, &help_entries()),
    }
}
