//! Command registry shared by the slash and text entry points.
//!
//! Every command is known by one [`BotCommand`] value carrying its name,
//! description and text usage. Parsed arguments turn it into an [`Invocation`],
//! which [`run::run`] answers with a display block.

pub mod args;
pub mod run;

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    model::search::{DocSearchType, DocsQuery, WikiQuery},
    service::info::HelpEntry,
};

/// Prefix of text commands.
pub const PREFIX: &str = "!";

/// Slash option making the response visible to everyone in the channel.
pub const SHOW_TO_EVERYONE: &str = "show-to-everyone";

pub const SEARCH_TERM: &str = "search-term";
pub const SEARCH_TYPE: &str = "search-type";
pub const INCLUDE_ALL: &str = "include-all";
pub const SEARCH_IN_KEYWORDS: &str = "search-in-keywords";
pub const SEARCH_IN_TITLES: &str = "search-in-titles";
pub const SEARCH_IN_CONTENTS: &str = "search-in-contents";

/// A command the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Docs,
    Example,
    Github,
    Gradle,
    Help,
    Info,
    Invite,
    Maven,
    Setup,
    Wiki,
}

impl BotCommand {
    /// Every command, in alphabetical order.
    pub const ALL: [BotCommand; 10] = [
        Self::Docs,
        Self::Example,
        Self::Github,
        Self::Gradle,
        Self::Help,
        Self::Info,
        Self::Invite,
        Self::Maven,
        Self::Setup,
        Self::Wiki,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Example => "example",
            Self::Github => "github",
            Self::Gradle => "gradle",
            Self::Help => "help",
            Self::Info => "info",
            Self::Invite => "invite",
            Self::Maven => "maven",
            Self::Setup => "setup",
            Self::Wiki => "wiki",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Docs => "Shows a link to the JavaDoc or searches through it",
            Self::Example => "Shows a link to the example bot",
            Self::Github => "Shows links to the most important GitHub pages",
            Self::Gradle => "Shows the Gradle dependency",
            Self::Help => "Shows the help page",
            Self::Info => "Shows information about this bot",
            Self::Invite => "Shows the invite link to the Javacord server",
            Self::Maven => "Shows the Maven dependency",
            Self::Setup => "Shows useful information to setup a Javacord bot",
            Self::Wiki => "Shows a link to the wiki or searches through it",
        }
    }

    /// Argument syntax of the text command, if it takes arguments.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            Self::Docs => Some(
                "[[('classes' | 'class' | 'c' | 'methods' | 'method' | 'm')] [('all' | 'a')] <search...>]",
            ),
            Self::Wiki => Some(
                "[[('title' | 't' | 'page' | 'p' | 'full' | 'f' | 'content' | 'c')] <search...>]",
            ),
            _ => None,
        }
    }

    /// Looks up a command by its name.
    ///
    /// # Arguments
    /// - `name` - Command name without prefix, matched case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    /// Whether answering needs remote lookups long enough to require deferring.
    pub fn is_search(&self) -> bool {
        matches!(self, Self::Docs | Self::Wiki)
    }

    /// Builds the slash command registration.
    pub fn create_command(&self) -> CreateCommand {
        let command = CreateCommand::new(self.name()).description(self.description());

        let command = match self {
            Self::Docs => command
                .add_option(search_term_option())
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        SEARCH_TYPE,
                        "The type of the search (default: Members)",
                    )
                    .add_string_choice("Classes", DocSearchType::Classes.as_str())
                    .add_string_choice("Members", DocSearchType::Members.as_str()),
                )
                .add_option(boolean_option(
                    INCLUDE_ALL,
                    "Whether to search in internal and core classes (default: false)",
                )),
            Self::Wiki => command
                .add_option(search_term_option())
                .add_option(boolean_option(
                    SEARCH_IN_KEYWORDS,
                    "Whether to search in keywords (default: true)",
                ))
                .add_option(boolean_option(
                    SEARCH_IN_TITLES,
                    "Whether to search in titles (default: true)",
                ))
                .add_option(boolean_option(
                    SEARCH_IN_CONTENTS,
                    "Whether to search in content (default: false)",
                )),
            _ => command,
        };

        command.add_option(boolean_option(
            SHOW_TO_EVERYONE,
            "Show response to all users",
        ))
    }
}

/// A parsed command ready to be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Docs(DocsQuery),
    Wiki(WikiQuery),
    Example,
    Github,
    Gradle,
    Help,
    Info,
    Invite,
    Maven,
    Setup,
}

impl Invocation {
    /// Invocation of a command with all arguments left at their defaults.
    pub fn with_defaults(command: BotCommand) -> Self {
        match command {
            BotCommand::Docs => Self::Docs(DocsQuery::default()),
            BotCommand::Wiki => Self::Wiki(WikiQuery::default()),
            BotCommand::Example => Self::Example,
            BotCommand::Github => Self::Github,
            BotCommand::Gradle => Self::Gradle,
            BotCommand::Help => Self::Help,
            BotCommand::Info => Self::Info,
            BotCommand::Invite => Self::Invite,
            BotCommand::Maven => Self::Maven,
            BotCommand::Setup => Self::Setup,
        }
    }
}

/// Usage lines of every command, as listed by the help command.
pub fn help_entries() -> Vec<HelpEntry> {
    BotCommand::ALL
        .iter()
        .map(|command| HelpEntry {
            name: command.name().to_string(),
            description: command.description().to_string(),
            usage: command.usage().map(str::to_string),
        })
        .collect()
}

/// Slash command registrations of every command.
pub fn create_commands() -> Vec<CreateCommand> {
    BotCommand::ALL
        .iter()
        .map(BotCommand::create_command)
        .collect()
}

fn search_term_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        SEARCH_TERM,
        "The term to search for",
    )
}

fn boolean_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Boolean, name, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_commands_by_name() {
        assert_eq!(BotCommand::from_name("docs"), Some(BotCommand::Docs));
        assert_eq!(BotCommand::from_name("WIKI"), Some(BotCommand::Wiki));
        assert_eq!(BotCommand::from_name("lmgtfy"), None);
    }

    /// Tests that the help listing covers every command.
    ///
    /// Expected: 10 entries, usage only on the search commands
    #[test]
    fn help_lists_every_command() {
        let entries = help_entries();

        assert_eq!(entries.len(), BotCommand::ALL.len());
        let with_usage: Vec<&str> = entries
            .iter()
            .filter(|entry| entry.usage.is_some())
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(with_usage, vec!["docs", "wiki"]);
    }

    /// Tests the slash registration of the docs command.
    ///
    /// Expected: search term, search type choices, include-all and show-to-everyone
    #[test]
    fn docs_registration_carries_options() {
        let json = serde_json::to_value(BotCommand::Docs.create_command()).unwrap();

        assert_eq!(json["name"], "docs");
        let options = json["options"].as_array().unwrap();
        let names: Vec<&str> = options
            .iter()
            .filter_map(|option| option["name"].as_str())
            .collect();
        assert_eq!(
            names,
            vec![SEARCH_TERM, SEARCH_TYPE, INCLUDE_ALL, SHOW_TO_EVERYONE]
        );
        assert_eq!(options[1]["choices"][0]["value"], "classes");
        assert_eq!(options[1]["choices"][1]["value"], "members");
    }

    #[test]
    fn registers_every_command() {
        assert_eq!(create_commands().len(), 10);
    }
}
