//! Argument parsing for text and slash invocations.
//!
//! Text commands take whitespace separated words. A leading flag word is only
//! treated as a flag when a search term follows it, so `!docs class` searches for
//! "class" instead of listing every class.

use serenity::all::{ResolvedOption, ResolvedValue};

use crate::{
    bot::command::{
        BotCommand, Invocation, INCLUDE_ALL, PREFIX, SEARCH_IN_CONTENTS, SEARCH_IN_KEYWORDS,
        SEARCH_IN_TITLES, SEARCH_TERM, SEARCH_TYPE, SHOW_TO_EVERYONE,
    },
    model::search::{DocSearchType, DocsQuery, WikiQuery, WikiSearchCriteria},
};

const CLASS_FLAGS: [&str; 3] = ["classes", "class", "c"];
const METHOD_FLAGS: [&str; 3] = ["methods", "method", "m"];
const INCLUDE_ALL_FLAGS: [&str; 2] = ["all", "a"];
const TITLE_FLAGS: [&str; 4] = ["title", "t", "page", "p"];
const CONTENT_FLAGS: [&str; 4] = ["full", "f", "content", "c"];

/// A parsed slash invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashArgs {
    /// The command with its arguments.
    pub invocation: Invocation,
    /// Whether the response is visible to everyone rather than only the invoker.
    pub show_to_everyone: bool,
}

/// Splits a message into the command it invokes and the argument text.
///
/// # Arguments
/// - `content` - Full message content
///
/// # Returns
/// - `Some((BotCommand, &str))` - Prefixed, known command and its trailing text
/// - `None` - Not a command of this bot
pub fn split_command(content: &str) -> Option<(BotCommand, &str)> {
    let body = content.trim_start().strip_prefix(PREFIX)?;
    let (name, rest) = body
        .split_once(char::is_whitespace)
        .unwrap_or((body, ""));

    BotCommand::from_name(name).map(|command| (command, rest.trim()))
}

/// Parses the argument text of a text command.
///
/// Commands without arguments ignore any trailing text.
///
/// # Arguments
/// - `command` - The invoked command
/// - `args` - Text following the command name
pub fn parse_text(command: BotCommand, args: &str) -> Invocation {
    let words: Vec<&str> = args.split_whitespace().collect();

    match command {
        BotCommand::Docs => Invocation::Docs(parse_docs_words(&words)),
        BotCommand::Wiki => Invocation::Wiki(parse_wiki_words(&words)),
        _ => Invocation::with_defaults(command),
    }
}

fn parse_docs_words(words: &[&str]) -> DocsQuery {
    let mut query = DocsQuery::default();
    let mut start = 0;

    if words.len() > start + 1 {
        if is_flag(words[start], &CLASS_FLAGS) {
            query.search_type = DocSearchType::Classes;
            start += 1;
        } else if is_flag(words[start], &METHOD_FLAGS) {
            start += 1;
        }
    }
    if words.len() > start + 1 && is_flag(words[start], &INCLUDE_ALL_FLAGS) {
        query.include_all = true;
        start += 1;
    }

    query.search_term = join_search_term(&words[start..]);
    query
}

fn parse_wiki_words(words: &[&str]) -> WikiQuery {
    let mut query = WikiQuery::default();
    let mut start = 0;

    if words.len() > 1 {
        if is_flag(words[0], &TITLE_FLAGS) {
            query.criteria.keywords = false;
            start = 1;
        } else if is_flag(words[0], &CONTENT_FLAGS) {
            query.criteria.contents = true;
            start = 1;
        }
    }

    query.search_term = join_search_term(&words[start..]);
    query
}

fn is_flag(word: &str, flags: &[&str]) -> bool {
    flags.iter().any(|flag| flag.eq_ignore_ascii_case(word))
}

fn join_search_term(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Parses the options of a slash invocation.
///
/// Missing options take their documented defaults; an empty search term counts as
/// no search term.
///
/// # Arguments
/// - `command` - The invoked command
/// - `options` - Resolved options of the interaction
pub fn parse_options(command: BotCommand, options: &[ResolvedOption<'_>]) -> SlashArgs {
    let search_term = string_option(options, SEARCH_TERM)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string);

    let invocation = match command {
        BotCommand::Docs => Invocation::Docs(DocsQuery {
            search_term,
            search_type: string_option(options, SEARCH_TYPE)
                .and_then(DocSearchType::from_option)
                .unwrap_or_default(),
            include_all: bool_option(options, INCLUDE_ALL).unwrap_or(false),
        }),
        BotCommand::Wiki => {
            let defaults = WikiSearchCriteria::default();
            Invocation::Wiki(WikiQuery {
                search_term,
                criteria: WikiSearchCriteria {
                    keywords: bool_option(options, SEARCH_IN_KEYWORDS)
                        .unwrap_or(defaults.keywords),
                    titles: bool_option(options, SEARCH_IN_TITLES).unwrap_or(defaults.titles),
                    contents: bool_option(options, SEARCH_IN_CONTENTS)
                        .unwrap_or(defaults.contents),
                },
            })
        }
        _ => Invocation::with_defaults(command),
    };

    SlashArgs {
        invocation,
        show_to_everyone: bool_option(options, SHOW_TO_EVERYONE).unwrap_or(false),
    }
}

fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

fn bool_option(options: &[ResolvedOption<'_>], name: &str) -> Option<bool> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Boolean(value) if option.name == name => Some(value),
        _ => None,
    })
}
