use super::*;

fn docs(args: &str) -> DocsQuery {
    match parse_text(BotCommand::Docs, args) {
        Invocation::Docs(query) => query,
        other => panic!("Expected docs invocation, got {:?}", other),
    }
}

fn wiki(args: &str) -> WikiQuery {
    match parse_text(BotCommand::Wiki, args) {
        Invocation::Wiki(query) => query,
        other => panic!("Expected wiki invocation, got {:?}", other),
    }
}

/// Tests splitting the prefix and command name off a message.
///
/// Expected: known commands with trimmed arguments, None otherwise
#[test]
fn splits_prefixed_commands() {
    assert_eq!(
        split_command("!docs  class  DiscordApi "),
        Some((BotCommand::Docs, "class  DiscordApi"))
    );
    assert_eq!(split_command("!help"), Some((BotCommand::Help, "")));
    assert_eq!(split_command("!unknown foo"), None);
    assert_eq!(split_command("docs foo"), None);
    assert_eq!(split_command("! docs"), None);
}

/// Tests that a docs invocation without words requests the overview.
///
/// Expected: no search term, member search, api only
#[test]
fn docs_without_words_requests_overview() {
    assert_eq!(docs(""), DocsQuery::default());
}

/// Tests the docs search type and include-all flags.
///
/// Expected: flags consumed in order, remaining words joined as search term
#[test]
fn docs_flags_are_consumed_in_order() {
    let query = docs("c a Message Builder");
    assert_eq!(query.search_type, DocSearchType::Classes);
    assert!(query.include_all);
    assert_eq!(query.search_term.as_deref(), Some("Message Builder"));

    let query = docs("methods send");
    assert_eq!(query.search_type, DocSearchType::Members);
    assert!(!query.include_all);
    assert_eq!(query.search_term.as_deref(), Some("send"));

    let query = docs("all send");
    assert_eq!(query.search_type, DocSearchType::Members);
    assert!(query.include_all);
}

/// Tests that a flag word is searched for when nothing follows it.
///
/// Expected: the single word becomes the search term
#[test]
fn lone_flag_is_a_search_term() {
    let query = docs("class");
    assert_eq!(query.search_type, DocSearchType::Members);
    assert_eq!(query.search_term.as_deref(), Some("class"));

    let query = docs("c all");
    assert_eq!(query.search_type, DocSearchType::Classes);
    assert!(!query.include_all);
    assert_eq!(query.search_term.as_deref(), Some("all"));
}

/// Tests the wiki search scope flags.
///
/// Expected: title flags disable keywords, content flags enable contents
#[test]
fn wiki_flags_change_criteria() {
    let query = wiki("page Gradle");
    assert_eq!(
        query.criteria,
        WikiSearchCriteria {
            keywords: false,
            titles: true,
            contents: false,
        }
    );
    assert_eq!(query.search_term.as_deref(), Some("Gradle"));

    let query = wiki("full intents");
    assert!(query.criteria.keywords && query.criteria.contents);

    let query = wiki("title");
    assert_eq!(query.criteria, WikiSearchCriteria::default());
    assert_eq!(query.search_term.as_deref(), Some("title"));
}

#[test]
fn commands_without_arguments_ignore_text() {
    assert_eq!(parse_text(BotCommand::Maven, "please"), Invocation::Maven);
}

/// Tests parsing slash options of the docs command.
///
/// Expected: every option applied, response visible to everyone
#[test]
fn parses_docs_slash_options() {
    let data = create_test_command_data(
        "docs",
        json!([
            string_option("search-term", "DiscordApi"),
            string_option("search-type", "classes"),
            boolean_option("include-all", true),
            boolean_option("show-to-everyone", true),
        ]),
    );

    let parsed = parse_options(BotCommand::Docs, &data.options());

    assert_eq!(
        parsed.invocation,
        Invocation::Docs(DocsQuery {
            search_term: Some("DiscordApi".to_string()),
            search_type: DocSearchType::Classes,
            include_all: true,
        })
    );
    assert!(parsed.show_to_everyone);
}

/// Tests the defaults of omitted wiki slash options.
///
/// Expected: keywords and titles searched, contents not, response only for the invoker
#[test]
fn wiki_slash_options_default() {
    let data = create_test_command_data(
        "wiki",
        json!([
            string_option("search-term", "  "),
            boolean_option("search-in-contents", true),
        ]),
    );

    let parsed = parse_options(BotCommand::Wiki, &data.options());

    assert_eq!(
        parsed.invocation,
        Invocation::Wiki(WikiQuery {
            search_term: None,
            criteria: WikiSearchCriteria {
                keywords: true,
                titles: true,
                contents: true,
            },
        })
    );
    assert!(!parsed.show_to_everyone);
}
