use super::*;

/// Tests the member search example with one public and one internal match.
///
/// Expected: only the public member, grouped under its class
#[test]
fn excludes_internal_members_by_default() {
    let methods = vec![
        method("org.x", "Foo", "addListener(Consumer)"),
        method("org.x.internal", "internal.Bar", "addListener()"),
    ];

    let groups = search_methods(methods, "addListener", false);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].class_name, "Foo");
    assert_eq!(groups[0].methods.len(), 1);
    assert_eq!(groups[0].methods[0].name, "addListener(Consumer)");
}

/// Tests that include-all keeps members of internal packages.
///
/// Expected: both members, each in its own group
#[test]
fn includes_internal_members_when_requested() {
    let methods = vec![
        method("org.x", "Foo", "addListener(Consumer)"),
        method("org.x.internal", "internal.Bar", "addListener()"),
    ];

    let groups = search_methods(methods, "addListener", true);

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|group| group.methods.len() == 1));
}

/// Tests that the term is matched case-insensitively against the full name.
///
/// Expected: members matched through package and class names as well
#[test]
fn matches_members_by_full_name_ignoring_case() {
    let methods = vec![
        method("org.javacord.api", "DiscordApi", "getYourself()"),
        method("org.javacord.api.entity", "User", "getName()"),
    ];

    let by_class = search_methods(methods.clone(), "DISCORDAPI#", false);
    assert_eq!(by_class.len(), 1);
    assert_eq!(by_class[0].class_name, "DiscordApi");

    let by_package = search_methods(methods, "api.entity", false);
    assert_eq!(by_package.len(), 1);
    assert_eq!(by_package[0].class_name, "User");
}

/// Tests group and member ordering.
///
/// Expected: groups by case-insensitive class name, members by case-insensitive
/// shortened name
#[test]
fn sorts_groups_and_members_ignoring_case() {
    let methods = vec![
        method("org.x", "banana", "b()"),
        method("org.x", "Cherry", "c()"),
        method("org.x", "Apple", "zeta()"),
        method("org.x", "Apple", "Alpha()"),
        method("org.x", "Apple", "beta()"),
    ];

    let groups = search_methods(methods, "org.x", false);

    let classes: Vec<&str> = groups.iter().map(|g| g.class_name.as_str()).collect();
    assert_eq!(classes, vec!["Apple", "banana", "Cherry"]);

    let apple: Vec<&str> = groups[0].methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(apple, vec!["Alpha()", "beta()", "zeta()"]);
}

/// Tests overloads whose parameter lists are elided to the same shortened name.
///
/// Expected: the shorter signature listed first
#[test]
fn lists_shorter_overload_first_when_shortened_names_tie() {
    let longer = "addListener(AServerVoiceChannelMemberJoinListener)";
    let shorter = "addListener(ServerVoiceChannelMemberJoinListener)";
    let methods = vec![
        method("org.x", "Server", shorter),
        method("org.x", "Server", longer),
    ];

    let groups = search_methods(methods, "addListener", false);

    let names: Vec<&str> = groups[0].methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec![shorter, longer]);
    assert!(groups[0]
        .methods
        .iter()
        .all(|m| m.shortened_name() == "addListener(...)"));
}

/// Tests that searching the same snapshot in any input order gives the same output.
///
/// Expected: identical groups for forward and reversed input
#[test]
fn member_search_is_deterministic() {
    let mut methods = vec![
        method("org.x", "Foo", "run()"),
        method("org.y", "foo", "run()"),
        method("org.x", "Foo", "Run()"),
        method("org.x", "Bar", "run(int)"),
    ];

    let forward = search_methods(methods.clone(), "run", false);
    methods.reverse();
    let reversed = search_methods(methods, "run", false);

    assert_eq!(forward, reversed);
}

/// Tests class search ordering.
///
/// Expected: shortest names first, then case-insensitive name, then package
#[test]
fn sorts_classes_by_length_then_name() {
    let classes = vec![
        class("org.javacord.api.entity.channel", "TextChannel"),
        class("org.javacord.api.entity.channel", "Channel"),
        class("org.javacord.api.entity.channel", "ServerTextChannel"),
        class("org.javacord.api.entity.channel", "channelX"),
        class("org.javacord.api.entity.channel", "ChannelA"),
    ];

    let matches = search_classes(classes, "channel", false);

    let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Channel", "ChannelA", "channelX", "TextChannel", "ServerTextChannel"]
    );
}

/// Tests that class search matches names only and filters internal packages.
///
/// Expected: internal class only returned with include-all
#[test]
fn filters_internal_classes_unless_include_all() {
    let classes = vec![
        class("org.javacord.api", "DiscordApi"),
        class("org.javacord.core.internal", "DiscordApiImpl"),
    ];

    assert_eq!(search_classes(classes.clone(), "discordapi", false).len(), 1);
    assert_eq!(search_classes(classes.clone(), "discordapi", true).len(), 2);
    assert!(search_classes(classes, "javacord", true).is_empty());
}

/// Tests the default wiki criteria.
///
/// Expected: keyword and title matches, no content-only match
#[test]
fn default_wiki_criteria_search_keywords_and_titles() {
    let pages = vec![
        page("Gateway Intents", &[], "Intents decide what you receive."),
        page("Lifecycle", &["intents"], "Login and logout."),
        page("Basics", &[], "Enable intents in the portal."),
    ];

    let matches = search_pages(pages, "Intents", WikiSearchCriteria::default());

    let titles: Vec<&str> = matches.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Gateway Intents", "Lifecycle"]);
}

/// Tests that enabled criteria combine with logical OR.
///
/// Expected: content match included once content search is enabled
#[test]
fn wiki_criteria_combine_with_or() {
    let pages = vec![
        page("Gateway Intents", &[], "Intents decide what you receive."),
        page("Basics", &[], "Enable intents in the portal."),
    ];
    let criteria = WikiSearchCriteria {
        keywords: false,
        titles: false,
        contents: true,
    };

    let matches = search_pages(pages.clone(), "intents", criteria);
    assert_eq!(matches.len(), 2);

    let nothing = WikiSearchCriteria {
        keywords: false,
        titles: false,
        contents: false,
    };
    assert!(search_pages(pages, "intents", nothing).is_empty());
}

/// Tests that wiki matches are sorted by title.
///
/// Expected: case-sensitive title order
#[test]
fn sorts_wiki_matches_by_title() {
    let pages = vec![
        page("b page", &["x"], ""),
        page("A page", &["x"], ""),
        page("C page", &["x"], ""),
    ];

    let matches = search_pages(pages, "x", WikiSearchCriteria::default());

    let titles: Vec<&str> = matches.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A page", "C page", "b page"]);
}
