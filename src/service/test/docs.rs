use super::*;

const VERSION_PATH: &str = "/latest.json";

struct DocsFixture {
    test: TestContext,
    version_resolver: VersionResolver,
    doc_fetcher: DocIndexFetcher,
    paginator: EmbedPaginator,
}

impl DocsFixture {
    async fn new(builder: TestBuilder) -> Result<Self, TestError> {
        let test = builder
            .with_route(VERSION_PATH, fixture::version::json("3.8.0 (#1234)"))
            .build()
            .await?;
        let client = reqwest::Client::new();

        Ok(Self {
            version_resolver: VersionResolver::new(
                client.clone(),
                &test.url(VERSION_PATH),
                VersionFormat::Json,
            ),
            doc_fetcher: DocIndexFetcher::new(client, &test.url("/static"), LINK_URL),
            paginator: paginator(),
            test,
        })
    }

    fn service(&self) -> DocsService<'_> {
        DocsService::new(&self.version_resolver, &self.doc_fetcher, &self.paginator)
    }
}

fn query(term: &str, search_type: DocSearchType, include_all: bool) -> DocsQuery {
    DocsQuery {
        search_term: Some(term.to_string()),
        search_type,
        include_all,
    }
}

fn api_indexes(builder: TestBuilder) -> TestBuilder {
    builder.with_javadoc_indexes(
        "api",
        "3.8.0",
        fixture::javadoc::type_index(&[
            ("org.javacord.api", "DiscordApi"),
            ("org.javacord.api.listener", "GloballyAttachableListener"),
        ]),
        fixture::javadoc::member_index(&[
            ("org.javacord.api", "DiscordApi", "addListener(GloballyAttachableListener)"),
            ("org.javacord.api", "DiscordApi", "getYourself()"),
            ("org.javacord.api.internal", "ListenerManager", "addListener()"),
        ]),
    )
}

fn core_indexes(builder: TestBuilder) -> TestBuilder {
    builder.with_javadoc_indexes(
        "core",
        "3.8.0",
        fixture::javadoc::type_index(&[("org.javacord.core", "DiscordApiImpl")]),
        fixture::javadoc::member_index(&[(
            "org.javacord.core",
            "DiscordApiImpl",
            "addListener(Class,GloballyAttachableListener)",
        )]),
    )
}

/// Tests the docs command without a search term.
///
/// Expected: overview block and no remote request
#[tokio::test]
async fn returns_overview_without_search_term() -> Result<(), TestError> {
    let fixture = DocsFixture::new(TestBuilder::new()).await?;

    let block = fixture.service().execute(&DocsQuery::default()).await;

    assert_eq!(block.title.as_deref(), Some("Javacord Docs"));
    assert!(fixture.test.requested_paths().is_empty());

    Ok(())
}

/// Tests a member search against the api module only.
///
/// Verifies that the index of the resolved version is fetched and that internal
/// members are filtered out.
///
/// Expected: one field for DiscordApi linking addListener
#[tokio::test]
async fn searches_members_of_latest_api() -> Result<(), TestError> {
    let fixture = DocsFixture::new(api_indexes(TestBuilder::new())).await?;

    let block = fixture
        .service()
        .execute(&query("addListener", DocSearchType::Members, false))
        .await;

    assert_eq!(block.fields.len(), 1);
    assert_eq!(block.fields[0].name, "DiscordApi");
    assert!(block.fields[0].value.starts_with(
        "• [addListener(GloballyAttachableListener)](https://javadoc.io/doc/org.javacord/javacord-api/latest/org/javacord/api/DiscordApi.html#addListener-GloballyAttachableListener-)"
    ));
    assert!(!fixture
        .test
        .requested_paths()
        .iter()
        .any(|path| path.contains("javacord-core")));

    Ok(())
}

/// Tests a member search with include-all.
///
/// Expected: api, internal and core members, both modules fetched
#[tokio::test]
async fn include_all_searches_core_and_internal_members() -> Result<(), TestError> {
    let fixture = DocsFixture::new(core_indexes(api_indexes(TestBuilder::new()))).await?;

    let block = fixture
        .service()
        .execute(&query("addListener", DocSearchType::Members, true))
        .await;

    let names: Vec<&str> = block.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["DiscordApi", "DiscordApiImpl", "ListenerManager"]);

    let paths = fixture.test.requested_paths();
    assert!(paths.contains(&"/static/javacord-api/3.8.0/member-search-index.js".to_string()));
    assert!(paths.contains(&"/static/javacord-core/3.8.0/member-search-index.js".to_string()));

    Ok(())
}

/// Tests a class search.
///
/// Expected: class list with links to the matching types
#[tokio::test]
async fn searches_classes() -> Result<(), TestError> {
    let fixture = DocsFixture::new(api_indexes(TestBuilder::new())).await?;

    let block = fixture
        .service()
        .execute(&query("discord", DocSearchType::Classes, false))
        .await;

    assert_eq!(block.title.as_deref(), Some("Classes"));
    assert_eq!(
        block.description.as_deref(),
        Some("[DiscordApi](https://javadoc.io/doc/org.javacord/javacord-api/latest/org/javacord/api/DiscordApi.html)")
    );

    Ok(())
}

/// Tests a search without matches.
///
/// Expected: "no matching methods" block
#[tokio::test]
async fn reports_no_matching_methods() -> Result<(), TestError> {
    let fixture = DocsFixture::new(api_indexes(TestBuilder::new())).await?;

    let block = fixture
        .service()
        .execute(&query("doesNotExist", DocSearchType::Members, false))
        .await;

    assert_eq!(block.description.as_deref(), Some("No matching methods found!"));

    Ok(())
}

/// Tests that a missing index is rendered as an error block.
///
/// Expected: error block carrying the failure message
#[tokio::test]
async fn renders_fetch_failure_as_error_block() -> Result<(), TestError> {
    let fixture = DocsFixture::new(TestBuilder::new()).await?;

    let block = fixture
        .service()
        .execute(&query("addListener", DocSearchType::Members, false))
        .await;

    assert_eq!(block.title.as_deref(), Some("Error"));
    assert_eq!(block.color, ERROR_COLOR);
    assert!(block
        .description
        .unwrap()
        .starts_with("Something went wrong: ```"));

    Ok(())
}

/// Tests a search while the version was never resolved.
///
/// Expected: error block, no index request
#[tokio::test]
async fn renders_unknown_version_as_error_block() -> Result<(), TestError> {
    let test = api_indexes(TestBuilder::new()).build().await?;
    let client = reqwest::Client::new();
    let version_resolver = VersionResolver::new(
        client.clone(),
        &TestContext::unreachable_url(VERSION_PATH).await?,
        VersionFormat::Json,
    );
    let doc_fetcher = DocIndexFetcher::new(client, &test.url("/static"), LINK_URL);
    let paginator = paginator();

    let block = DocsService::new(&version_resolver, &doc_fetcher, &paginator)
        .execute(&query("addListener", DocSearchType::Members, false))
        .await;

    assert_eq!(block.title.as_deref(), Some("Error"));
    assert!(test.requested_paths().is_empty());

    Ok(())
}
