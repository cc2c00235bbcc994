use super::*;

/// Tests resolving the version from the JSON document shape.
///
/// Verifies that only the first whitespace-separated token of `number` is kept and
/// that the resolved value is cached.
///
/// Expected: "3.8.0" returned and cached
#[tokio::test]
async fn resolves_first_token_of_json_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/latest.json", fixture::version::json("3.8.0 (#42)"))
        .build()
        .await?;

    let resolver = VersionResolver::new(
        reqwest::Client::new(),
        &test.url("/latest.json"),
        VersionFormat::Json,
    );

    assert_eq!(resolver.resolve_version().await, "3.8.0");
    assert_eq!(resolver.cached_version().await, "3.8.0");

    Ok(())
}

/// Tests resolving the version from Maven metadata.
///
/// Expected: text of the `<latest>` element
#[tokio::test]
async fn resolves_latest_element_of_maven_metadata() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/maven-metadata.xml", fixture::version::maven_metadata("3.8.0"))
        .build()
        .await?;

    let resolver = VersionResolver::new(
        reqwest::Client::new(),
        &test.url("/maven-metadata.xml"),
        VersionFormat::Xml,
    );

    assert_eq!(resolver.resolve_version().await, "3.8.0");

    Ok(())
}

/// Tests the fallback when the version endpoint cannot be reached.
///
/// Expected: previously cached "3.4.1" returned
#[tokio::test]
async fn falls_back_to_cached_version_when_unreachable() -> Result<(), TestError> {
    let url = TestContext::unreachable_url("/latest.json").await?;
    let resolver = VersionResolver::with_cached_version(
        reqwest::Client::new(),
        &url,
        VersionFormat::Json,
        "3.4.1",
    );

    assert_eq!(resolver.resolve_version().await, "3.4.1");
    assert_eq!(resolver.cached_version().await, "3.4.1");

    Ok(())
}

/// Tests the fallback when the endpoint answers with an error status.
///
/// Expected: previously cached version returned
#[tokio::test]
async fn falls_back_to_cached_version_on_error_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status("/latest.json", 500, "oops")
        .build()
        .await?;

    let resolver = VersionResolver::with_cached_version(
        reqwest::Client::new(),
        &test.url("/latest.json"),
        VersionFormat::Json,
        "3.4.1",
    );

    assert_eq!(resolver.resolve_version().await, "3.4.1");

    Ok(())
}

/// Tests that a broken metadata document does not replace the cached version.
///
/// Expected: previously cached "3.4.1" returned and kept
#[tokio::test]
async fn keeps_cached_version_when_metadata_is_malformed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route(
            "/maven-metadata.xml",
            "<metadata><latest>9.9.9</release></metadata>",
        )
        .build()
        .await?;

    let resolver = VersionResolver::with_cached_version(
        reqwest::Client::new(),
        &test.url("/maven-metadata.xml"),
        VersionFormat::Xml,
        "3.4.1",
    );

    assert_eq!(resolver.resolve_version().await, "3.4.1");
    assert_eq!(resolver.cached_version().await, "3.4.1");

    Ok(())
}

/// Tests the fallback when nothing was ever resolved.
///
/// Expected: empty string
#[tokio::test]
async fn returns_empty_version_when_never_resolved() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/latest.json", r#"{"version": "3.8.0"}"#)
        .build()
        .await?;

    let resolver = VersionResolver::new(
        reqwest::Client::new(),
        &test.url("/latest.json"),
        VersionFormat::Json,
    );

    assert_eq!(resolver.resolve_version().await, "");

    Ok(())
}

/// Tests that a later failure keeps the last successful value.
///
/// Expected: first lookup caches "3.8.0", the failing second lookup returns it
#[tokio::test]
async fn keeps_last_successful_version_after_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/latest.json", fixture::version::json("3.8.0"))
        .with_status("/broken.json", 503, "")
        .build()
        .await?;

    let client = reqwest::Client::new();
    let resolver = VersionResolver::new(client, &test.url("/latest.json"), VersionFormat::Json);
    assert_eq!(resolver.resolve_version().await, "3.8.0");

    let broken = resolver.with_url(&test.url("/broken.json"));
    assert_eq!(broken.resolve_version().await, "3.8.0");

    Ok(())
}

#[test]
fn rejects_non_object_json() {
    let result = parse_json_version("[]", "latest.json");
    assert!(matches!(result, Err(FormatError::NotAnObject { .. })));
}

#[test]
fn rejects_blank_json_number() {
    let result = parse_json_version(r#"{"number": "  "}"#, "latest.json");
    assert!(matches!(result, Err(FormatError::MissingVersion { .. })));
}

#[test]
fn rejects_metadata_without_latest_element() {
    let result = parse_xml_version("<metadata><release>1.0</release></metadata>", "metadata");
    assert!(matches!(result, Err(FormatError::MissingVersion { .. })));
}

#[test]
fn takes_first_latest_element_of_complete_document() {
    let result = parse_xml_version(
        "<metadata><latest>3.8.0</latest><latest>1.0</latest></metadata>",
        "metadata",
    );
    assert_eq!(result.ok().as_deref(), Some("3.8.0"));
}

#[test]
fn rejects_malformed_metadata() {
    let result = parse_xml_version("<metadata><latest>1.0</release></metadata>", "metadata");
    assert!(matches!(result, Err(FormatError::InvalidXml { .. })));
}
