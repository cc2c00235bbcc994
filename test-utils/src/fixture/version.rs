//! Latest-version document fixtures.

/// Creates the JSON version document, e.g. `{"number": "3.8.0 (#42)"}`.
///
/// # Arguments
/// - `number` - Value of the `number` field, build suffix included
pub fn json(number: &str) -> String {
    serde_json::json!({ "number": number }).to_string()
}

/// Creates a Maven metadata document whose `<latest>` element holds `latest`.
///
/// # Arguments
/// - `latest` - Text of the `<latest>` element
pub fn maven_metadata(latest: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.javacord</groupId>
  <artifactId>javacord</artifactId>
  <versioning>
    <latest>{latest}</latest>
    <release>{latest}</release>
    <versions>
      <version>3.7.0</version>
      <version>{latest}</version>
    </versions>
    <lastUpdated>20230101000000</lastUpdated>
  </versioning>
</metadata>
"#
    )
}
