//! Test factory for creating Serenity CommandData objects.

use serde_json::Value;
use serenity::all::CommandData;

/// Option type of string options in interaction payloads.
pub const STRING_OPTION: u8 = 3;

/// Option type of boolean options in interaction payloads.
pub const BOOLEAN_OPTION: u8 = 5;

/// Creates the data of a slash command interaction.
///
/// Creates a CommandData object by deserializing JSON with the provided values.
/// The command is a chat input command with a fixed id and no resolved entities.
///
/// # Arguments
/// - `name` - Name of the invoked command
/// - `options` - JSON array of `{ "name", "type", "value" }` option objects
///
/// # Returns
/// - `CommandData` - A valid Serenity CommandData struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into CommandData (indicates invalid test data)
pub fn create_test_command_data(name: &str, options: Value) -> CommandData {
    serde_json::from_value(serde_json::json!({
        "id": "1000000000000000001",
        "name": name,
        "type": 1,
        "options": options,
    }))
    .expect("Failed to create test command data - invalid JSON structure")
}

/// Builds a string option for [`create_test_command_data`].
pub fn string_option(name: &str, value: &str) -> Value {
    serde_json::json!({ "name": name, "type": STRING_OPTION, "value": value })
}

/// Builds a boolean option for [`create_test_command_data`].
pub fn boolean_option(name: &str, value: bool) -> Value {
    serde_json::json!({ "name": name, "type": BOOLEAN_OPTION, "value": value })
}
