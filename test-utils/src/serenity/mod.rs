//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating Serenity structs for testing
//! purposes. The factories create valid objects by deserializing JSON, simulating
//! the payloads Discord's gateway delivers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serde_json::json;
//! use test_utils::serenity::create_test_command_data;
//!
//! let data = create_test_command_data(
//!     "docs",
//!     json!([{ "name": "search-term", "type": 3, "value": "send" }]),
//! );
//! let options = data.options();
//! ```
//!
//! # Available Factories
//!
//! - `command::create_test_command_data` - Create Serenity CommandData objects

pub mod command;

pub use command::create_test_command_data;
