//! Response bodies in the shapes the bot's remote endpoints publish.
//!
//! Fixtures only build strings; serve them through `TestBuilder::with_route` or
//! feed them straight into the parsing functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let body = fixture::javadoc::type_index(&[("org.javacord.api", "DiscordApi")]);
//! assert!(body.starts_with("typeSearchIndex = ["));
//! ```

pub mod javadoc;
pub mod version;
pub mod wiki;
