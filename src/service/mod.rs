//! Service layer for command logic.
//!
//! This module contains the service layer of the bot, which sits between the Discord
//! adapter (bot) layer and the data (fetcher) layer. Services are responsible for:
//!
//! - **Orchestration**: Resolving the version, fetching indexes and feeds, searching
//! - **Rendering**: Turning results into size-bounded display blocks
//! - **Error Boundary**: Converting every failure into a user-visible error block
//!
//! Services never touch serenity types, so every command can be exercised without a
//! gateway connection.

pub mod docs;
pub mod info;
pub mod paginate;
pub mod search;
pub mod wiki;

#[cfg(test)]
mod test;
