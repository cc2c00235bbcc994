//! Javacord Bot Test Utils
//!
//! Provides shared testing utilities for the bot's fetchers, services and command
//! adapters. The bot talks to three remote HTTP endpoints (version metadata, JavaDoc
//! search indexes and the wiki feed), so this crate offers a builder for a local
//! HTTP server answering with canned responses, fixtures in the exact shapes those
//! endpoints publish, and factories for Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder registering canned routes
//! - **TestContext**: Running server plus helpers to build URLs pointing at it
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: Response bodies for the remote endpoints
//! - **serenity**: Factories for Serenity structs built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_wiki_fetch() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_route("/api/wiki.json", fixture::wiki::feed(&[]))
//!         .build()
//!         .await?;
//!
//!     let url = test.url("/api/wiki.json");
//!     // Point a fetcher at `url`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
