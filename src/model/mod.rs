//! Domain models and parameter types.
//!
//! This module contains the records parsed from the remote documentation sources,
//! the query types built from command arguments, and the platform-neutral display
//! block every command renders into. Records are rebuilt from a live fetch for each
//! request and never persisted.

pub mod display;
pub mod javadoc;
pub mod search;
pub mod wiki;
