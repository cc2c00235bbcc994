//! Remote data layer.
//!
//! This module contains the fetchers that retrieve the bot's remote resources: the
//! latest release version, the JavaDoc search indexes and the wiki page feed. Each
//! fetcher owns a clone of the shared HTTP client and decodes its response into
//! domain models; none of them persist anything across requests except the version
//! resolver's last known version.

pub mod http;
pub mod javadoc;
pub mod version;
pub mod wiki;

#[cfg(test)]
mod test;
