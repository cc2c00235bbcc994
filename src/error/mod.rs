//! Error types and user-facing error rendering.
//!
//! This module provides the bot's error hierarchy and the conversion that turns a
//! failed command into a display block. The `AppError` enum is the top-level error
//! type that wraps the domain-specific errors. Every command boundary converts its
//! error with [`AppError::into_display_block`], which logs the failure and never
//! lets it escape into the event loop.

pub mod config;
pub mod fetch;
pub mod format;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    error::{config::ConfigError, fetch::FetchError, format::FormatError},
    model::display::DisplayBlock,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the bot from starting at all.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Network or transport failure while fetching a remote resource.
    ///
    /// Logged as a warning since it usually indicates transient unavailability.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// A remote resource violated its documented shape.
    ///
    /// Logged as an error since it indicates upstream drift rather than a hiccup.
    #[error(transparent)]
    FormatErr(#[from] FormatError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the block shown to the user.
    ///
    /// Logs the error with a severity matching its kind, then renders the generic
    /// "Something went wrong" block carrying the error message.
    ///
    /// # Arguments
    /// - `command` - Name of the command that failed, used as log context
    ///
    /// # Returns
    /// - `DisplayBlock` - Error block ready to be sent
    pub fn into_display_block(self, command: &str) -> DisplayBlock {
        match &self {
            Self::FetchErr(err) => {
                tracing::warn!("Fetch failed while handling {} command: {}", command, err)
            }
            err => tracing::error!("Exception while handling {} command: {}", command, err),
        }

        DisplayBlock::error(&self.to_string())
    }
}
