//! Helpers for removing responses after the fact.
//!
//! Text command responses carry an invisible tracker at the start of their footer
//! that encodes the id of the invocation message. When that message is deleted the
//! response is found by its tracker and deleted as well. Slash command responses
//! have no invocation message, so the bot reacts to them with a wastebasket that
//! anyone can click to delete the response.

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use serenity::all::ReactionType;

use crate::model::display::DisplayBlock;

/// Emoji the bot reacts with on slash command responses.
pub const WASTEBASKET: &str = "\u{1F5D1}\u{FE0F}";

/// Discord's limit for the combined text of one embed.
const EMBED_TOTAL_LIMIT: usize = 6000;

const TRACKER_NOTICE: &str = "If you delete your invocation message, this response will be deleted.";

/// Encodes a message id as invisible characters.
///
/// The id is written in binary with `0` as U+200B and `1` as U+200C and terminated
/// by U+200D, so it never renders but stays unique per id.
///
/// # Arguments
/// - `message_id` - Id of the invocation message
pub fn response_tracker(message_id: u64) -> String {
    let mut tracker: String = format!("{:b}", message_id)
        .chars()
        .map(|digit| if digit == '0' { '\u{200B}' } else { '\u{200C}' })
        .collect();
    tracker.push('\u{200D}');
    tracker
}

/// Sets the tracking footer of a text command response.
///
/// The footer is skipped if it would push the block past Discord's embed limit; the
/// response is then simply not cleaned up.
///
/// # Arguments
/// - `block` - Response to a text command
/// - `message_id` - Id of the invocation message
///
/// # Returns
/// - `DisplayBlock` - The block with the tracker footer, or unchanged if it does not fit
pub fn insert_response_tracker(block: DisplayBlock, message_id: u64) -> DisplayBlock {
    let footer = format!("{}{}", response_tracker(message_id), TRACKER_NOTICE);
    let existing = block.footer.as_deref().map_or(0, |text| text.chars().count());

    if block.char_count() - existing + footer.chars().count() > EMBED_TOTAL_LIMIT {
        tracing::debug!(
            "Response to message {} too large for the tracker footer",
            message_id
        );
        return block;
    }

    block.footer(footer)
}

/// Checks whether a footer belongs to the response of a message.
///
/// # Arguments
/// - `footer` - Footer text of the first embed of a candidate message
/// - `message_id` - Id of the deleted invocation message
pub fn is_response_to(footer: Option<&str>, message_id: u64) -> bool {
    footer.is_some_and(|text| text.starts_with(&response_tracker(message_id)))
}

/// Checks whether a candidate response was posted within an hour of its invocation.
///
/// # Arguments
/// - `deleted_at` - Creation time of the deleted invocation message
/// - `candidate_at` - Creation time of the candidate response
pub fn within_cleanup_window(deleted_at: DateTime<Utc>, candidate_at: DateTime<Utc>) -> bool {
    candidate_at <= deleted_at + Duration::hours(1)
}

pub fn wastebasket() -> ReactionType {
    ReactionType::Unicode(WASTEBASKET.to_string())
}

/// Checks whether a reaction is the wastebasket, with or without variation selector.
pub fn is_wastebasket(reaction: &ReactionType) -> bool {
    match reaction {
        ReactionType::Unicode(emoji) => {
            emoji.trim_end_matches('\u{FE0F}') == WASTEBASKET.trim_end_matches('\u{FE0F}')
        }
        _ => false,
    }
}
