//! Character-count helpers.
//!
//! Discord measures embed limits in characters, not bytes, so every budget in the
//! bot is counted in Unicode scalar values through these helpers.

/// Returns the number of characters in `value`.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Returns the longest prefix of `value` holding at most `max_chars` characters.
///
/// # Arguments
/// - `value` - Text to cut
/// - `max_chars` - Maximum number of characters to keep
///
/// # Returns
/// - `&str` - Prefix of `value`, or `value` itself if it is short enough
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

/// Returns the number of decimal digits needed to print `value`.
pub fn decimal_digits(value: usize) -> usize {
    value.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(char_len("• ab"), 4);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn truncates_on_character_boundary() {
        assert_eq!(truncate_chars("äöüß", 2), "äö");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn counts_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(12345), 5);
    }
}
