//! Platform-neutral description of a bot response.
//!
//! Services render their results into a [`DisplayBlock`]; only the bot layer knows
//! how to turn one into a Discord embed. Keeping the block free of serenity types
//! lets the pagination logic be tested without a gateway connection.

/// The Javacord brand orange.
pub const BRAND_COLOR: u32 = 0xF3BD1E;

/// Color of error responses.
pub const ERROR_COLOR: u32 = 0xFF0000;

/// A named block of text inside a [`DisplayBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    /// Heading of the field.
    pub name: String,
    /// Body text of the field.
    pub value: String,
    /// Whether the field may be rendered next to its neighbours.
    pub inline: bool,
}

/// A size-bounded response: optional title, link and description plus ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayBlock {
    /// Title of the response.
    pub title: Option<String>,
    /// Link attached to the title.
    pub url: Option<String>,
    /// Main text of the response.
    pub description: Option<String>,
    /// Ordered list of fields.
    pub fields: Vec<DisplayField>,
    /// Accent color.
    pub color: u32,
    /// URL of a thumbnail image.
    pub thumbnail: Option<String>,
    /// Footer text.
    pub footer: Option<String>,
}

impl DisplayBlock {
    /// Creates an empty block in the brand color.
    pub fn new() -> Self {
        Self {
            color: BRAND_COLOR,
            ..Default::default()
        }
    }

    /// Creates the generic error block shown when a command fails.
    ///
    /// # Arguments
    /// - `message` - Message of the underlying failure
    pub fn error(message: &str) -> Self {
        Self {
            color: ERROR_COLOR,
            ..Default::default()
        }
        .title("Error")
        .description(format!("Something went wrong: ```{}```", message))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a non-inline field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_field(name, value, false)
    }

    /// Appends an inline field.
    pub fn inline_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_field(name, value, true)
    }

    fn push_field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(DisplayField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Sets the thumbnail if one is configured.
    pub fn thumbnail(mut self, thumbnail: Option<&str>) -> Self {
        self.thumbnail = thumbnail.map(str::to_string);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Counts the characters Discord includes in its embed size limit.
    ///
    /// Title, description, footer and every field name and value are counted in
    /// Unicode scalar values.
    pub fn char_count(&self) -> usize {
        let optional = [&self.title, &self.description, &self.footer]
            .into_iter()
            .flatten()
            .map(|text| text.chars().count())
            .sum::<usize>();

        optional
            + self
                .fields
                .iter()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_count_includes_fields_and_footer() {
        let block = DisplayBlock::new()
            .title("Title")
            .url("https://javacord.org")
            .field("ab", "cde")
            .footer("ü");

        assert_eq!(block.char_count(), 5 + 2 + 3 + 1);
    }
}
