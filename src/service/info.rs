//! Static informational responses.
//!
//! Dependency snippets embed the latest release version; everything else is fixed
//! text with links to the community resources.

use crate::{data::version::VersionResolver, model::display::DisplayBlock};

pub const INVITE_URL: &str = "https://discord.gg/javacord";
pub const LIBRARY_REPOSITORY_URL: &str = "https://github.com/Javacord/Javacord";
pub const EXAMPLE_BOT_REPOSITORY_URL: &str = "https://github.com/Javacord/Example-Bot";
pub const BOT_REPOSITORY_URL: &str = "https://github.com/Javacord/Javacord-Bot";

const INTELLIJ_GRADLE_GUIDE: &str = "https://javacord.org/wiki/getting-started/intellij-gradle/";
const INTELLIJ_MAVEN_GUIDE: &str = "https://javacord.org/wiki/getting-started/intellij-maven/";
const ECLIPSE_MAVEN_GUIDE: &str = "https://javacord.org/wiki/getting-started/eclipse-maven/";

/// Usage line of a command shown by the help command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Command name without prefix.
    pub name: String,
    /// What the command does.
    pub description: String,
    /// Argument syntax, if the command takes arguments.
    pub usage: Option<String>,
}

/// Service building the informational command responses.
pub struct InfoService<'a> {
    /// Supplies the version used in dependency snippets
    version_resolver: &'a VersionResolver,
    /// Thumbnail of the link responses
    icon_url: Option<&'a str>,
}

impl<'a> InfoService<'a> {
    /// Creates a new InfoService.
    ///
    /// # Arguments
    /// - `version_resolver` - Latest version lookup
    /// - `icon_url` - Optional thumbnail for link responses
    pub fn new(version_resolver: &'a VersionResolver, icon_url: Option<&'a str>) -> Self {
        Self {
            version_resolver,
            icon_url,
        }
    }

    /// Maven dependency snippet plus setup guides.
    pub async fn maven(&self) -> DisplayBlock {
        let version = self.version_resolver.resolve_version().await;

        DisplayBlock::new()
            .field("Dependency", maven_snippet(&version))
            .field(
                "Setup Guides",
                format!(
                    "• [IntelliJ]({})\n• [Eclipse]({})",
                    INTELLIJ_MAVEN_GUIDE, ECLIPSE_MAVEN_GUIDE
                ),
            )
    }

    /// Gradle dependency snippet plus setup guide.
    pub async fn gradle(&self) -> DisplayBlock {
        let version = self.version_resolver.resolve_version().await;

        DisplayBlock::new()
            .field("Dependency", gradle_snippet(&version))
            .field(
                "Setup Guide",
                format!("• [IntelliJ]({})", INTELLIJ_GRADLE_GUIDE),
            )
    }

    /// Both dependency snippets plus every setup guide.
    pub async fn setup(&self) -> DisplayBlock {
        let version = self.version_resolver.resolve_version().await;

        DisplayBlock::new()
            .field("Gradle Dependency", gradle_snippet(&version))
            .field("Maven Dependency", maven_snippet(&version))
            .field(
                "Setup Guides",
                format!(
                    "• [IntelliJ + Gradle]({}) (recommended)\n• [IntelliJ + Maven]({})\n• [Eclipse + Maven]({})",
                    INTELLIJ_GRADLE_GUIDE, INTELLIJ_MAVEN_GUIDE, ECLIPSE_MAVEN_GUIDE
                ),
            )
    }

    pub fn invite(&self) -> DisplayBlock {
        DisplayBlock::new()
            .thumbnail(self.icon_url)
            .field("Invite Link", INVITE_URL)
    }

    pub fn github(&self) -> DisplayBlock {
        DisplayBlock::new()
            .thumbnail(self.icon_url)
            .field("Javacord", LIBRARY_REPOSITORY_URL)
            .field("Example Bot", EXAMPLE_BOT_REPOSITORY_URL)
            .field("James", BOT_REPOSITORY_URL)
    }

    pub fn example(&self) -> DisplayBlock {
        DisplayBlock::new()
            .thumbnail(self.icon_url)
            .field("Example Bot", EXAMPLE_BOT_REPOSITORY_URL)
    }

    /// Information about the running bot.
    ///
    /// # Arguments
    /// - `bot_name` - Current user name of the bot
    /// - `avatar_url` - Avatar of the bot, shown as thumbnail
    pub fn info(&self, bot_name: &str, avatar_url: Option<&str>) -> DisplayBlock {
        let version = env!("CARGO_PKG_VERSION");

        DisplayBlock::new()
            .title(format!("{} - Official Javacord Bot", bot_name))
            .thumbnail(avatar_url)
            .description("The official bot for the Javacord Server\n\nPowered by serenity")
            .inline_field("GitHub", BOT_REPOSITORY_URL)
            .inline_field(
                "Bot Version",
                format!("[{}]({}/releases/tag/v{})", version, BOT_REPOSITORY_URL, version),
            )
            .inline_field("Library", "[serenity](https://github.com/serenity-rs/serenity)")
    }

    /// Lists every command with its description and usage.
    ///
    /// # Arguments
    /// - `prefix` - Text command prefix
    /// - `entries` - Commands to list, shown sorted by name
    pub fn help(&self, prefix: &str, entries: &[HelpEntry]) -> DisplayBlock {
        let mut entries: Vec<&HelpEntry> = entries.iter().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        entries
            .into_iter()
            .fold(
                DisplayBlock::new().thumbnail(self.icon_url).title("Commands"),
                |block, entry| {
                    let mut body = format!("**Description:** {}", entry.description);
                    if let Some(usage) = &entry.usage {
                        body.push_str(&format!("\n**Usage:** `{}`", usage));
                    }
                    block.field(format!("**__{}{}__**", prefix, entry.name), body)
                },
            )
    }
}

fn maven_snippet(version: &str) -> String {
    format!(
        "```xml\n<dependency>\n    <groupId>org.javacord</groupId>\n    <artifactId>javacord</artifactId>\n    <version>{}</version>\n    <type>pom</type>\n</dependency>\n```",
        version
    )
}

fn gradle_snippet(version: &str) -> String {
    format!(
        "```groovy\nrepositories {{ \n  mavenCentral()\n}}\ndependencies {{ \n  implementation 'org.javacord:javacord:{}'\n}}\n```",
        version
    )
}
