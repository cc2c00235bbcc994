use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_JAVADOC_STATIC_URL: &str = "https://javadoc.io/static/org.javacord";
const DEFAULT_JAVADOC_LINK_URL: &str = "https://javadoc.io/doc/org.javacord";
const DEFAULT_WIKI_API_URL: &str = "https://javacord.org/api/wiki.json";
const DEFAULT_WIKI_BASE_URL: &str = "https://javacord.org";
const DEFAULT_LATEST_VERSION_URL: &str =
    "https://repo1.maven.org/maven2/org/javacord/javacord/maven-metadata.xml";

/// The "Discord API" server.
const DEFAULT_RESTRICTED_GUILD_ID: u64 = 81384788765712384;

/// The "#java_javacord" channel on the "Discord API" server.
const DEFAULT_RESTRICTED_CHANNEL_ID: u64 = 381889796785831936;

/// Shape of the document served by the latest-version endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFormat {
    /// `{"number": "x.y.z (#n)"}`
    Json,
    /// Maven metadata containing `<latest>x.y.z</latest>`
    Xml,
}

/// Guild in which text commands are only answered in one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRestriction {
    pub guild_id: u64,
    pub channel_id: u64,
}

impl ChannelRestriction {
    /// Checks whether a text command may be answered in a channel.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was sent in, `None` for direct messages
    /// - `channel_id` - Channel the command was sent in
    ///
    /// # Returns
    /// - `true` outside the restricted guild, or in its designated channel
    pub fn allows(&self, guild_id: Option<u64>, channel_id: u64) -> bool {
        match guild_id {
            Some(guild_id) if guild_id == self.guild_id => channel_id == self.channel_id,
            _ => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,

    pub javadoc_static_url: String,
    pub javadoc_link_url: String,

    pub wiki_api_url: String,
    pub wiki_base_url: String,

    pub latest_version_url: String,
    pub latest_version_format: VersionFormat,

    pub restriction: ChannelRestriction,
    pub icon_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            javadoc_static_url: url_var("JAVADOC_STATIC_URL", DEFAULT_JAVADOC_STATIC_URL)?,
            javadoc_link_url: url_var("JAVADOC_LINK_URL", DEFAULT_JAVADOC_LINK_URL)?,
            wiki_api_url: url_var("WIKI_API_URL", DEFAULT_WIKI_API_URL)?,
            wiki_base_url: url_var("WIKI_BASE_URL", DEFAULT_WIKI_BASE_URL)?,
            latest_version_url: url_var("LATEST_VERSION_URL", DEFAULT_LATEST_VERSION_URL)?,
            latest_version_format: version_format_var("LATEST_VERSION_FORMAT")?,
            restriction: ChannelRestriction {
                guild_id: id_var("RESTRICTED_GUILD_ID", DEFAULT_RESTRICTED_GUILD_ID)?,
                channel_id: id_var("RESTRICTED_CHANNEL_ID", DEFAULT_RESTRICTED_CHANNEL_ID)?,
            },
            icon_url: match std::env::var("BOT_ICON_URL") {
                Ok(value) => Some(parse_url("BOT_ICON_URL", value)?),
                Err(_) => None,
            },
        })
    }
}

/// Reads a URL variable, falling back to `default` when unset.
///
/// Trailing slashes are stripped so that paths can be appended uniformly.
fn url_var(name: &str, default: &str) -> Result<String, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
    parse_url(name, value)
}

fn parse_url(name: &str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(_) => Ok(value.trim_end_matches('/').to_string()),
        Err(source) => Err(ConfigError::InvalidUrl {
            name: name.to_string(),
            value,
            source,
        }),
    }
}

fn id_var(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn version_format_var(name: &str) -> Result<VersionFormat, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(VersionFormat::Xml),
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "xml" => Ok(VersionFormat::Xml),
            "json" => Ok(VersionFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            }),
        },
    }
}
