//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message defaults
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL or `slack://mock`
    pub url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Maximum response bytes drained per post
    pub drain_limit: Option<usize>,
}

/// Defaults applied to the attachment when the CLI does not set them.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Attachment color
    pub color: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# slackhook configuration file

[webhook]
# Incoming webhook URL. Leave unset to disable posting entirely,
# or use "slack://mock" to go through the motions without contacting Slack.
# The SLACK_WEBHOOK_URL environment variable and --url take precedence.
# url = "https://hooks.slack.com/services/T000/B000/XXXX"

# Request timeout in seconds (default: 30)
# timeout_secs = 30

# Maximum response bytes read before a post completes (default: 655360)
# drain_limit = 655360

[message]
# Attachment color used when --color is not given
# color = "good"
"#
    .to_string()
}
