//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::message::{Attachment, Field, Message};
use crate::webhook::Destination;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Where the message goes; disabled when no URL was configured
    pub destination: Destination,

    /// The message to post
    pub message: Message,

    /// Request timeout
    pub timeout: Duration,

    /// Response bytes drained per post
    pub drain_limit: usize,

    /// Verbose logging
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ destination: {}, timeout: {}s, drain_limit: {}, attachments: {} }}",
            redacted(&self.destination),
            self.timeout.as_secs(),
            self.drain_limit,
            self.message.attachments.len(),
        )
    }
}

/// Webhook paths are credentials; only the origin is safe to log.
fn redacted(destination: &Destination) -> String {
    match destination {
        Destination::Disabled => "disabled".to_string(),
        Destination::Mock => "mock".to_string(),
        Destination::Webhook(url) => format!("{}/…", url.origin().ascii_serialization()),
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (including the `SLACK_WEBHOOK_URL` environment variable)
    /// take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The message text is missing
    /// - The URL is invalid or not http/https
    /// - The timeout is zero
    /// - A field is not in `Title=Value` form
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let destination = Self::resolve_destination(cli, toml)?;
        let message = Self::build_message(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        // Priority: CLI explicit > TOML > default
        let drain_limit = cli
            .drain_limit
            .or_else(|| toml.and_then(|t| t.webhook.drain_limit))
            .unwrap_or(defaults::DRAIN_LIMIT);

        Ok(Self {
            destination,
            message,
            timeout,
            drain_limit,
            verbose: cli.verbose,
        })
    }

    /// Loads configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or validation fails.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_destination(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Destination, ConfigError> {
        cli.url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .map_or(Ok(Destination::Disabled), str::parse)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout_secs));

        if seconds == Some(0) {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(seconds.map_or_else(defaults::timeout, Duration::from_secs))
    }

    fn build_message(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Message, ConfigError> {
        let text = cli
            .text
            .as_deref()
            .ok_or_else(|| ConfigError::missing(field::TEXT, "Pass the message text as an argument"))?;

        let mut message = Message::new(text);
        if cli.has_attachment() {
            message = message.with_attachment(Self::build_attachment(cli, toml, text)?);
        }
        Ok(message)
    }

    fn build_attachment(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        text: &str,
    ) -> Result<Attachment, ConfigError> {
        // Slack requires a fallback; derive one from what is on screen.
        let fallback = cli
            .fallback
            .as_deref()
            .or(cli.title.as_deref())
            .unwrap_or(text);

        let mut attachment = Attachment::new(fallback);
        attachment.pretext.clone_from(&cli.pretext);
        attachment.color = cli
            .color
            .clone()
            .or_else(|| toml.and_then(|t| t.message.color.clone()));
        attachment.title.clone_from(&cli.title);
        attachment.title_link.clone_from(&cli.title_link);
        attachment.text.clone_from(&cli.attachment_text);
        attachment.timestamp = cli.ts;

        for raw in &cli.fields {
            let mut field = parse_field(raw)?;
            field.short = cli.short_fields;
            attachment = attachment.with_field(field);
        }

        Ok(attachment)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_field(s: &str) -> Result<Field, ConfigError> {
    match s.split_once('=') {
        Some((title, value)) if !title.trim().is_empty() => {
            Ok(Field::new(title.trim(), value.trim()))
        }
        _ => Err(ConfigError::InvalidField {
            value: s.to_string(),
        }),
    }
}
