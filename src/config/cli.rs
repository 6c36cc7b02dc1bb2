//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// slackhook: post a message to a Slack incoming webhook
///
/// Without a webhook URL the message is silently dropped, so scripts can
/// call this unconditionally. Use `slack://mock` to exercise the full
/// request path without contacting Slack.
#[derive(Debug, Parser)]
#[command(name = "slackhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Message text
    pub text: Option<String>,

    /// Webhook URL, or `slack://mock` for mock mode
    #[arg(long, env = defaults::URL_ENV, hide_env_values = true)]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Text shown above the attachment
    #[arg(long)]
    pub pretext: Option<String>,

    /// Plain-text summary for clients that cannot render attachments
    #[arg(long)]
    pub fallback: Option<String>,

    /// Attachment color: good, warning, danger, or a hex value
    #[arg(long)]
    pub color: Option<String>,

    /// Attachment title
    #[arg(long)]
    pub title: Option<String>,

    /// URL the attachment title links to
    #[arg(long = "title-link")]
    pub title_link: Option<String>,

    /// Attachment body text
    #[arg(long = "attachment-text")]
    pub attachment_text: Option<String>,

    /// Attachment footer timestamp in seconds since the Unix epoch
    #[arg(long)]
    pub ts: Option<i64>,

    /// Attachment field in 'Title=Value' format (can be specified multiple times)
    #[arg(long = "field", value_name = "TITLE=VALUE")]
    pub fields: Vec<String>,

    /// Render attachment fields side by side
    #[arg(long = "short-fields")]
    pub short_fields: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum response bytes to read before closing out a post
    #[arg(long = "drain-limit", value_name = "BYTES")]
    pub drain_limit: Option<usize>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slackhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "slackhook.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if any attachment option was given.
    #[must_use]
    pub fn has_attachment(&self) -> bool {
        self.pretext.is_some()
            || self.fallback.is_some()
            || self.color.is_some()
            || self.title.is_some()
            || self.title_link.is_some()
            || self.attachment_text.is_some()
            || self.ts.is_some()
            || !self.fields.is_empty()
    }
}
