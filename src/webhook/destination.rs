//! Where a [`WebhookClient`](super::WebhookClient) sends its messages.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::config::ConfigError;

/// Reserved destination string that selects mock mode.
///
/// The `slack` scheme is never accepted for real webhooks, so the
/// sentinel cannot collide with a deliverable URL.
pub const MOCK_SENTINEL: &str = "slack://mock";

/// Target of a webhook client.
///
/// Parsed from a string with [`FromStr`]:
/// - empty or blank: [`Destination::Disabled`]
/// - [`MOCK_SENTINEL`]: [`Destination::Mock`]
/// - anything else must be an absolute `http`/`https` URL
///
/// # Example
///
/// ```
/// use slackhook::webhook::Destination;
///
/// assert_eq!("".parse::<Destination>().unwrap(), Destination::Disabled);
/// assert_eq!("slack://mock".parse::<Destination>().unwrap(), Destination::Mock);
/// assert!("not a url".parse::<Destination>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// Posting is a silent no-op.
    #[default]
    Disabled,
    /// Posting serializes the message but never touches the network.
    Mock,
    /// Posting sends to this incoming-webhook URL.
    Webhook(Url),
}

impl Destination {
    /// Returns true unless the destination is [`Destination::Disabled`].
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }

    /// Returns the webhook URL for real destinations.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        match self {
            Self::Webhook(url) => Some(url),
            Self::Disabled | Self::Mock => None,
        }
    }
}

impl FromStr for Destination {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Disabled);
        }
        if s == MOCK_SENTINEL {
            return Ok(Self::Mock);
        }

        let url = Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
            url: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::try_from(url)
    }
}

impl TryFrom<Url> for Destination {
    type Error = ConfigError;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        match url.scheme() {
            "http" | "https" => Ok(Self::Webhook(url)),
            scheme => Err(ConfigError::UnsupportedScheme {
                url: url.to_string(),
                scheme: scheme.to_string(),
            }),
        }
    }
}

/// Renders the parseable form: empty when disabled, the sentinel in mock
/// mode, otherwise the URL as normalized by [`Url`] (`https://x.com` prints
/// as `https://x.com/`). The output always parses back to an equal value.
impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => Ok(()),
            Self::Mock => f.write_str(MOCK_SENTINEL),
            Self::Webhook(url) => f.write_str(url.as_str()),
        }
    }
}
