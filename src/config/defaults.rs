//! Default values for configuration options.

use std::time::Duration;

use crate::webhook::DEFAULT_DRAIN_LIMIT;

/// Environment variable consulted when `--url` is not given.
pub const URL_ENV: &str = "SLACK_WEBHOOK_URL";

/// Default request timeout in seconds for the command-line sender.
pub const TIMEOUT_SECS: u64 = 30;

/// Default number of response body bytes drained per post.
pub const DRAIN_LIMIT: usize = DEFAULT_DRAIN_LIMIT;

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
