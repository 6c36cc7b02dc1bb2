//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use slackhook::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, bad URL, unreadable config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, non-200 status, cancellation.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Returns a follow-up hint for configuration errors the user can fix directly.
#[must_use]
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::TEXT => {
            Some("Usage: slackhook [OPTIONS] <TEXT>")
        }
        ConfigError::FileRead { .. } => {
            Some("Run 'slackhook init' to generate a configuration template.")
        }
        ConfigError::FileWrite { .. } => {
            Some("Check that the output directory exists and is writable.")
        }
        ConfigError::InvalidUrl { .. } | ConfigError::UnsupportedScheme { .. } => {
            Some("Use an https:// incoming webhook URL, or 'slack://mock' for testing.")
        }
        ConfigError::InvalidField { .. } => {
            Some("Fields take the form --field 'Title=Value'; repeat the flag for more.")
        }
        ConfigError::InvalidDuration { .. } => {
            Some("Pass --timeout (or timeout_secs in the config file) as whole seconds above 0.")
        }
        ConfigError::TomlParse(_) => {
            Some("Keys go under [webhook] (url, timeout_secs, drain_limit) or [message] (color).")
        }
        ConfigError::MissingRequired { .. } => None,
    }
}

/// Prints the hint for `error`, if it has one, below the error line.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
