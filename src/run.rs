//! Application execution logic.
//!
//! Builds the webhook client from validated config and posts the message
//! once, cancelling the request if the user interrupts.

use thiserror::Error;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use slackhook::config::ValidatedConfig;
use slackhook::webhook::{PostError, ReqwestClient, TracingLogger, WebhookClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The post itself failed.
    #[error(transparent)]
    Post(#[from] PostError),
}

/// Application client type: reqwest transport, tracing-backed post events.
pub type AppClient = WebhookClient<ReqwestClient, TracingLogger>;

/// Builds the webhook client described by the config.
///
/// # Errors
///
/// Returns [`RunError::ClientBuild`] if the TLS backend cannot be initialized.
pub fn build_client(config: &ValidatedConfig) -> Result<AppClient, RunError> {
    let http = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(RunError::ClientBuild)?;

    Ok(
        WebhookClient::with_transport(config.destination.clone(), ReqwestClient::from_client(http))
            .with_logger(TracingLogger)
            .with_drain_limit(config.drain_limit),
    )
}

/// Posts the configured message.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the post fails,
/// including when it is interrupted by Ctrl+C.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = build_client(&config)?;

    if !client.is_enabled() {
        tracing::warn!("No webhook URL configured; message not sent");
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let watcher = tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Interrupted, cancelling post");
        trigger.cancel();
    });

    let result = client.post_with_cancel(&cancel, &config.message).await;
    watcher.abort();
    result?;

    if client.is_mock() {
        tracing::info!("Message accepted by mock transport");
    } else {
        tracing::info!("Message posted");
    }
    Ok(())
}

/// Returns a future that completes when Ctrl+C is received.
///
/// Never completes if the handler cannot be installed.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
}
