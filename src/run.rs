//! Application execution: publish reconciled settings, reload on SIGHUP.
//!
//! The reconciled [`Settings`] value is published whole through a watch
//! channel. A hot reload re-runs the entire pipeline from the original
//! fragment sources and swaps in the new value as one unit, so readers
//! never observe a partially-reconciled aggregate; on failure the
//! previous value stays published.

use std::sync::Arc;

use thiserror::Error;
use tokio::signal;
use tokio::sync::watch;

use vpngate::config::{Cli, ConfigError, FragmentSet};
use vpngate::settings::{Settings, SettingsError};

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to install the shutdown signal handler.
    #[error("Failed to install signal handler: {0}")]
    SignalInstall(#[source] std::io::Error),
}

/// Error type for a failed hot reload.
#[derive(Debug, Error)]
enum ReloadError {
    /// Fragment loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reconciliation failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Runs until shutdown, re-reconciling on SIGHUP (Unix only).
///
/// This is where the firewall, DNS and tunnel collaborators would
/// subscribe to the published settings; the gateway core ends at the
/// channel.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
pub async fn execute(cli: &Cli, initial: Settings) -> Result<(), RunError> {
    let (publisher, subscriber) = watch::channel(Arc::new(initial));

    wait_for_shutdown(cli, &publisher).await?;

    drop(subscriber);
    Ok(())
}

fn reload(cli: &Cli) -> Result<Settings, ReloadError> {
    let fragments = FragmentSet::load(cli)?;
    Ok(fragments.reconcile()?)
}

#[cfg(unix)]
async fn wait_for_shutdown(
    cli: &Cli,
    publisher: &watch::Sender<Arc<Settings>>,
) -> Result<(), RunError> {
    let mut hangup = signal::unix::signal(signal::unix::SignalKind::hangup())
        .map_err(RunError::SignalInstall)?;

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutting down");
                return Ok(());
            }
            _ = hangup.recv() => match reload(cli) {
                Ok(settings) => {
                    tracing::info!("Reloaded: {settings}");
                    publisher.send_replace(Arc::new(settings));
                }
                Err(e) => {
                    tracing::error!("Reload failed, keeping previous settings: {e}");
                }
            },
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown(
    _cli: &Cli,
    _publisher: &watch::Sender<Arc<Settings>>,
) -> Result<(), RunError> {
    signal::ctrl_c().await.map_err(RunError::SignalInstall)?;
    tracing::info!("Shutting down");
    Ok(())
}
