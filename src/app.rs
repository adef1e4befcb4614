//! Application startup and utilities.
//!
//! Exit codes, tracing setup, and error hints supporting the main entry
//! point.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use vpngate::config::ConfigError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid fragments, failed
    /// validation, unreadable files.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - resolution failure, signal handler
    /// installation failure.
    ///
    /// Note: a function rather than a constant because `ExitCode::from()`
    /// is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if matches!(error, ConfigError::FileRead { .. }) {
        eprintln!("\nRun 'vpngate init' to generate a configuration template.");
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
        .init();
}
