//! Error types for settings validation.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::provider::VpnProvider;

/// Error type for settings validation failures.
///
/// Every variant carries the offending field and value; values are never
/// silently clamped or corrected.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A group failed validation during reconciliation.
    #[error("Invalid {group} settings: {source}")]
    InvalidGroup {
        /// Name of the settings group
        group: &'static str,
        /// The underlying field error
        #[source]
        source: Box<SettingsError>,
    },

    /// An allow-listed host fails host name syntax rules.
    #[error("Allowed host '{host}' is not a valid host name")]
    AllowedHostNotValid {
        /// The rejected host entry
        host: String,
    },

    /// A block-listed host fails host name syntax rules.
    #[error("Blocked host '{host}' is not a valid host name")]
    BlockedHostNotValid {
        /// The rejected host entry
        host: String,
    },

    /// A DNS upstream name does not parse to a known upstream.
    #[error("Unknown DNS upstream '{name}': expected cloudflare, google or quad9")]
    UnknownUpstream {
        /// The unrecognized upstream name
        name: String,
    },

    /// No DNS upstream is configured.
    #[error("No DNS upstream is configured")]
    NoUpstream,

    /// A numeric level field is outside its inclusive range.
    #[error("{field} is {value}, must be between 0 and {max}")]
    LevelOutOfRange {
        /// Name of the field
        field: &'static str,
        /// The out-of-range value
        value: u8,
        /// Inclusive upper bound
        max: u8,
    },

    /// A positive public IP fetch period is below the minimum.
    #[error(
        "Public IP fetch period of {period:?} is below the {min:?} minimum \
         (use 0 to disable periodic fetching)"
    )]
    PeriodBelowMinimum {
        /// The rejected period
        period: Duration,
        /// Minimum accepted positive period
        min: Duration,
    },

    /// A non-empty path field is not absolute.
    #[error("{field} path '{}' must be absolute", path.display())]
    PathNotAbsolute {
        /// Name of the field
        field: &'static str,
        /// The rejected path
        path: PathBuf,
    },

    /// Port forwarding is enabled for a provider that does not support it.
    #[error(
        "Port forwarding is enabled for provider {provider}, \
         but it is only available for {supported}"
    )]
    PortForwardingNotSupported {
        /// The selected provider
        provider: VpnProvider,
        /// Comma-separated list of supporting providers
        supported: String,
    },

    /// The custom target port is zero.
    #[error("Custom target port 0 is not a valid port")]
    PortZero,
}
