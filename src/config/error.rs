//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration front-end operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a TOML configuration fragment.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write a configuration file (for the init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Unknown VPN provider name.
    #[error(
        "Unknown VPN provider '{value}': expected private-internet-access, \
         windscribe or mullvad"
    )]
    InvalidProvider {
        /// The invalid value provided
        value: String,
    },

    /// Unknown VPN transport family name.
    #[error("Unknown VPN type '{value}': expected openvpn or wireguard")]
    InvalidVpnKind {
        /// The invalid value provided
        value: String,
    },

    /// Unknown transport protocol name.
    #[error("Unknown protocol '{value}': expected udp or tcp")]
    InvalidProtocol {
        /// The invalid value provided
        value: String,
    },
}
