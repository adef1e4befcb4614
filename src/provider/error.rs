//! Error types for connection resolution.

use thiserror::Error;

use super::model::VpnProvider;

/// Error type for connection resolution failures.
///
/// The two kinds are deliberately distinct so callers can tell "the
/// selection filter was too narrow" apart from "the provider's catalog
/// data is malformed".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The selection criteria matched no server in the catalog.
    #[error("No server in the {provider} catalog matches the selection criteria")]
    NoMatchingServer {
        /// Provider whose catalog was filtered
        provider: VpnProvider,
    },

    /// Servers matched, but none of them exposes an IP address.
    #[error("Servers matched in the {provider} catalog, but none has a reachable IP address")]
    NoReachableAddress {
        /// Provider whose catalog was filtered
        provider: VpnProvider,
    },
}
