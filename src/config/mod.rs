//! Configuration front-end for VPNGate.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration fragment parsing ([`FileFragment`])
//! - Fragment collection for the pipeline ([`FragmentSet`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! The reconciliation pipeline resolves values with the following priority
//! (highest to lowest):
//!
//! 1. **CLI flags** - The authoritative override tier; a flag always wins,
//!    for scalars and sequences alike.
//! 2. **Configuration files** - `--config` files in the order given; merge
//!    is first-write-wins, so the first file to set a field wins and later
//!    files only fill gaps.
//! 3. **Built-in defaults** - Applied once, after all merges and
//!    overrides.
//!
//! Sequence-valued fields (countries, host lists, networks) follow the
//! same rules applied to the sequence as a whole; lists from two files are
//! never concatenated.
//!
//! The front-end only produces fragments; all precedence logic lives in
//! [`crate::settings::reconcile`]. Fragments are independently owned, and
//! the pipeline never mutates a caller-supplied fragment in place.

mod cli;
mod error;
mod file;

#[cfg(test)]
mod file_tests;

use std::path::Path;

use crate::settings::{self, Settings, SettingsError};

pub use cli::{Cli, Command, ProtocolArg, ProviderArg, VpnArg};
pub use error::ConfigError;
pub use file::{FileFragment, default_config_template};

/// Ordered configuration fragments plus the authoritative override tier.
#[derive(Debug, Default)]
pub struct FragmentSet {
    /// Fragments in decreasing priority (first-write-wins merge).
    pub fragments: Vec<Settings>,
    /// The authoritative tier; always wins where it has data.
    pub override_tier: Option<Settings>,
}

impl FragmentSet {
    /// Loads every `--config` file and builds the CLI override fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, parsed, or converted
    /// into a settings fragment.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut fragments = Vec::with_capacity(cli.config.len());
        for path in &cli.config {
            fragments.push(FileFragment::load(path)?.into_settings()?);
        }

        Ok(Self {
            fragments,
            override_tier: Some(cli.override_fragment()),
        })
    }

    /// Runs the reconciliation pipeline over the loaded fragments.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, naming the group and field.
    pub fn reconcile(&self) -> Result<Settings, SettingsError> {
        settings::reconcile(&self.fragments, self.override_tier.as_ref())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
