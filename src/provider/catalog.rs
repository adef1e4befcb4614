//! The read-only per-provider server table.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::settings::ServerSelection;

use super::error::ResolveError;
use super::model::{Server, VpnProvider};

/// A provider's server catalog: static, deduplicated, loaded once before
/// any resolution call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    /// The provider this catalog belongs to.
    pub provider: VpnProvider,
    /// Every known server for the provider.
    pub servers: Vec<Server>,
}

/// Error type for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("Failed to read catalog file '{}': {source}", path.display())]
    FileRead {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the catalog JSON.
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(content).map_err(CatalogError::from)
    }

    /// Returns every server matching the non-empty filter fields of
    /// `selection`. Fields left unset (or explicitly empty) impose no
    /// constraint; tag matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NoMatchingServer`] when the filter yields
    /// zero servers; an empty result is an error condition here, never a
    /// successful empty sequence.
    pub fn filter_servers(
        &self,
        selection: &ServerSelection,
    ) -> Result<Vec<&Server>, ResolveError> {
        let matched: Vec<&Server> = self
            .servers
            .iter()
            .filter(|server| matches_selection(selection, server))
            .collect();

        if matched.is_empty() {
            return Err(ResolveError::NoMatchingServer {
                provider: self.provider,
            });
        }

        Ok(matched)
    }
}

fn matches_selection(selection: &ServerSelection, server: &Server) -> bool {
    contains_ignore_case(selection.countries.as_deref(), &server.country)
        && contains_ignore_case(selection.regions.as_deref(), &server.region)
        && contains_ignore_case(selection.cities.as_deref(), &server.city)
        && contains_ignore_case(selection.hostnames.as_deref(), &server.hostname)
}

fn contains_ignore_case(filter: Option<&[String]>, value: &str) -> bool {
    match filter {
        None | Some([]) => true,
        Some(wanted) => wanted.iter().any(|w| w.eq_ignore_ascii_case(value)),
    }
}
