//! Provider catalogs and connection resolution.
//!
//! This module provides:
//! - The provider data model ([`VpnProvider`], [`VpnKind`],
//!   [`TransportProtocol`], [`Server`], [`Connection`])
//! - The read-only per-provider server table ([`Catalog`])
//! - The injectable random source ([`Picker`], [`UniformPicker`])
//! - The connection resolver ([`resolve`])
//!
//! The core performs no network or disk access of its own: catalogs are
//! supplied already deduplicated by the loader collaborator, and the
//! resolved [`Connection`] is handed to tunnel supervision as an opaque,
//! read-only value.

mod catalog;
mod error;
mod model;
mod pick;
mod resolve;

#[cfg(test)]
mod pick_tests;
#[cfg(test)]
mod resolve_tests;

pub use catalog::{Catalog, CatalogError};
pub use error::ResolveError;
pub use model::{Connection, Server, TransportProtocol, VpnKind, VpnProvider};
pub use pick::{Picker, UniformPicker};
pub use resolve::resolve;
