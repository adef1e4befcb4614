//! Settings reconciliation for the VPN gateway.
//!
//! This module provides:
//! - The present/absent value model ([`Optional`] and sequence helpers)
//! - One settings group per configuration domain ([`DnsFilter`],
//!   [`DnsServer`], [`PublicIp`], [`PortForward`], [`System`],
//!   [`ServerSelection`])
//! - The aggregate [`Settings`] value and the [`reconcile`] pipeline driver
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **The override tier** - The authoritative fragment (CLI flags);
//!    last-write-wins for every field it sets.
//! 2. **Ordered fragments** - Configuration files in the order supplied;
//!    merge is first-write-wins, so later fragments only fill gaps left by
//!    earlier ones.
//! 3. **Built-in defaults** - Applied exactly once, after all merges and
//!    overrides, so a default never masks an explicitly supplied value.
//!
//! # Sequence Semantics
//!
//! Sequence fields (host lists, address lists, CIDR prefixes) are merged
//! first-source-wins on the whole sequence, **not** as a union. `None`
//! means "no preference supplied"; an empty, non-`None` sequence means
//! "explicitly cleared".
//!
//! # Lifecycle
//!
//! A group is constructed empty or from a partially-filled source, merged
//! and overridden zero or more times, defaulted exactly once, then
//! validated. After validation it is treated as immutable and may be
//! freely shared for reads. Reading an unset mandatory field before
//! defaults were applied is a programming error and panics.

mod dns_filter;
mod dns_server;
mod error;
mod optional;
mod port_forward;
mod public_ip;
mod reconcile;
mod selection;
#[allow(clippy::module_inception)]
mod settings;
mod system;

#[cfg(test)]
mod dns_server_tests;
#[cfg(test)]
mod selection_tests;

pub use dns_filter::DnsFilter;
pub use dns_server::{DnsServer, Upstream};
pub use error::SettingsError;
pub use optional::{
    Optional, default_str, merge_seq, merge_str, override_seq, override_str,
};
pub use port_forward::PortForward;
pub use public_ip::PublicIp;
pub use reconcile::{Reconcile, ValidationContext, reconcile};
pub use selection::ServerSelection;
pub use settings::Settings;
pub use system::System;
