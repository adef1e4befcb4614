//! The aggregate settings value produced by the reconciliation pipeline.

use std::fmt;

use super::dns_filter::DnsFilter;
use super::dns_server::DnsServer;
use super::error::SettingsError;
use super::port_forward::PortForward;
use super::public_ip::PublicIp;
use super::reconcile::{Reconcile, ValidationContext};
use super::selection::ServerSelection;
use super::system::System;

/// All gateway settings, one field per settings group.
///
/// Constructed empty (a fragment) or by [`super::reconcile`] (the
/// validated aggregate). After reconciliation it is treated as immutable
/// and may be freely shared for reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// The user's connection intent.
    pub vpn: ServerSelection,
    /// DNS block list building.
    pub dns_filter: DnsFilter,
    /// Recursive DNS resolver process.
    pub dns_server: DnsServer,
    /// Public IP address polling.
    pub public_ip: PublicIp,
    /// Automatic port forwarding.
    pub port_forward: PortForward,
    /// System process identity.
    pub system: System,
}

impl Settings {
    /// Derives the cross-group validation context from the resolved
    /// selection. Only defined after defaults were applied.
    #[must_use]
    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext {
            provider: *self.vpn.provider.get(),
        }
    }
}

fn group<T: Reconcile>(
    name: &'static str,
    value: &T,
    ctx: &ValidationContext,
) -> Result<(), SettingsError> {
    value.validate(ctx).map_err(|source| SettingsError::InvalidGroup {
        group: name,
        source: Box::new(source),
    })
}

impl Reconcile for Settings {
    fn merge_with(&mut self, other: &Self) {
        self.vpn.merge_with(&other.vpn);
        self.dns_filter.merge_with(&other.dns_filter);
        self.dns_server.merge_with(&other.dns_server);
        self.public_ip.merge_with(&other.public_ip);
        self.port_forward.merge_with(&other.port_forward);
        self.system.merge_with(&other.system);
    }

    fn override_with(&mut self, other: &Self) {
        self.vpn.override_with(&other.vpn);
        self.dns_filter.override_with(&other.dns_filter);
        self.dns_server.override_with(&other.dns_server);
        self.public_ip.override_with(&other.public_ip);
        self.port_forward.override_with(&other.port_forward);
        self.system.override_with(&other.system);
    }

    fn set_defaults(&mut self) {
        self.vpn.set_defaults();
        self.dns_filter.set_defaults();
        self.dns_server.set_defaults();
        self.public_ip.set_defaults();
        self.port_forward.set_defaults();
        self.system.set_defaults();
    }

    fn validate(&self, ctx: &ValidationContext) -> Result<(), SettingsError> {
        group("server selection", &self.vpn, ctx)?;
        group("DNS filter", &self.dns_filter, ctx)?;
        group("DNS server", &self.dns_server, ctx)?;
        group("public IP", &self.public_ip, ctx)?;
        group("port forwarding", &self.port_forward, ctx)?;
        group("system", &self.system, ctx)?;
        Ok(())
    }
}

impl fmt::Display for Settings {
    /// One-line summary of the reconciled settings. Only defined after
    /// defaults were applied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let protocol = self
            .vpn
            .protocol
            .as_option()
            .map_or_else(|| "provider default".to_string(), ToString::to_string);
        let port = self
            .vpn
            .port
            .as_option()
            .map_or_else(|| "provider default".to_string(), ToString::to_string);

        write!(
            f,
            "Settings {{ provider: {}, vpn: {}, protocol: {}, port: {}, \
             block malicious/ads/surveillance: {}/{}/{}, \
             public IP period: {:?}, port forwarding: {}, uid/gid: {}/{} }}",
            self.vpn.provider.get(),
            self.vpn.kind.get(),
            protocol,
            port,
            self.dns_filter.block_malicious.get(),
            self.dns_filter.block_ads.get(),
            self.dns_filter.block_surveillance.get(),
            self.public_ip.period.get(),
            self.port_forward.enabled.get(),
            self.system.uid.get(),
            self.system.gid.get(),
        )
    }
}
