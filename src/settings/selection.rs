//! The user's connection intent.

use crate::provider::{TransportProtocol, VpnKind, VpnProvider};

use super::error::SettingsError;
use super::optional::{self, Optional};
use super::reconcile::{Reconcile, ValidationContext};

/// Selection criteria describing the desired VPN endpoint.
///
/// Immutable once reconciled; the connection resolver reads it together
/// with the provider catalog to produce one concrete endpoint. Fields left
/// unset impose no constraint on server filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSelection {
    /// Target VPN provider.
    pub provider: Optional<VpnProvider>,
    /// VPN transport family.
    pub kind: Optional<VpnKind>,
    /// Transport protocol preference. Unset means the provider default.
    pub protocol: Optional<TransportProtocol>,
    /// Target port preference. Unset means the provider default for the
    /// resolved transport family and protocol.
    pub port: Optional<u16>,
    /// Country filter.
    pub countries: Option<Vec<String>>,
    /// Region filter.
    pub regions: Option<Vec<String>>,
    /// City filter.
    pub cities: Option<Vec<String>>,
    /// Server host name filter.
    pub hostnames: Option<Vec<String>>,
}

impl Reconcile for ServerSelection {
    fn merge_with(&mut self, other: &Self) {
        self.provider.merge_with(&other.provider);
        self.kind.merge_with(&other.kind);
        self.protocol.merge_with(&other.protocol);
        self.port.merge_with(&other.port);
        optional::merge_seq(&mut self.countries, &other.countries);
        optional::merge_seq(&mut self.regions, &other.regions);
        optional::merge_seq(&mut self.cities, &other.cities);
        optional::merge_seq(&mut self.hostnames, &other.hostnames);
    }

    fn override_with(&mut self, other: &Self) {
        self.provider.override_with(&other.provider);
        self.kind.override_with(&other.kind);
        self.protocol.override_with(&other.protocol);
        self.port.override_with(&other.port);
        optional::override_seq(&mut self.countries, &other.countries);
        optional::override_seq(&mut self.regions, &other.regions);
        optional::override_seq(&mut self.cities, &other.cities);
        optional::override_seq(&mut self.hostnames, &other.hostnames);
    }

    fn set_defaults(&mut self) {
        self.provider.default_to(VpnProvider::default());
        self.kind.default_to(VpnKind::default());
        // protocol and port intentionally stay unset: unset means "use the
        // provider default", resolved at connection time.
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), SettingsError> {
        if self.port.as_option().is_some_and(|port| *port == 0) {
            return Err(SettingsError::PortZero);
        }

        Ok(())
    }
}
