//! Data model for provider catalogs and resolved connections.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// VPN transport family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VpnKind {
    /// OpenVPN over TCP or UDP.
    #[default]
    OpenVpn,
    /// WireGuard, always over UDP.
    Wireguard,
}

impl fmt::Display for VpnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenVpn => f.write_str("openvpn"),
            Self::Wireguard => f.write_str("wireguard"),
        }
    }
}

/// Transport protocol for the tunnel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    /// UDP transport.
    #[default]
    Udp,
    /// TCP transport.
    Tcp,
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Udp => f.write_str("udp"),
            Self::Tcp => f.write_str("tcp"),
        }
    }
}

/// A supported VPN provider.
///
/// Per-provider compiled-in defaults (ports, protocol, port-forwarding
/// support) live here, so one shared resolver serves every provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VpnProvider {
    /// Private Internet Access.
    #[default]
    PrivateInternetAccess,
    /// Windscribe.
    Windscribe,
    /// Mullvad.
    Mullvad,
}

impl VpnProvider {
    /// Providers for which automatic port forwarding is available.
    pub const PORT_FORWARDING_PROVIDERS: &'static [Self] = &[Self::PrivateInternetAccess];

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrivateInternetAccess => "private-internet-access",
            Self::Windscribe => "windscribe",
            Self::Mullvad => "mullvad",
        }
    }

    /// Returns true if this provider supports automatic port forwarding.
    #[must_use]
    pub fn supports_port_forwarding(self) -> bool {
        Self::PORT_FORWARDING_PROVIDERS.contains(&self)
    }

    /// Protocol used when the selection does not specify one.
    #[must_use]
    pub const fn default_protocol(self) -> TransportProtocol {
        TransportProtocol::Udp
    }

    /// Compiled-in default port for the given transport family and
    /// protocol. WireGuard ignores the protocol preference since it only
    /// runs over UDP.
    #[must_use]
    pub const fn default_port(self, vpn: VpnKind, protocol: TransportProtocol) -> u16 {
        match self {
            Self::PrivateInternetAccess => match (vpn, protocol) {
                (VpnKind::Wireguard, _) => 1337,
                (VpnKind::OpenVpn, TransportProtocol::Tcp) => 501,
                (VpnKind::OpenVpn, TransportProtocol::Udp) => 1198,
            },
            Self::Windscribe => match (vpn, protocol) {
                (VpnKind::Wireguard, _) => 1194,
                (VpnKind::OpenVpn, TransportProtocol::Tcp) => 443,
                (VpnKind::OpenVpn, TransportProtocol::Udp) => 1194,
            },
            Self::Mullvad => match (vpn, protocol) {
                (VpnKind::Wireguard, _) => 51820,
                (VpnKind::OpenVpn, TransportProtocol::Tcp) => 443,
                (VpnKind::OpenVpn, TransportProtocol::Udp) => 1194,
            },
        }
    }
}

impl fmt::Display for VpnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One server entry in a provider catalog.
///
/// Read-only once loaded. Identity fields depend on the transport family:
/// OpenVPN verifies `cert_name`, WireGuard verifies `wg_pubkey`; at most
/// one is meaningful per connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Country tag.
    #[serde(default)]
    pub country: String,
    /// Region tag.
    #[serde(default)]
    pub region: String,
    /// City tag.
    #[serde(default)]
    pub city: String,
    /// DNS host name of the server.
    pub hostname: String,
    /// Certificate name presented over OpenVPN.
    #[serde(default)]
    pub cert_name: String,
    /// WireGuard public key.
    #[serde(default)]
    pub wg_pubkey: String,
    /// Addresses the server is reachable at. Never empty in well-formed
    /// catalog data.
    pub ips: Vec<IpAddr>,
}

/// The fully resolved endpoint handed to tunnel supervision.
///
/// This is the terminal artifact of the core and the only value exposed
/// across the boundary to the tunnel, firewall and DNS collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    /// VPN transport family.
    pub vpn: VpnKind,
    /// The chosen server address.
    pub ip: IpAddr,
    /// The resolved port.
    pub port: u16,
    /// The resolved transport protocol.
    pub protocol: TransportProtocol,
    /// Certificate host name of the chosen server (OpenVPN identity).
    pub hostname: String,
    /// WireGuard public key of the chosen server.
    pub pubkey: String,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{} ({})",
            self.vpn, self.protocol, self.ip, self.port, self.hostname
        )
    }
}
