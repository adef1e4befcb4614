//! TOML configuration fragment parsing.
//!
//! Defines the structure of configuration files with serde. All fields
//! are optional: a file is a partial fragment merged by the pipeline.

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ipnet::IpNet;
use serde::Deserialize;

use crate::provider::{TransportProtocol, VpnKind, VpnProvider};
use crate::settings::{Optional, Settings};

use super::ConfigError;

/// Root structure of a TOML configuration fragment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileFragment {
    /// VPN selection section
    #[serde(default)]
    pub vpn: VpnSection,

    /// DNS configuration section
    #[serde(default)]
    pub dns: DnsSection,

    /// Public IP polling section
    #[serde(default)]
    pub public_ip: PublicIpSection,

    /// Port forwarding section
    #[serde(default)]
    pub port_forwarding: PortForwardingSection,

    /// System identity section
    #[serde(default)]
    pub system: SystemSection,
}

/// VPN selection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpnSection {
    /// VPN provider name
    pub provider: Option<String>,

    /// VPN transport family: "openvpn" or "wireguard"
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Transport protocol: "udp" or "tcp"
    pub protocol: Option<String>,

    /// Target server port
    pub port: Option<u16>,

    /// Country filter
    pub countries: Option<Vec<String>>,

    /// Region filter
    pub regions: Option<Vec<String>>,

    /// City filter
    pub cities: Option<Vec<String>>,

    /// Server host name filter
    pub hostnames: Option<Vec<String>>,
}

/// DNS configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsSection {
    /// Block list building subsection
    #[serde(default)]
    pub filter: DnsFilterSection,

    /// Recursive resolver subsection
    #[serde(default)]
    pub server: DnsServerSection,
}

/// DNS block list subsection.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsFilterSection {
    /// Block known malicious domains
    pub block_malicious: Option<bool>,

    /// Block advertising domains
    pub block_ads: Option<bool>,

    /// Block surveillance domains
    pub block_surveillance: Option<bool>,

    /// Hosts exempt from every block list
    pub allowed_hosts: Option<Vec<String>>,

    /// Extra hosts to block
    pub blocked_hosts: Option<Vec<String>>,

    /// Extra IP addresses to block
    pub blocked_ips: Option<Vec<IpAddr>>,

    /// Extra IP networks to block (CIDR)
    pub blocked_prefixes: Option<Vec<IpNet>>,
}

/// Recursive resolver subsection.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsServerSection {
    /// Upstream resolver names
    pub upstreams: Option<Vec<String>>,

    /// Cache responses
    pub caching: Option<bool>,

    /// Resolve AAAA records
    pub ipv6: Option<bool>,

    /// Resolver verbosity level, 0 to 5
    pub verbosity: Option<u8>,

    /// Resolver verbosity details level, 0 to 4
    pub verbosity_details: Option<u8>,

    /// DNSSEC validation log level, 0 to 2
    pub validation_log: Option<u8>,

    /// System user the resolver runs as
    pub username: Option<String>,

    /// Networks allowed to query the resolver (CIDR)
    pub allowed_networks: Option<Vec<IpNet>>,
}

/// Public IP polling section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicIpSection {
    /// Fetch period in seconds (0 disables periodic fetching)
    pub period: Option<u64>,

    /// File to write the fetched address to
    pub file: Option<PathBuf>,
}

/// Port forwarding section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortForwardingSection {
    /// Activate automatic port forwarding
    pub enabled: Option<bool>,

    /// File to write the forwarded port number to
    pub status_file: Option<PathBuf>,
}

/// System identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemSection {
    /// User ID for spawned processes
    pub uid: Option<u32>,

    /// Group ID for spawned processes
    pub gid: Option<u32>,

    /// IANA timezone name
    pub timezone: Option<String>,
}

impl FileFragment {
    /// Loads a fragment from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses a fragment from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Converts the raw fragment into a settings fragment, parsing enum
    /// names along the way.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown provider, VPN type, or protocol
    /// names.
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let mut settings = Settings::default();

        if let Some(ref provider) = self.vpn.provider {
            settings.vpn.provider = Optional::set(parse_provider(provider)?);
        }
        if let Some(ref kind) = self.vpn.kind {
            settings.vpn.kind = Optional::set(parse_vpn_kind(kind)?);
        }
        if let Some(ref protocol) = self.vpn.protocol {
            settings.vpn.protocol = Optional::set(parse_protocol(protocol)?);
        }
        settings.vpn.port = self.vpn.port.into();
        settings.vpn.countries = self.vpn.countries;
        settings.vpn.regions = self.vpn.regions;
        settings.vpn.cities = self.vpn.cities;
        settings.vpn.hostnames = self.vpn.hostnames;

        settings.dns_filter.block_malicious = self.dns.filter.block_malicious.into();
        settings.dns_filter.block_ads = self.dns.filter.block_ads.into();
        settings.dns_filter.block_surveillance = self.dns.filter.block_surveillance.into();
        settings.dns_filter.allowed_hosts = self.dns.filter.allowed_hosts;
        settings.dns_filter.blocked_hosts = self.dns.filter.blocked_hosts;
        settings.dns_filter.blocked_ips = self.dns.filter.blocked_ips;
        settings.dns_filter.blocked_prefixes = self.dns.filter.blocked_prefixes;

        settings.dns_server.upstreams = self.dns.server.upstreams;
        settings.dns_server.caching = self.dns.server.caching.into();
        settings.dns_server.ipv6 = self.dns.server.ipv6.into();
        settings.dns_server.verbosity = self.dns.server.verbosity.into();
        settings.dns_server.verbosity_details = self.dns.server.verbosity_details.into();
        settings.dns_server.validation_log = self.dns.server.validation_log.into();
        settings.dns_server.username = self.dns.server.username.unwrap_or_default();
        settings.dns_server.allowed_networks = self.dns.server.allowed_networks;

        settings.public_ip.period = self.public_ip.period.map(Duration::from_secs).into();
        settings.public_ip.ip_file = self.public_ip.file.into();

        settings.port_forward.enabled = self.port_forwarding.enabled.into();
        settings.port_forward.status_file = self.port_forwarding.status_file.into();

        settings.system.uid = self.system.uid.into();
        settings.system.gid = self.system.gid.into();
        settings.system.timezone = self.system.timezone.unwrap_or_default();

        Ok(settings)
    }
}

fn parse_provider(s: &str) -> Result<VpnProvider, ConfigError> {
    match s.to_lowercase().replace(' ', "-").as_str() {
        "private-internet-access" | "pia" => Ok(VpnProvider::PrivateInternetAccess),
        "windscribe" => Ok(VpnProvider::Windscribe),
        "mullvad" => Ok(VpnProvider::Mullvad),
        _ => Err(ConfigError::InvalidProvider {
            value: s.to_string(),
        }),
    }
}

fn parse_vpn_kind(s: &str) -> Result<VpnKind, ConfigError> {
    match s.to_lowercase().as_str() {
        "openvpn" => Ok(VpnKind::OpenVpn),
        "wireguard" => Ok(VpnKind::Wireguard),
        _ => Err(ConfigError::InvalidVpnKind {
            value: s.to_string(),
        }),
    }
}

fn parse_protocol(s: &str) -> Result<TransportProtocol, ConfigError> {
    match s.to_lowercase().as_str() {
        "udp" => Ok(TransportProtocol::Udp),
        "tcp" => Ok(TransportProtocol::Tcp),
        _ => Err(ConfigError::InvalidProtocol {
            value: s.to_string(),
        }),
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# VPNGate Configuration File
#
# Every value here is optional. The first file to set a field wins;
# CLI flags always override.

[vpn]
# VPN provider: "private-internet-access", "windscribe", or "mullvad"
# provider = "private-internet-access"

# VPN transport family: "openvpn" or "wireguard"
# type = "openvpn"

# Transport protocol: "udp" or "tcp" (default: provider default)
# protocol = "udp"

# Target server port (default: provider default for the transport)
# port = 1194

# Geographic and host name filters (unset = no constraint)
# countries = ["netherlands"]
# regions = []
# cities = []
# hostnames = []

[dns.filter]
# Domain category blocks
# block_malicious = true
# block_ads = false
# block_surveillance = true

# Allow and block lists
# allowed_hosts = ["example.com"]
# blocked_hosts = []
# blocked_ips = []
# blocked_prefixes = []

[dns.server]
# Upstream resolvers: "cloudflare", "google", or "quad9"
# upstreams = ["cloudflare"]

# caching = true
# ipv6 = false
# verbosity = 1
# verbosity_details = 0
# validation_log = 0
# username = "root"

# Networks allowed to query the resolver (default: all of IPv4 and IPv6)
# allowed_networks = ["0.0.0.0/0", "::/0"]

[public_ip]
# Fetch period in seconds; 0 disables periodic fetching (default: 12 hours)
# period = 43200

# File to write the fetched address to
# file = "/tmp/vpngate/ip"

[port_forwarding]
# Only available for providers that support it
# enabled = false

# File to write the forwarded port number to
# status_file = "/tmp/vpngate/forwarded_port"

[system]
# Identity for spawned tunnel and resolver processes
# uid = 1000
# gid = 1000

# IANA timezone name for log timestamps
# timezone = "UTC"
"#
    .to_string()
}
