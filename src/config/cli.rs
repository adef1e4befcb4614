//! CLI argument parsing using clap.
//!
//! The CLI flags form the authoritative override tier of the
//! reconciliation pipeline: a flag always wins over configuration files.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::provider::{TransportProtocol, VpnKind, VpnProvider};
use crate::settings::{Optional, Settings};

/// VPNGate: multi-provider VPN gateway
///
/// Reconciles layered configuration into one validated runtime
/// configuration and resolves the selection into one concrete endpoint.
#[derive(Debug, Parser)]
#[command(name = "vpngate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML configuration fragment (can be specified multiple
    /// times; the first file to set a field wins)
    #[arg(long, short, value_name = "PATH", global = true)]
    pub config: Vec<PathBuf>,

    /// VPN provider
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// VPN transport family
    #[arg(long = "vpn", value_enum)]
    pub vpn: Option<VpnArg>,

    /// Transport protocol
    #[arg(long, value_enum)]
    pub protocol: Option<ProtocolArg>,

    /// Target server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Country to connect in (can be specified multiple times)
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Region to connect in (can be specified multiple times)
    #[arg(long = "region", value_name = "NAME")]
    pub regions: Vec<String>,

    /// City to connect in (can be specified multiple times)
    #[arg(long = "city", value_name = "NAME")]
    pub cities: Vec<String>,

    /// Server host name to connect to (can be specified multiple times)
    #[arg(long = "server-hostname", value_name = "NAME")]
    pub hostnames: Vec<String>,

    /// Block known malicious domains
    #[arg(long = "block-malicious", value_name = "BOOL")]
    pub block_malicious: Option<bool>,

    /// Block advertising domains
    #[arg(long = "block-ads", value_name = "BOOL")]
    pub block_ads: Option<bool>,

    /// Block surveillance domains
    #[arg(long = "block-surveillance", value_name = "BOOL")]
    pub block_surveillance: Option<bool>,

    /// Public IP fetch period in seconds (0 disables periodic fetching)
    #[arg(long = "public-ip-period", value_name = "SECONDS")]
    pub public_ip_period: Option<u64>,

    /// Enable automatic port forwarding
    #[arg(long = "port-forwarding", value_name = "BOOL")]
    pub port_forwarding: Option<bool>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for vpngate
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "vpngate.toml")]
        output: PathBuf,
    },
    /// Reconcile and validate the configuration, then exit
    Check,
    /// Resolve one connection from a provider catalog
    Resolve {
        /// Path to the provider catalog JSON file
        #[arg(long, value_name = "PATH")]
        catalog: PathBuf,
        /// Seed for reproducible server selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// VPN provider argument for CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Private Internet Access
    #[value(name = "private-internet-access", alias = "pia")]
    PrivateInternetAccess,
    /// Windscribe
    #[value(name = "windscribe")]
    Windscribe,
    /// Mullvad
    #[value(name = "mullvad")]
    Mullvad,
}

impl From<ProviderArg> for VpnProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::PrivateInternetAccess => Self::PrivateInternetAccess,
            ProviderArg::Windscribe => Self::Windscribe,
            ProviderArg::Mullvad => Self::Mullvad,
        }
    }
}

/// VPN transport family argument for CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VpnArg {
    /// OpenVPN
    #[value(name = "openvpn")]
    OpenVpn,
    /// WireGuard
    #[value(name = "wireguard")]
    Wireguard,
}

impl From<VpnArg> for VpnKind {
    fn from(arg: VpnArg) -> Self {
        match arg {
            VpnArg::OpenVpn => Self::OpenVpn,
            VpnArg::Wireguard => Self::Wireguard,
        }
    }
}

/// Transport protocol argument for CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    /// UDP
    #[value(name = "udp")]
    Udp,
    /// TCP
    #[value(name = "tcp")]
    Tcp,
}

impl From<ProtocolArg> for TransportProtocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Udp => Self::Udp,
            ProtocolArg::Tcp => Self::Tcp,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Builds the authoritative override fragment from the flags that
    /// were explicitly supplied. Unsupplied flags leave their fields
    /// unset, so the override tier does not disturb them.
    #[must_use]
    pub fn override_fragment(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(provider) = self.provider {
            settings.vpn.provider = Optional::set(provider.into());
        }
        if let Some(vpn) = self.vpn {
            settings.vpn.kind = Optional::set(vpn.into());
        }
        if let Some(protocol) = self.protocol {
            settings.vpn.protocol = Optional::set(protocol.into());
        }
        if let Some(port) = self.port {
            settings.vpn.port = Optional::set(port);
        }
        if !self.countries.is_empty() {
            settings.vpn.countries = Some(self.countries.clone());
        }
        if !self.regions.is_empty() {
            settings.vpn.regions = Some(self.regions.clone());
        }
        if !self.cities.is_empty() {
            settings.vpn.cities = Some(self.cities.clone());
        }
        if !self.hostnames.is_empty() {
            settings.vpn.hostnames = Some(self.hostnames.clone());
        }

        if let Some(block) = self.block_malicious {
            settings.dns_filter.block_malicious = Optional::set(block);
        }
        if let Some(block) = self.block_ads {
            settings.dns_filter.block_ads = Optional::set(block);
        }
        if let Some(block) = self.block_surveillance {
            settings.dns_filter.block_surveillance = Optional::set(block);
        }

        if let Some(seconds) = self.public_ip_period {
            settings.public_ip.period = Optional::set(Duration::from_secs(seconds));
        }

        if let Some(enabled) = self.port_forwarding {
            settings.port_forward.enabled = Optional::set(enabled);
        }

        settings
    }
}
