//! Recursive DNS resolver settings.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use super::error::SettingsError;
use super::optional::{self, Optional};
use super::reconcile::{Reconcile, ValidationContext};

const MAX_VERBOSITY: u8 = 5;
const MAX_VERBOSITY_DETAILS: u8 = 4;
const MAX_VALIDATION_LOG: u8 = 2;

/// A known upstream DNS provider for the recursive resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Cloudflare (1.1.1.1)
    Cloudflare,
    /// Google Public DNS (8.8.8.8)
    Google,
    /// Quad9 (9.9.9.9)
    Quad9,
}

impl Upstream {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
            Self::Google => "google",
            Self::Quad9 => "quad9",
        }
    }

    /// Plaintext IPv4 address of this upstream.
    #[must_use]
    pub const fn plaintext_ipv4(self) -> Ipv4Addr {
        match self {
            Self::Cloudflare => Ipv4Addr::new(1, 1, 1, 1),
            Self::Google => Ipv4Addr::new(8, 8, 8, 8),
            Self::Quad9 => Ipv4Addr::new(9, 9, 9, 9),
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Upstream {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cloudflare" => Ok(Self::Cloudflare),
            "google" => Ok(Self::Google),
            "quad9" => Ok(Self::Quad9),
            _ => Err(SettingsError::UnknownUpstream { name: s.to_string() }),
        }
    }
}

/// Settings for the recursive DNS resolver process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DnsServer {
    /// Upstream resolver names, forwarded to in order.
    pub upstreams: Option<Vec<String>>,
    /// Cache responses.
    pub caching: Optional<bool>,
    /// Resolve AAAA records.
    pub ipv6: Optional<bool>,
    /// Resolver verbosity level, 0 to 5.
    pub verbosity: Optional<u8>,
    /// Resolver verbosity details level, 0 to 4.
    pub verbosity_details: Optional<u8>,
    /// DNSSEC validation log level, 0 to 2.
    pub validation_log: Optional<u8>,
    /// System user the resolver process runs as.
    pub username: String,
    /// Networks allowed to query the resolver. Defaults to all of IPv4
    /// and all of IPv6: absence of a restriction is an explicit
    /// permissive rule, never deny-all.
    pub allowed_networks: Option<Vec<IpNet>>,
}

impl DnsServer {
    /// Returns the plaintext IPv4 address of the first upstream.
    ///
    /// Intended for the resolver process collaborator, after
    /// reconciliation has guaranteed a non-empty, parseable upstream list.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoUpstream`] when the list is empty and
    /// [`SettingsError::UnknownUpstream`] when the first name does not
    /// parse.
    pub fn first_plaintext_ipv4(&self) -> Result<Ipv4Addr, SettingsError> {
        let name = self
            .upstreams
            .as_deref()
            .and_then(<[String]>::first)
            .ok_or(SettingsError::NoUpstream)?;
        Ok(name.parse::<Upstream>()?.plaintext_ipv4())
    }
}

impl Reconcile for DnsServer {
    fn merge_with(&mut self, other: &Self) {
        optional::merge_seq(&mut self.upstreams, &other.upstreams);
        self.caching.merge_with(&other.caching);
        self.ipv6.merge_with(&other.ipv6);
        self.verbosity.merge_with(&other.verbosity);
        self.verbosity_details.merge_with(&other.verbosity_details);
        self.validation_log.merge_with(&other.validation_log);
        optional::merge_str(&mut self.username, &other.username);
        optional::merge_seq(&mut self.allowed_networks, &other.allowed_networks);
    }

    fn override_with(&mut self, other: &Self) {
        optional::override_seq(&mut self.upstreams, &other.upstreams);
        self.caching.override_with(&other.caching);
        self.ipv6.override_with(&other.ipv6);
        self.verbosity.override_with(&other.verbosity);
        self.verbosity_details.override_with(&other.verbosity_details);
        self.validation_log.override_with(&other.validation_log);
        optional::override_str(&mut self.username, &other.username);
        optional::override_seq(&mut self.allowed_networks, &other.allowed_networks);
    }

    fn set_defaults(&mut self) {
        // An empty upstream list is unusable, so both "no preference" and
        // "explicitly cleared" fall back to the default upstream.
        if self.upstreams.as_deref().is_none_or(<[String]>::is_empty) {
            self.upstreams = Some(vec![Upstream::Cloudflare.name().to_string()]);
        }

        self.caching.default_to(true);
        self.ipv6.default_to(false);
        self.verbosity.default_to(1);
        self.verbosity_details.default_to(0);
        self.validation_log.default_to(0);
        optional::default_str(&mut self.username, "root");

        if self.allowed_networks.is_none() {
            self.allowed_networks = Some(vec![
                IpNet::V4(
                    Ipv4Net::new(Ipv4Addr::UNSPECIFIED, 0).expect("prefix length 0 is valid"),
                ),
                IpNet::V6(
                    Ipv6Net::new(Ipv6Addr::UNSPECIFIED, 0).expect("prefix length 0 is valid"),
                ),
            ]);
        }
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), SettingsError> {
        for name in self.upstreams.iter().flatten() {
            name.parse::<Upstream>()?;
        }

        let verbosity = *self.verbosity.get();
        if verbosity > MAX_VERBOSITY {
            return Err(SettingsError::LevelOutOfRange {
                field: "DNS verbosity level",
                value: verbosity,
                max: MAX_VERBOSITY,
            });
        }

        let details = *self.verbosity_details.get();
        if details > MAX_VERBOSITY_DETAILS {
            return Err(SettingsError::LevelOutOfRange {
                field: "DNS verbosity details level",
                value: details,
                max: MAX_VERBOSITY_DETAILS,
            });
        }

        let validation_log = *self.validation_log.get();
        if validation_log > MAX_VALIDATION_LOG {
            return Err(SettingsError::LevelOutOfRange {
                field: "DNS validation log level",
                value: validation_log,
                max: MAX_VALIDATION_LOG,
            });
        }

        Ok(())
    }
}
