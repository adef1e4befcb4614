//! DNS filtering settings: category blocks plus allow and block lists.

use std::net::IpAddr;
use std::sync::LazyLock;

use ipnet::IpNet;
use regex::Regex;

use super::error::SettingsError;
use super::optional::{self, Optional};
use super::reconcile::{Reconcile, ValidationContext};

/// RFC-1123-style host name labels, underscores tolerated.
static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9]|[a-zA-Z0-9_][a-zA-Z0-9\-_]{0,61}[a-zA-Z0-9_])(\.([a-zA-Z0-9]|[a-zA-Z0-9_][a-zA-Z0-9\-_]{0,61}[a-zA-Z0-9]))*$",
    )
    .expect("host name pattern is valid")
});

/// Returns true if `host` is a syntactically valid host name.
#[must_use]
pub(crate) fn is_valid_host(host: &str) -> bool {
    HOST_PATTERN.is_match(host)
}

/// Settings for DNS block list building.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DnsFilter {
    /// Block known malicious domains.
    pub block_malicious: Optional<bool>,
    /// Block advertising domains.
    pub block_ads: Optional<bool>,
    /// Block surveillance domains.
    pub block_surveillance: Optional<bool>,
    /// Hosts exempt from every block list.
    pub allowed_hosts: Option<Vec<String>>,
    /// Extra hosts to block.
    pub blocked_hosts: Option<Vec<String>>,
    /// Extra IP addresses to block.
    pub blocked_ips: Option<Vec<IpAddr>>,
    /// Extra IP networks to block.
    pub blocked_prefixes: Option<Vec<IpNet>>,
}

impl Reconcile for DnsFilter {
    fn merge_with(&mut self, other: &Self) {
        self.block_malicious.merge_with(&other.block_malicious);
        self.block_ads.merge_with(&other.block_ads);
        self.block_surveillance.merge_with(&other.block_surveillance);
        optional::merge_seq(&mut self.allowed_hosts, &other.allowed_hosts);
        optional::merge_seq(&mut self.blocked_hosts, &other.blocked_hosts);
        optional::merge_seq(&mut self.blocked_ips, &other.blocked_ips);
        optional::merge_seq(&mut self.blocked_prefixes, &other.blocked_prefixes);
    }

    fn override_with(&mut self, other: &Self) {
        self.block_malicious.override_with(&other.block_malicious);
        self.block_ads.override_with(&other.block_ads);
        self.block_surveillance.override_with(&other.block_surveillance);
        optional::override_seq(&mut self.allowed_hosts, &other.allowed_hosts);
        optional::override_seq(&mut self.blocked_hosts, &other.blocked_hosts);
        optional::override_seq(&mut self.blocked_ips, &other.blocked_ips);
        optional::override_seq(&mut self.blocked_prefixes, &other.blocked_prefixes);
    }

    fn set_defaults(&mut self) {
        self.block_malicious.default_to(true);
        self.block_ads.default_to(false);
        self.block_surveillance.default_to(true);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), SettingsError> {
        for host in self.allowed_hosts.iter().flatten() {
            if !is_valid_host(host) {
                return Err(SettingsError::AllowedHostNotValid { host: host.clone() });
            }
        }

        for host in self.blocked_hosts.iter().flatten() {
            if !is_valid_host(host) {
                return Err(SettingsError::BlockedHostNotValid { host: host.clone() });
            }
        }

        Ok(())
    }
}
