//! Tests for TOML fragment parsing.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::provider::{TransportProtocol, VpnKind, VpnProvider};

use super::{ConfigError, FileFragment, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn empty_file_is_a_valid_empty_fragment() {
        let fragment = FileFragment::parse("").unwrap();
        let settings = fragment.into_settings().unwrap();

        assert!(!settings.vpn.provider.is_set());
        assert!(!settings.dns_filter.block_ads.is_set());
        assert!(settings.system.timezone.is_empty());
    }

    #[test]
    fn full_fragment_converts_to_settings() {
        let toml = r#"
            [vpn]
            provider = "mullvad"
            type = "wireguard"
            protocol = "udp"
            port = 51820
            countries = ["sweden"]

            [dns.filter]
            block_ads = true
            allowed_hosts = ["example.com"]

            [dns.server]
            upstreams = ["quad9"]
            verbosity = 2

            [public_ip]
            period = 3600
            file = "/var/run/ip"

            [port_forwarding]
            enabled = false

            [system]
            uid = 500
            timezone = "UTC"
        "#;

        let settings = FileFragment::parse(toml).unwrap().into_settings().unwrap();

        assert_eq!(*settings.vpn.provider.get(), VpnProvider::Mullvad);
        assert_eq!(*settings.vpn.kind.get(), VpnKind::Wireguard);
        assert_eq!(*settings.vpn.protocol.get(), TransportProtocol::Udp);
        assert_eq!(*settings.vpn.port.get(), 51820);
        assert_eq!(settings.vpn.countries, Some(vec!["sweden".to_string()]));
        assert!(*settings.dns_filter.block_ads.get());
        assert_eq!(
            settings.dns_filter.allowed_hosts,
            Some(vec!["example.com".to_string()])
        );
        assert_eq!(
            settings.dns_server.upstreams,
            Some(vec!["quad9".to_string()])
        );
        assert_eq!(*settings.dns_server.verbosity.get(), 2);
        assert_eq!(*settings.public_ip.period.get(), Duration::from_secs(3600));
        assert_eq!(*settings.public_ip.ip_file.get(), PathBuf::from("/var/run/ip"));
        assert!(!*settings.port_forward.enabled.get());
        assert_eq!(*settings.system.uid.get(), 500);
        assert_eq!(settings.system.timezone, "UTC");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FileFragment::parse("[vpn]\nprovder = \"mullvad\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn empty_list_survives_as_explicitly_cleared() {
        let toml = "[dns.server]\nupstreams = []\n";
        let settings = FileFragment::parse(toml).unwrap().into_settings().unwrap();
        assert_eq!(settings.dns_server.upstreams, Some(Vec::new()));
    }
}

mod enum_names {
    use super::*;

    #[test]
    fn provider_names_are_case_and_space_insensitive() {
        for name in ["Private Internet Access", "private-internet-access", "PIA"] {
            let toml = format!("[vpn]\nprovider = \"{name}\"\n");
            let settings = FileFragment::parse(&toml).unwrap().into_settings().unwrap();
            assert_eq!(
                *settings.vpn.provider.get(),
                VpnProvider::PrivateInternetAccess
            );
        }
    }

    #[test]
    fn unknown_provider_is_reported_with_its_name() {
        let toml = "[vpn]\nprovider = \"acme-vpn\"\n";
        let err = FileFragment::parse(toml).unwrap().into_settings().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidProvider { value } if value == "acme-vpn"
        ));
    }

    #[test]
    fn unknown_vpn_type_is_rejected() {
        let toml = "[vpn]\ntype = \"ipsec\"\n";
        let err = FileFragment::parse(toml).unwrap().into_settings().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVpnKind { .. }));
    }

    #[test]
    fn unknown_protocol_is_rejected() {
        let toml = "[vpn]\nprotocol = \"sctp\"\n";
        let err = FileFragment::parse(toml).unwrap().into_settings().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProtocol { .. }));
    }
}

mod loading {
    use super::*;

    #[test]
    fn loads_a_fragment_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[vpn]\nprovider = \"windscribe\"").unwrap();

        let fragment = FileFragment::load(file.path()).unwrap();
        let settings = fragment.into_settings().unwrap();
        assert_eq!(*settings.vpn.provider.get(), VpnProvider::Windscribe);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = FileFragment::load(std::path::Path::new("/nonexistent/vpngate.toml"))
            .unwrap_err();
        let ConfigError::FileRead { path, .. } = err else {
            panic!("expected file read error, got {err}");
        };
        assert_eq!(path, PathBuf::from("/nonexistent/vpngate.toml"));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses_cleanly() {
        let fragment = FileFragment::parse(&default_config_template()).unwrap();
        let settings = fragment.into_settings().unwrap();
        // Everything in the template is commented out, so the fragment is
        // empty and must not disturb a merge.
        assert!(!settings.vpn.provider.is_set());
        assert!(!settings.port_forward.enabled.is_set());
    }
}
