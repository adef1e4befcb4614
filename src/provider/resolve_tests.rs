//! Tests for connection resolution.

use std::net::{IpAddr, Ipv4Addr};

use crate::settings::{Optional, ServerSelection};

use super::{
    Catalog, Picker, ResolveError, Server, TransportProtocol, UniformPicker, VpnKind, VpnProvider,
    resolve,
};

/// Always picks the first candidate, so tests can assert on a known
/// expansion position without depending on RNG output.
struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

fn server(hostname: &str, cert_name: &str, ips: Vec<IpAddr>) -> Server {
    Server {
        country: "Sweden".to_string(),
        region: String::new(),
        city: "Stockholm".to_string(),
        hostname: hostname.to_string(),
        cert_name: cert_name.to_string(),
        wg_pubkey: "wgpub".to_string(),
        ips,
    }
}

fn selection(kind: VpnKind) -> ServerSelection {
    ServerSelection {
        provider: Optional::set(VpnProvider::Mullvad),
        kind: Optional::set(kind),
        ..Default::default()
    }
}

fn one_server_catalog() -> Catalog {
    Catalog {
        provider: VpnProvider::Mullvad,
        servers: vec![server(
            "se-sto-001",
            "stockholm.mullvad.net",
            vec![
                IpAddr::V4(Ipv4Addr::new(185, 65, 134, 1)),
                IpAddr::V4(Ipv4Addr::new(185, 65, 134, 2)),
            ],
        )],
    }
}

mod fallbacks {
    use super::*;

    #[test]
    fn protocol_and_port_fall_back_to_provider_defaults() {
        let connection = resolve(
            &selection(VpnKind::OpenVpn),
            &one_server_catalog(),
            &mut FirstPicker,
        )
        .unwrap();

        assert_eq!(connection.protocol, TransportProtocol::Udp);
        assert_eq!(connection.port, 1194);
    }

    #[test]
    fn wireguard_uses_the_wireguard_default_port() {
        let connection = resolve(
            &selection(VpnKind::Wireguard),
            &one_server_catalog(),
            &mut FirstPicker,
        )
        .unwrap();

        assert_eq!(connection.vpn, VpnKind::Wireguard);
        assert_eq!(connection.port, 51820);
    }

    #[test]
    fn explicit_protocol_and_port_win_over_defaults() {
        let mut selection = selection(VpnKind::OpenVpn);
        selection.protocol = Optional::set(TransportProtocol::Tcp);
        selection.port = Optional::set(8443);

        let connection = resolve(&selection, &one_server_catalog(), &mut FirstPicker).unwrap();
        assert_eq!(connection.protocol, TransportProtocol::Tcp);
        assert_eq!(connection.port, 8443);
    }

    #[test]
    fn tcp_preference_changes_the_default_port() {
        let catalog = Catalog {
            provider: VpnProvider::Windscribe,
            servers: one_server_catalog().servers,
        };
        let mut selection = selection(VpnKind::OpenVpn);
        selection.protocol = Optional::set(TransportProtocol::Tcp);

        let connection = resolve(&selection, &catalog, &mut FirstPicker).unwrap();
        assert_eq!(connection.port, 443);
    }
}

mod identity {
    use super::*;

    #[test]
    fn identity_fields_are_copied_from_the_chosen_server() {
        let connection = resolve(
            &selection(VpnKind::OpenVpn),
            &one_server_catalog(),
            &mut FirstPicker,
        )
        .unwrap();

        assert_eq!(connection.hostname, "stockholm.mullvad.net");
        assert_eq!(connection.pubkey, "wgpub");
        assert_eq!(connection.ip, IpAddr::V4(Ipv4Addr::new(185, 65, 134, 1)));
    }

    #[test]
    fn hostname_falls_back_when_certificate_name_is_absent() {
        let catalog = Catalog {
            provider: VpnProvider::Mullvad,
            servers: vec![server(
                "se-sto-002",
                "",
                vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9))],
            )],
        };

        let connection =
            resolve(&selection(VpnKind::OpenVpn), &catalog, &mut FirstPicker).unwrap();
        assert_eq!(connection.hostname, "se-sto-002");
    }
}

mod picking {
    use super::*;

    #[test]
    fn each_server_address_is_a_separate_candidate() {
        // Pin the index so the second address of the single server is
        // observable through the public API.
        struct LastPicker;
        impl Picker for LastPicker {
            fn pick(&mut self, len: usize) -> usize {
                len - 1
            }
        }

        let connection = resolve(
            &selection(VpnKind::OpenVpn),
            &one_server_catalog(),
            &mut LastPicker,
        )
        .unwrap();
        assert_eq!(connection.ip, IpAddr::V4(Ipv4Addr::new(185, 65, 134, 2)));
    }

    #[test]
    fn same_seed_resolves_to_the_same_endpoint() {
        let catalog = one_server_catalog();
        let selection = selection(VpnKind::OpenVpn);

        let first = resolve(&selection, &catalog, &mut UniformPicker::seeded(99)).unwrap();
        let second = resolve(&selection, &catalog, &mut UniformPicker::seeded(99)).unwrap();
        assert_eq!(first, second);
    }
}

mod failures {
    use super::*;

    #[test]
    fn unmatched_filter_reports_no_matching_server() {
        let mut selection = selection(VpnKind::OpenVpn);
        selection.countries = Some(vec!["atlantis".to_string()]);

        let err = resolve(&selection, &one_server_catalog(), &mut FirstPicker).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoMatchingServer {
                provider: VpnProvider::Mullvad,
            }
        );
    }

    #[test]
    fn matched_servers_without_addresses_report_no_reachable_address() {
        let catalog = Catalog {
            provider: VpnProvider::Mullvad,
            servers: vec![server("se-sto-003", "cert", Vec::new())],
        };

        let err = resolve(&selection(VpnKind::OpenVpn), &catalog, &mut FirstPicker).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoReachableAddress {
                provider: VpnProvider::Mullvad,
            }
        );
    }
}
