//! Tests for recursive DNS resolver settings.

use std::net::Ipv4Addr;

use crate::provider::VpnProvider;

use super::{DnsServer, Optional, Reconcile, SettingsError, Upstream, ValidationContext};

fn ctx() -> ValidationContext {
    ValidationContext {
        provider: VpnProvider::PrivateInternetAccess,
    }
}

mod defaults {
    use super::*;

    #[test]
    fn defaults_validate_on_empty_group() {
        let mut server = DnsServer::default();
        server.set_defaults();
        assert!(server.validate(&ctx()).is_ok());
    }

    #[test]
    fn default_values() {
        let mut server = DnsServer::default();
        server.set_defaults();

        assert_eq!(server.upstreams, Some(vec!["cloudflare".to_string()]));
        assert!(*server.caching.get());
        assert!(!*server.ipv6.get());
        assert_eq!(*server.verbosity.get(), 1);
        assert_eq!(*server.verbosity_details.get(), 0);
        assert_eq!(*server.validation_log.get(), 0);
        assert_eq!(server.username, "root");
    }

    #[test]
    fn allowed_networks_default_is_permissive_not_deny_all() {
        let mut server = DnsServer::default();
        server.set_defaults();

        let networks = server.allowed_networks.as_deref().unwrap();
        assert_eq!(networks.len(), 2);
        assert!(networks.iter().all(|net| net.prefix_len() == 0));
        assert!(matches!(networks[0], ipnet::IpNet::V4(_)));
        assert!(matches!(networks[1], ipnet::IpNet::V6(_)));
    }

    #[test]
    fn explicitly_cleared_upstreams_fall_back_to_default() {
        let mut server = DnsServer {
            upstreams: Some(vec![]),
            ..Default::default()
        };
        server.set_defaults();
        assert_eq!(server.upstreams, Some(vec!["cloudflare".to_string()]));
    }
}

mod validation {
    use super::*;

    fn defaulted() -> DnsServer {
        let mut server = DnsServer::default();
        server.set_defaults();
        server
    }

    #[test]
    fn verbosity_above_five_is_rejected() {
        let mut server = defaulted();
        server.verbosity = Optional::set(6);
        let err = server.validate(&ctx()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::LevelOutOfRange { value: 6, max: 5, .. }
        ));
    }

    #[test]
    fn verbosity_bounds_are_inclusive() {
        let mut server = defaulted();
        server.verbosity = Optional::set(5);
        assert!(server.validate(&ctx()).is_ok());
        server.verbosity = Optional::set(0);
        assert!(server.validate(&ctx()).is_ok());
    }

    #[test]
    fn verbosity_details_above_four_is_rejected() {
        let mut server = defaulted();
        server.verbosity_details = Optional::set(5);
        let err = server.validate(&ctx()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::LevelOutOfRange { value: 5, max: 4, .. }
        ));
    }

    #[test]
    fn validation_log_above_two_is_rejected() {
        let mut server = defaulted();
        server.validation_log = Optional::set(3);
        let err = server.validate(&ctx()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::LevelOutOfRange { value: 3, max: 2, .. }
        ));
    }

    #[test]
    fn unknown_upstream_is_rejected() {
        let mut server = defaulted();
        server.upstreams = Some(vec!["opendns".to_string()]);
        let err = server.validate(&ctx()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::UnknownUpstream { name } if name == "opendns"
        ));
    }

    #[test]
    fn known_upstreams_pass() {
        let mut server = defaulted();
        server.upstreams = Some(vec![
            "cloudflare".to_string(),
            "google".to_string(),
            "quad9".to_string(),
        ]);
        assert!(server.validate(&ctx()).is_ok());
    }
}

mod upstream {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Cloudflare".parse::<Upstream>().unwrap(), Upstream::Cloudflare);
        assert_eq!("GOOGLE".parse::<Upstream>().unwrap(), Upstream::Google);
    }

    #[test]
    fn first_plaintext_ipv4_uses_first_upstream() {
        let mut server = DnsServer {
            upstreams: Some(vec!["quad9".to_string(), "google".to_string()]),
            ..Default::default()
        };
        server.set_defaults();

        let ip = server.first_plaintext_ipv4().unwrap();
        assert_eq!(ip, Ipv4Addr::new(9, 9, 9, 9));
    }

    #[test]
    fn first_plaintext_ipv4_after_defaults_is_cloudflare() {
        let mut server = DnsServer::default();
        server.set_defaults();
        assert_eq!(
            server.first_plaintext_ipv4().unwrap(),
            Ipv4Addr::new(1, 1, 1, 1)
        );
    }

    #[test]
    fn first_plaintext_ipv4_without_upstreams_errors() {
        let server = DnsServer::default();
        let err = server.first_plaintext_ipv4().unwrap_err();
        assert!(matches!(err, SettingsError::NoUpstream));
    }
}

mod merging {
    use super::*;

    #[test]
    fn upstream_merge_is_first_source_wins() {
        let mut server = DnsServer {
            upstreams: Some(vec!["google".to_string()]),
            ..Default::default()
        };
        let other = DnsServer {
            upstreams: Some(vec!["quad9".to_string()]),
            ..Default::default()
        };

        server.merge_with(&other);
        assert_eq!(server.upstreams, Some(vec!["google".to_string()]));
    }

    #[test]
    fn username_merge_fills_empty_only() {
        let mut server = DnsServer::default();
        let other = DnsServer {
            username: "unbound".to_string(),
            ..Default::default()
        };

        server.merge_with(&other);
        assert_eq!(server.username, "unbound");

        let third = DnsServer {
            username: "nobody".to_string(),
            ..Default::default()
        };
        server.merge_with(&third);
        assert_eq!(server.username, "unbound");
    }

    #[test]
    fn override_replaces_upstreams_and_username() {
        let mut server = DnsServer {
            upstreams: Some(vec!["google".to_string()]),
            username: "unbound".to_string(),
            ..Default::default()
        };
        let other = DnsServer {
            upstreams: Some(vec!["quad9".to_string()]),
            username: "nobody".to_string(),
            ..Default::default()
        };

        server.override_with(&other);
        assert_eq!(server.upstreams, Some(vec!["quad9".to_string()]));
        assert_eq!(server.username, "nobody");
    }
}
