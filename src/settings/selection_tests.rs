//! Tests for server selection settings.

use crate::provider::{TransportProtocol, VpnKind, VpnProvider};

use super::{Optional, Reconcile, ServerSelection, SettingsError, ValidationContext};

fn ctx() -> ValidationContext {
    ValidationContext {
        provider: VpnProvider::PrivateInternetAccess,
    }
}

mod defaults {
    use super::*;

    #[test]
    fn defaults_validate_on_empty_group() {
        let mut selection = ServerSelection::default();
        selection.set_defaults();
        assert!(selection.validate(&ctx()).is_ok());
    }

    #[test]
    fn default_provider_and_kind() {
        let mut selection = ServerSelection::default();
        selection.set_defaults();
        assert_eq!(*selection.provider.get(), VpnProvider::PrivateInternetAccess);
        assert_eq!(*selection.kind.get(), VpnKind::OpenVpn);
    }

    #[test]
    fn protocol_and_port_stay_unset_for_provider_defaults() {
        let mut selection = ServerSelection::default();
        selection.set_defaults();
        assert!(!selection.protocol.is_set());
        assert!(!selection.port.is_set());
    }
}

mod validation {
    use super::*;

    #[test]
    fn zero_port_is_rejected() {
        let mut selection = ServerSelection {
            port: Optional::set(0),
            ..Default::default()
        };
        selection.set_defaults();

        let err = selection.validate(&ctx()).unwrap_err();
        assert!(matches!(err, SettingsError::PortZero));
    }

    #[test]
    fn explicit_port_passes() {
        let mut selection = ServerSelection {
            port: Optional::set(1194),
            ..Default::default()
        };
        selection.set_defaults();
        assert!(selection.validate(&ctx()).is_ok());
    }
}

mod merging {
    use super::*;

    #[test]
    fn country_filter_merge_is_first_source_wins() {
        let mut selection = ServerSelection {
            countries: Some(vec!["netherlands".to_string()]),
            ..Default::default()
        };
        let other = ServerSelection {
            countries: Some(vec!["sweden".to_string()]),
            ..Default::default()
        };

        selection.merge_with(&other);
        assert_eq!(selection.countries, Some(vec!["netherlands".to_string()]));
    }

    #[test]
    fn override_replaces_protocol_preference() {
        let mut selection = ServerSelection {
            protocol: Optional::set(TransportProtocol::Udp),
            ..Default::default()
        };
        let other = ServerSelection {
            protocol: Optional::set(TransportProtocol::Tcp),
            ..Default::default()
        };

        selection.override_with(&other);
        assert_eq!(*selection.protocol.get(), TransportProtocol::Tcp);
    }
}
