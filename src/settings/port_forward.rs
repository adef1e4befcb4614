//! Automatic port forwarding settings.

use std::path::PathBuf;

use crate::provider::VpnProvider;

use super::error::SettingsError;
use super::optional::Optional;
use super::reconcile::{Reconcile, ValidationContext};

/// Settings for automatic port forwarding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortForward {
    /// Whether port forwarding should be activated.
    pub enabled: Optional<bool>,
    /// File the forwarded port number is written to. Empty disables
    /// writing.
    pub status_file: Optional<PathBuf>,
}

impl Reconcile for PortForward {
    fn merge_with(&mut self, other: &Self) {
        self.enabled.merge_with(&other.enabled);
        self.status_file.merge_with(&other.status_file);
    }

    fn override_with(&mut self, other: &Self) {
        self.enabled.override_with(&other.enabled);
        self.status_file.override_with(&other.status_file);
    }

    fn set_defaults(&mut self) {
        self.enabled.default_to(false);
        self.status_file
            .default_to(PathBuf::from("/tmp/vpngate/forwarded_port"));
    }

    fn validate(&self, ctx: &ValidationContext) -> Result<(), SettingsError> {
        if !*self.enabled.get() {
            return Ok(());
        }

        if !ctx.provider.supports_port_forwarding() {
            let supported = VpnProvider::PORT_FORWARDING_PROVIDERS
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(SettingsError::PortForwardingNotSupported {
                provider: ctx.provider,
                supported,
            });
        }

        let path = self.status_file.get();
        if !path.as_os_str().is_empty() && !path.is_absolute() {
            return Err(SettingsError::PathNotAbsolute {
                field: "forwarded port file",
                path: path.clone(),
            });
        }

        Ok(())
    }
}
