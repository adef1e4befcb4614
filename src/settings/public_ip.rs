//! Public IP address polling settings.

use std::path::PathBuf;
use std::time::Duration;

use super::error::SettingsError;
use super::optional::Optional;
use super::reconcile::{Reconcile, ValidationContext};

const DEFAULT_PERIOD: Duration = Duration::from_secs(12 * 60 * 60);
const MIN_PERIOD: Duration = Duration::from_secs(5);

/// Settings for fetching the public IP address periodically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicIp {
    /// Period between fetches. Zero is the valid "disabled" state, not an
    /// error; any positive period must be at least 5 seconds.
    pub period: Optional<Duration>,
    /// File the fetched address is written to. Empty disables writing.
    pub ip_file: Optional<PathBuf>,
}

impl Reconcile for PublicIp {
    fn merge_with(&mut self, other: &Self) {
        self.period.merge_with(&other.period);
        self.ip_file.merge_with(&other.ip_file);
    }

    fn override_with(&mut self, other: &Self) {
        self.period.override_with(&other.period);
        self.ip_file.override_with(&other.ip_file);
    }

    fn set_defaults(&mut self) {
        self.period.default_to(DEFAULT_PERIOD);
        self.ip_file.default_to(PathBuf::from("/tmp/vpngate/ip"));
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), SettingsError> {
        let period = *self.period.get();
        if !period.is_zero() && period < MIN_PERIOD {
            return Err(SettingsError::PeriodBelowMinimum {
                period,
                min: MIN_PERIOD,
            });
        }

        let path = self.ip_file.get();
        if !path.as_os_str().is_empty() && !path.is_absolute() {
            return Err(SettingsError::PathNotAbsolute {
                field: "public IP file",
                path: path.clone(),
            });
        }

        Ok(())
    }
}
