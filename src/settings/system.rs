//! System identity settings for spawned processes.

use super::error::SettingsError;
use super::optional::{self, Optional};
use super::reconcile::{Reconcile, ValidationContext};

const DEFAULT_ID: u32 = 1000;

/// Settings for system-level process identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct System {
    /// User ID to run tunnel and resolver processes as.
    pub uid: Optional<u32>,
    /// Group ID to run tunnel and resolver processes as.
    pub gid: Optional<u32>,
    /// IANA timezone name, used for log timestamps. Optional.
    pub timezone: String,
}

impl Reconcile for System {
    fn merge_with(&mut self, other: &Self) {
        self.uid.merge_with(&other.uid);
        self.gid.merge_with(&other.gid);
        optional::merge_str(&mut self.timezone, &other.timezone);
    }

    fn override_with(&mut self, other: &Self) {
        self.uid.override_with(&other.uid);
        self.gid.override_with(&other.gid);
        optional::override_str(&mut self.timezone, &other.timezone);
    }

    fn set_defaults(&mut self) {
        self.uid.default_to(DEFAULT_ID);
        self.gid.default_to(DEFAULT_ID);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), SettingsError> {
        Ok(())
    }
}
