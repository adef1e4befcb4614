//! The reconciliation lifecycle shared by every settings group.

use crate::provider::VpnProvider;

use super::error::SettingsError;
use super::settings::Settings;

/// Cross-group information that validation needs from the rest of the
/// aggregate, passed explicitly rather than read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// The VPN provider the selection resolved to.
    pub provider: VpnProvider,
}

/// The per-group reconciliation operations.
///
/// Deep copying is expressed as `Clone`: every group field is an owned
/// value, so a clone shares no mutable state with the source.
pub trait Reconcile: Clone {
    /// Applies the first-write-wins merge rules field by field; never
    /// overwrites an already-set field.
    fn merge_with(&mut self, other: &Self);

    /// Applies the last-write-wins override rules field by field; always
    /// applies `other` where `other` has data.
    fn override_with(&mut self, other: &Self);

    /// Fills every still-unset field with its compiled-in default. Total:
    /// after this runs, no mandatory field is unset.
    fn set_defaults(&mut self);

    /// Checks every field against its rules without mutating anything.
    ///
    /// Only defined after `set_defaults` has run.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] encountered, naming the
    /// offending field and value.
    fn validate(&self, ctx: &ValidationContext) -> Result<(), SettingsError>;
}

/// Runs the three-phase reconciliation pipeline.
///
/// Fragments are folded in with first-write-wins merge in the order given,
/// so earlier fragments take priority. The override tier, when present, is
/// then applied last-write-wins. Defaults are applied exactly once, after
/// all merges and overrides, and the result is validated as a whole.
///
/// The output is fully populated and safe to treat as immutable; a hot
/// reload re-runs this function from the original fragments and publishes
/// the new value whole, never mutating the previous result in place.
///
/// # Errors
///
/// Returns the first validation failure, naming the group and field.
pub fn reconcile(
    fragments: &[Settings],
    override_tier: Option<&Settings>,
) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    for fragment in fragments {
        settings.merge_with(fragment);
    }

    if let Some(tier) = override_tier {
        settings.override_with(tier);
    }

    settings.set_defaults();

    let ctx = settings.validation_context();
    settings.validate(&ctx)?;

    Ok(settings)
}
