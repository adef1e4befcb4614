//! Present/absent value model used by every settings group.
//!
//! Configuration fragments arrive partially populated, and "the user never
//! said" must stay distinguishable from "the user chose the zero value".
//! [`Optional`] makes absence a first-class, inspectable state and carries
//! the combination rules the reconciliation pipeline relies on:
//!
//! - **merge**: first-specified-value-wins. An already-set field is never
//!   touched by a later fragment.
//! - **override**: last-specified-value-wins. The authoritative tier
//!   always replaces when it has data.
//!
//! Sequence fields use `Option<Vec<T>>` with the same rules applied to the
//! sequence as a whole: merge is first-source-wins, not a union. Plain
//! string scalars treat the empty string as "unset".

/// A configuration value that is either unset or explicitly set.
///
/// # Examples
///
/// ```
/// use vpngate::settings::Optional;
///
/// let mut period = Optional::unset();
/// period.merge_with(&Optional::set(30));
/// period.default_to(60);
/// assert_eq!(*period.get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<T>(Option<T>);

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Optional<T> {
    /// An unset value.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// A value explicitly set to `value`.
    #[must_use]
    pub const fn set(value: T) -> Self {
        Self(Some(value))
    }

    /// Returns true if the value has been set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is unset. Every group's `set_defaults` is total,
    /// so after reconciliation this is unreachable for mandatory fields;
    /// hitting it means the lifecycle contract was broken by the caller.
    #[must_use]
    pub fn get(&self) -> &T {
        match &self.0 {
            Some(value) => value,
            None => panic!("optional value read before defaults were applied"),
        }
    }

    /// Returns the value as a plain `Option` reference.
    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Sets the value only if currently unset. Idempotent.
    pub fn default_to(&mut self, value: T) {
        if self.0.is_none() {
            self.0 = Some(value);
        }
    }
}

impl<T: Clone> Optional<T> {
    /// First-write-wins: takes `other`'s value only if self is unset.
    pub fn merge_with(&mut self, other: &Self) {
        if self.0.is_none() {
            self.0.clone_from(&other.0);
        }
    }

    /// Last-write-wins: `other`'s value replaces self's whenever `other`
    /// is set, regardless of self's prior state.
    pub fn override_with(&mut self, other: &Self) {
        if other.0.is_some() {
            self.0.clone_from(&other.0);
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        Self(option)
    }
}

/// First-source-wins merge for sequence fields: if `target` is `None`,
/// takes `other` as a whole. Never a union.
pub fn merge_seq<T: Clone>(target: &mut Option<Vec<T>>, other: &Option<Vec<T>>) {
    if target.is_none() {
        target.clone_from(other);
    }
}

/// Last-source-wins override for sequence fields: if `other` is non-`None`,
/// it replaces `target` as a whole.
pub fn override_seq<T: Clone>(target: &mut Option<Vec<T>>, other: &Option<Vec<T>>) {
    if other.is_some() {
        target.clone_from(other);
    }
}

/// First-source-wins merge for plain string scalars, where the empty
/// string means "unset".
pub fn merge_str(target: &mut String, other: &str) {
    if target.is_empty() {
        other.clone_into(target);
    }
}

/// Last-source-wins override for plain string scalars.
pub fn override_str(target: &mut String, other: &str) {
    if !other.is_empty() {
        other.clone_into(target);
    }
}

/// Fills a plain string scalar with a default if still empty.
pub fn default_str(target: &mut String, default: &str) {
    if target.is_empty() {
        default.clone_into(target);
    }
}
