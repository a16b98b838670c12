//! Scroll lock for modal surfaces.
//!
//! While a modal is open the result list underneath must not move. The lock
//! is a plain flag owned by the application state; a [`ScrollLock`] guard
//! remembers what the flag was before it engaged and puts that value back on
//! release, so an inner modal closing never unlocks an outer one.

/// Guard returned by [`ScrollLock::engage`].
///
/// Must be handed back through [`ScrollLock::release`]; dropping it leaves
/// the flag set.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a scroll lock must be released to restore scrolling"]
pub struct ScrollLock {
    previous: bool,
}

impl ScrollLock {
    /// Sets `flag` and records its previous value.
    pub fn engage(flag: &mut bool) -> Self {
        let previous = *flag;
        *flag = true;
        tracing::trace!(previous, "scroll lock engaged");
        Self { previous }
    }

    /// Restores `flag` to the value recorded at engage time.
    pub fn release(self, flag: &mut bool) {
        *flag = self.previous;
        tracing::trace!(restored = self.previous, "scroll lock released");
    }

    /// Value the flag had before this lock engaged.
    #[must_use]
    pub const fn previous(&self) -> bool {
        self.previous
    }
}
