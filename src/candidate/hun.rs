//! # Heads-up candidate
//!
//! [`HunCandidate`] carries everything the controller may consult about a
//! notification: a stable key, the requested pinned status, and the
//! timestamp-independent classification fields that priority comparators rank
//! on. None of it is time-based, so ordering decisions are reproducible.
//!
//! ## Example
//! ```rust
//! use hunvisor::{HunCandidate, PinnedStatus};
//!
//! let call = HunCandidate::new("notif|com.dialer|7")
//!     .with_full_screen_intent(true)
//!     .with_requested_pinned_status(PinnedStatus::PinnedBySystem);
//!
//! assert_eq!(call.key(), "notif|com.dialer|7");
//! assert!(call.requested_pinned_status().is_pinned());
//! ```

use std::sync::Arc;

use super::pinned::PinnedStatus;

/// One notification eligible for the heads-up slot.
///
/// Identity is the `key`: two candidates with the same key refer to the same
/// notification, and the controller tracks at most one of them at a time.
#[derive(Clone, Debug)]
pub struct HunCandidate {
    key: Arc<str>,
    requested_pinned_status: PinnedStatus,
    full_screen_intent: bool,
    critical_call: bool,
    remote_input_active: bool,
}

impl HunCandidate {
    /// Creates a plain, not-pinned candidate with the given key.
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self {
            key: key.into(),
            requested_pinned_status: PinnedStatus::NotPinned,
            full_screen_intent: false,
            critical_call: false,
            remote_input_active: false,
        }
    }

    /// Stable, unique key identifying this candidate.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shared handle to the key (cheap to clone into diagnostics events).
    #[inline]
    pub(crate) fn key_arc(&self) -> Arc<str> {
        Arc::clone(&self.key)
    }

    /// Requested pinned status, as last set by the display collaborator.
    #[inline]
    pub fn requested_pinned_status(&self) -> PinnedStatus {
        self.requested_pinned_status
    }

    /// Whether the notification carries a full-screen intent.
    #[inline]
    pub fn has_full_screen_intent(&self) -> bool {
        self.full_screen_intent
    }

    /// Whether the notification is a critical call-style notification.
    #[inline]
    pub fn is_critical_call(&self) -> bool {
        self.critical_call
    }

    /// Whether the user currently has remote input (inline reply) open on it.
    #[inline]
    pub fn has_remote_input_active(&self) -> bool {
        self.remote_input_active
    }

    /// Sets the requested pinned status.
    #[inline]
    pub fn set_requested_pinned_status(&mut self, status: PinnedStatus) {
        self.requested_pinned_status = status;
    }

    /// Builder form of [`HunCandidate::set_requested_pinned_status`].
    #[inline]
    pub fn with_requested_pinned_status(mut self, status: PinnedStatus) -> Self {
        self.requested_pinned_status = status;
        self
    }

    /// Marks the candidate as carrying a full-screen intent.
    #[inline]
    pub fn with_full_screen_intent(mut self, value: bool) -> Self {
        self.full_screen_intent = value;
        self
    }

    /// Marks the candidate as a critical call notification.
    #[inline]
    pub fn with_critical_call(mut self, value: bool) -> Self {
        self.critical_call = value;
        self
    }

    /// Marks the candidate as having remote input active.
    #[inline]
    pub fn with_remote_input_active(mut self, value: bool) -> Self {
        self.remote_input_active = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate_defaults() {
        let c = HunCandidate::new("key");
        assert_eq!(c.key(), "key");
        assert_eq!(c.requested_pinned_status(), PinnedStatus::NotPinned);
        assert!(!c.has_full_screen_intent());
        assert!(!c.is_critical_call());
        assert!(!c.has_remote_input_active());
    }

    #[test]
    fn test_pinned_status_mutation() {
        let mut c = HunCandidate::new("key");
        c.set_requested_pinned_status(PinnedStatus::PinnedByUser);
        assert_eq!(c.requested_pinned_status(), PinnedStatus::PinnedByUser);
        assert!(c.requested_pinned_status().is_pinned());
    }
}
