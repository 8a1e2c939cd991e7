//! # Dwell-time policy
//!
//! [`dwell_duration`] decides how long the showing banner stays visible given
//! the queue head waiting behind it. It is a pure function of its arguments:
//! no clocks, no controller state, safe to call speculatively any number of
//! times.
//!
//! ## Decision table
//! | Queue head vs. showing                  | Result                      |
//! |-----------------------------------------|-----------------------------|
//! | nothing waiting                          | requested duration, as-is  |
//! | pinned by user (flag enabled)            | hide immediately           |
//! | lower priority                           | requested duration, as-is  |
//! | equal priority                           | 1000 ms                    |
//! | higher priority                          | 500 ms                     |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use hunvisor::{dwell_duration, HunCandidate, NonTimeFieldsComparator, RemainingDuration};
//!
//! let showing = HunCandidate::new("a");
//! let next = HunCandidate::new("b").with_full_screen_intent(true);
//!
//! let decision = dwell_duration(
//!     &showing,
//!     Some(&next),
//!     Duration::from_millis(5000),
//!     false,
//!     &NonTimeFieldsComparator,
//! );
//! assert_eq!(
//!     decision.duration,
//!     RemainingDuration::UpdatedDuration(Duration::from_millis(500))
//! );
//! ```

use std::time::Duration;

use crate::candidate::{HunCandidate, PinnedStatus};

use super::priority::{RankCandidates, Ranking};

/// Shortened dwell time when the queue head has the same priority as the
/// showing banner: cycle through peers promptly.
pub const SAME_PRIORITY_DWELL: Duration = Duration::from_millis(1000);

/// Dwell time when the queue head outranks the showing banner: surface the
/// urgent one sooner.
pub const HIGHER_PRIORITY_DWELL: Duration = Duration::from_millis(500);

/// How long the showing banner should remain visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainingDuration {
    /// Keep showing for this long, then auto-dismiss.
    UpdatedDuration(Duration),
    /// Tear down the showing banner with no artificial delay.
    HideImmediately,
}

impl RemainingDuration {
    /// Milliseconds for diagnostics; `HideImmediately` reports as 0.
    pub fn as_millis(self) -> u128 {
        match self {
            RemainingDuration::UpdatedDuration(d) => d.as_millis(),
            RemainingDuration::HideImmediately => 0,
        }
    }
}

/// A dwell decision plus the reason that produced it, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DwellDecision {
    /// The decided remaining duration.
    pub duration: RemainingDuration,
    /// Short stable reason string (for the diagnostics sink).
    pub reason: &'static str,
}

/// Computes the remaining dwell time for `showing` given the queue head.
///
/// `next` is the candidate waiting directly behind the showing banner, if any.
/// `respect_user_pinning` gates the user-pinned override: when enabled and the
/// queue head was pinned by the user, the showing banner hides immediately
/// regardless of the comparator's verdict.
pub fn dwell_duration(
    showing: &HunCandidate,
    next: Option<&HunCandidate>,
    requested: Duration,
    respect_user_pinning: bool,
    comparator: &dyn RankCandidates,
) -> DwellDecision {
    let Some(next) = next else {
        return DwellDecision {
            duration: RemainingDuration::UpdatedDuration(requested),
            reason: "nothing waiting",
        };
    };

    if respect_user_pinning && next.requested_pinned_status() == PinnedStatus::PinnedByUser {
        return DwellDecision {
            duration: RemainingDuration::HideImmediately,
            reason: "next pinned by user",
        };
    }

    match comparator.rank(next, showing) {
        Ranking::Lower => DwellDecision {
            duration: RemainingDuration::UpdatedDuration(requested),
            reason: "next lower priority",
        },
        Ranking::Equal => DwellDecision {
            duration: RemainingDuration::UpdatedDuration(SAME_PRIORITY_DWELL),
            reason: "next same priority",
        },
        Ranking::Higher => DwellDecision {
            duration: RemainingDuration::UpdatedDuration(HIGHER_PRIORITY_DWELL),
            reason: "next higher priority",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::NonTimeFieldsComparator;

    const REQUESTED: Duration = Duration::from_millis(5000);

    fn decide(
        showing: &HunCandidate,
        next: Option<&HunCandidate>,
        respect_user_pinning: bool,
    ) -> RemainingDuration {
        dwell_duration(
            showing,
            next,
            REQUESTED,
            respect_user_pinning,
            &NonTimeFieldsComparator,
        )
        .duration
    }

    #[test]
    fn test_empty_queue_keeps_requested_duration() {
        let showing = HunCandidate::new("a");
        assert_eq!(
            decide(&showing, None, false),
            RemainingDuration::UpdatedDuration(REQUESTED)
        );
    }

    #[test]
    fn test_lower_priority_next_keeps_requested_duration() {
        let showing = HunCandidate::new("a").with_full_screen_intent(true);
        let next = HunCandidate::new("b");
        assert_eq!(
            decide(&showing, Some(&next), false),
            RemainingDuration::UpdatedDuration(REQUESTED)
        );
    }

    #[test]
    fn test_same_priority_next_shortens_to_1000() {
        let showing = HunCandidate::new("a");
        let next = HunCandidate::new("b");
        assert_eq!(
            decide(&showing, Some(&next), false),
            RemainingDuration::UpdatedDuration(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_higher_priority_next_shortens_to_500() {
        let showing = HunCandidate::new("a");
        let next = HunCandidate::new("b").with_full_screen_intent(true);
        assert_eq!(
            decide(&showing, Some(&next), false),
            RemainingDuration::UpdatedDuration(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_user_pinned_next_hides_immediately_when_respected() {
        let showing = HunCandidate::new("a");
        let next =
            HunCandidate::new("b").with_requested_pinned_status(PinnedStatus::PinnedByUser);
        assert_eq!(
            decide(&showing, Some(&next), true),
            RemainingDuration::HideImmediately
        );
    }

    #[test]
    fn test_user_pinned_next_ignored_when_flag_off() {
        let showing = HunCandidate::new("a");
        let next =
            HunCandidate::new("b").with_requested_pinned_status(PinnedStatus::PinnedByUser);
        // Same-priority rule applies instead.
        assert_eq!(
            decide(&showing, Some(&next), false),
            RemainingDuration::UpdatedDuration(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_user_pinned_override_beats_lower_priority() {
        let showing = HunCandidate::new("a").with_full_screen_intent(true);
        let next =
            HunCandidate::new("b").with_requested_pinned_status(PinnedStatus::PinnedByUser);
        assert_eq!(
            decide(&showing, Some(&next), true),
            RemainingDuration::HideImmediately
        );
    }

    #[test]
    fn test_system_pinned_next_gets_no_override() {
        let showing = HunCandidate::new("a");
        let next =
            HunCandidate::new("b").with_requested_pinned_status(PinnedStatus::PinnedBySystem);
        assert_eq!(
            decide(&showing, Some(&next), true),
            RemainingDuration::UpdatedDuration(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_decision_is_pure() {
        let showing = HunCandidate::new("a");
        let next = HunCandidate::new("b");
        let first = decide(&showing, Some(&next), false);
        for _ in 0..10 {
            assert_eq!(decide(&showing, Some(&next), false), first);
        }
    }
}
