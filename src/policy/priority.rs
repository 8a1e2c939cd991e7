//! # Priority comparator
//!
//! The controller never decides content priority itself; it consumes a
//! three-way [`Ranking`] produced by a [`RankCandidates`] implementation.
//!
//! ## Contract
//! - **Total**: every pair of candidates ranks as `Higher`, `Equal`, or `Lower`.
//! - **Deterministic and timestamp-free**: ranking must not depend on clocks,
//!   so ordering decisions are reproducible and never race the timer.
//! - **Consistent**: `rank(a, b) == Higher` implies `rank(b, a) == Lower`.

use crate::candidate::HunCandidate;

/// Three-way outcome of ranking `next` against `showing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ranking {
    /// `next` outranks `showing`.
    Higher,
    /// Neither candidate outranks the other.
    Equal,
    /// `showing` outranks `next`.
    Lower,
}

/// Timestamp-independent total ordering over heads-up candidates.
///
/// Supplied by the surrounding notification domain; the controller only
/// consumes the three-way result.
pub trait RankCandidates: Send + Sync {
    /// Ranks `next` (the queue head) against `showing` (the visible banner).
    fn rank(&self, next: &HunCandidate, showing: &HunCandidate) -> Ranking;
}

/// Default comparator over the candidates' non-time classification fields.
///
/// Orderings, most significant first: full-screen intent, critical call,
/// active remote input. Candidates tied on all three rank `Equal`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonTimeFieldsComparator;

impl RankCandidates for NonTimeFieldsComparator {
    fn rank(&self, next: &HunCandidate, showing: &HunCandidate) -> Ranking {
        let fields = |c: &HunCandidate| {
            (
                c.has_full_screen_intent(),
                c.is_critical_call(),
                c.has_remote_input_active(),
            )
        };
        // bool: true > false, so lexicographic tuple order matches the
        // significance order above.
        match fields(next).cmp(&fields(showing)) {
            std::cmp::Ordering::Greater => Ranking::Higher,
            std::cmp::Ordering::Equal => Ranking::Equal,
            std::cmp::Ordering::Less => Ranking::Lower,
        }
    }
}
