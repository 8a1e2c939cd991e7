//! # Priority and dwell-time policy
//!
//! Two pure pieces, kept apart from the controller's mutable state so they can
//! be tested on their own:
//!
//! - [`RankCandidates`]: total, timestamp-independent ordering between two
//!   candidates, supplied by the notification-classification domain.
//! - [`dwell_duration`]: the branching table deciding how long the showing
//!   banner stays up given what is waiting behind it.

mod duration;
mod priority;

pub use duration::{
    dwell_duration, DwellDecision, RemainingDuration, HIGHER_PRIORITY_DWELL, SAME_PRIORITY_DWELL,
};
pub use priority::{NonTimeFieldsComparator, RankCandidates, Ranking};
