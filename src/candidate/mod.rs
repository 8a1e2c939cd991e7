//! # Candidate data model
//!
//! A [`HunCandidate`] is one notification eligible to be shown as a heads-up
//! banner. The controller never constructs candidates; the display collaborator
//! creates them and hands them over on [`update`](crate::AvalancheController::update).

mod hun;
mod pinned;

pub use hun::HunCandidate;
pub use pinned::PinnedStatus;
