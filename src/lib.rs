//! # hunvisor
//!
//! **Hunvisor** is an avalanche admission controller for heads-up notification
//! banners ("HUNs"): it guarantees at most one ephemeral banner is visible at a
//! time, serializes bursts of near-simultaneous notification arrivals into an
//! ordered sequence, and adaptively shortens the on-screen dwell time based on
//! the urgency of what is waiting behind the showing banner.
//!
//! ## Architecture
//! ```text
//!  Display collaborator (the only caller)
//!  │  posts / updates / removes notifications, owns views and the timer
//!  │
//!  │ update(candidate, action, label)
//!  │ delete(key, action, label)
//!  │ remaining_duration(key, requested)
//!  ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  AvalancheController                                         │
//! │  ┌──────────────┐   ┌──────────────────────────────────────┐ │
//! │  │ showing slot │   │ wait queue (FIFO)                    │ │
//! │  │ (at most 1)  │   │ candidate + [deferred actions...]    │ │
//! │  └──────────────┘   └──────────────────────────────────────┘ │
//! │  previous_key ── handed to the collaborator on promotion     │
//! │                                                              │
//! │  dwell policy (pure):        diagnostics (fire-and-forget):  │
//! │    RankCandidates ──► 5000 │ 1000 │ 500 │ hide   ──► sink    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller never owns a timer and has no notion of current time: the
//! collaborator reads the dwell duration, arms its own timer, and calls
//! `delete` on expiry.
//!
//! ## Guarantees
//! - A candidate key is in at most one of {showing slot, wait queue}.
//! - Actions attached to a waiting candidate run **exactly once**, in
//!   attachment order, at promotion — or never, if the candidate is deleted
//!   while waiting. Never partially, never twice.
//! - [`remaining_duration`](AvalancheController::remaining_duration) is a pure
//!   query; repeated calls without intervening mutations agree.
//!
//! ## Features
//! | Area            | Description                                            | Key types / traits                        |
//! |-----------------|--------------------------------------------------------|-------------------------------------------|
//! | **Candidates**  | Identity, pinned status, non-time classification.      | [`HunCandidate`], [`PinnedStatus`]        |
//! | **Priority**    | Pluggable timestamp-free ordering between candidates.  | [`RankCandidates`], [`Ranking`]           |
//! | **Dwell policy**| Pure decision table for remaining visibility time.     | [`dwell_duration`], [`RemainingDuration`] |
//! | **Controller**  | Showing slot + FIFO queue + deferred actions.          | [`AvalancheController`]                   |
//! | **Diagnostics** | Write-only event stream for host logging.              | [`DiagnosticsSink`], [`Event`]            |
//!
//! ## Optional features
//! - `logging`: exports [`LogSink`], a `log`-facade diagnostics sink.
//! - `mailbox`: exports [`Mailbox`]/[`ControllerHandle`], an async
//!   single-consumer boundary for hosts with multiple producer threads.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use hunvisor::{
//!     AvalancheController, ControllerConfig, HunCandidate, NullSink, RemainingDuration,
//! };
//!
//! let mut controller =
//!     AvalancheController::new(ControllerConfig::default(), Arc::new(NullSink));
//!
//! // First arrival shows immediately; its action runs before `update` returns.
//! controller.update(HunCandidate::new("msg-1"), || println!("show msg-1"), "post");
//!
//! // A burst arrives: the rest wait their turn.
//! controller.update(
//!     HunCandidate::new("call-2").with_full_screen_intent(true),
//!     || println!("show call-2"),
//!     "post",
//! );
//!
//! // The waiting call outranks the showing message, so the dwell shortens.
//! let dwell = controller.remaining_duration("msg-1", Duration::from_millis(5000));
//! assert_eq!(
//!     dwell,
//!     RemainingDuration::UpdatedDuration(Duration::from_millis(500))
//! );
//!
//! // Timer fires: the collaborator deletes the showing banner and the call
//! // is promoted, running its queued action.
//! controller.delete("msg-1", || println!("tear down msg-1"), "timeout");
//! assert_eq!(controller.showing_key(), Some("call-2"));
//! assert_eq!(controller.previous_key(), "msg-1");
//! ```

mod candidate;
mod controller;
mod events;
mod policy;

// ---- Public re-exports ----

pub use candidate::{HunCandidate, PinnedStatus};
pub use controller::{AvalancheController, ControllerConfig, DeferredAction};
pub use events::{DiagnosticsSink, Event, EventKind, NullSink};
pub use policy::{
    dwell_duration, DwellDecision, NonTimeFieldsComparator, RankCandidates, Ranking,
    RemainingDuration, HIGHER_PRIORITY_DWELL, SAME_PRIORITY_DWELL,
};

// Optional: expose a simple log-facade diagnostics sink.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use events::LogSink;

// Optional: expose the async mailbox boundary around the controller.
// Enable with: `--features mailbox`
#[cfg(feature = "mailbox")]
pub use controller::{ControllerHandle, Mailbox, SubmitError, Submission};
