//! # Avalanche admission controller
//!
//! The controller owns a single **showing slot** and a FIFO **wait queue**.
//! At any given time at most one candidate is showing; everything else that
//! asked to show waits its turn with its deferred actions attached.
//!
//! ## Invariants
//! - A candidate key is in at most one of {showing slot, wait queue}.
//! - A queued candidate's action list is never empty.
//! - Deferred actions run exactly once (all of them, at promotion) or never
//!   (cancellation while waiting) — never partially and never twice.

pub mod config;

mod core;
mod queue;

#[cfg(feature = "mailbox")]
pub mod error;
#[cfg(feature = "mailbox")]
mod mailbox;

pub use config::ControllerConfig;
pub use self::core::{AvalancheController, DeferredAction};

#[cfg(feature = "mailbox")]
pub use error::SubmitError;
#[cfg(feature = "mailbox")]
pub use mailbox::{ControllerHandle, Mailbox, Submission};
