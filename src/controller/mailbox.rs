//! # Single-consumer mailbox boundary
//!
//! The controller itself is synchronous and must be driven serially. Hosts
//! where candidate events originate on multiple threads wrap it in a
//! [`Mailbox`]: producers clone a [`ControllerHandle`] and submit
//! [`Submission`]s over a bounded channel; one loop drains them in order and
//! applies each to the controller. The channel is the serialization point, so
//! submission order is delivery order.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use hunvisor::{
//!     AvalancheController, ControllerConfig, HunCandidate, Mailbox, NullSink,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller = AvalancheController::new(ControllerConfig::default(), Arc::new(NullSink));
//! let mailbox = Mailbox::new(controller, 64);
//! let handle = mailbox.handle();
//!
//! let token = CancellationToken::new();
//! let worker = tokio::spawn(mailbox.run(token.clone()));
//!
//! handle
//!     .update(HunCandidate::new("A"), || {}, "showNotification")
//!     .await
//!     .unwrap();
//! let dwell = handle.duration("A", Duration::from_millis(5000)).await.unwrap();
//!
//! token.cancel();
//! let controller = worker.await.unwrap();
//! assert_eq!(controller.showing_key(), Some("A"));
//! # let _ = dwell;
//! # }
//! ```

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use crate::candidate::{HunCandidate, PinnedStatus};
use crate::policy::RemainingDuration;

use super::core::{AvalancheController, DeferredAction};
use super::error::SubmitError;

/// One unit of work for the mailbox loop.
pub enum Submission {
    /// Register interest in showing a candidate.
    Update {
        candidate: HunCandidate,
        action: DeferredAction,
        label: String,
    },
    /// Withdraw a candidate.
    Delete {
        key: String,
        action: DeferredAction,
        label: String,
    },
    /// Query the remaining dwell duration; answered over `reply`.
    Duration {
        key: String,
        requested: Duration,
        reply: oneshot::Sender<RemainingDuration>,
    },
    /// Update the requested pinned status of a tracked candidate.
    SetPinnedStatus { key: String, status: PinnedStatus },
    /// Discard all waiting entries.
    ClearQueue,
    /// Flip the runtime enable switch.
    SetEnabled(bool),
}

/// Handle for submitting work to the mailbox.
#[derive(Clone)]
pub struct ControllerHandle {
    tx: mpsc::Sender<Submission>,
}

impl ControllerHandle {
    /// Submits a unit of work (async, waits while the queue is full).
    pub async fn submit(&self, submission: Submission) -> Result<(), SubmitError> {
        self.tx
            .send(submission)
            .await
            .map_err(|_| SubmitError::Closed)
    }

    /// Submits without blocking (fails when the queue is full).
    pub fn try_submit(&self, submission: Submission) -> Result<(), SubmitError> {
        self.tx.try_send(submission).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SubmitError::Full,
            mpsc::error::TrySendError::Closed(_) => SubmitError::Closed,
        })
    }

    /// Convenience: submit an update.
    pub async fn update(
        &self,
        candidate: HunCandidate,
        action: impl FnOnce() + Send + 'static,
        label: impl Into<String>,
    ) -> Result<(), SubmitError> {
        self.submit(Submission::Update {
            candidate,
            action: Box::new(action),
            label: label.into(),
        })
        .await
    }

    /// Convenience: submit a delete.
    pub async fn delete(
        &self,
        key: impl Into<String>,
        action: impl FnOnce() + Send + 'static,
        label: impl Into<String>,
    ) -> Result<(), SubmitError> {
        self.submit(Submission::Delete {
            key: key.into(),
            action: Box::new(action),
            label: label.into(),
        })
        .await
    }

    /// Convenience: query the remaining dwell duration.
    ///
    /// Answered after every earlier submission from this handle has been
    /// applied, so it doubles as an ordering barrier in tests.
    pub async fn duration(
        &self,
        key: impl Into<String>,
        requested: Duration,
    ) -> Result<RemainingDuration, SubmitError> {
        let (reply, rx) = oneshot::channel();
        self.submit(Submission::Duration {
            key: key.into(),
            requested,
            reply,
        })
        .await?;
        rx.await.map_err(|_| SubmitError::Closed)
    }

    /// Convenience: update a tracked candidate's requested pinned status.
    pub async fn set_pinned_status(
        &self,
        key: impl Into<String>,
        status: PinnedStatus,
    ) -> Result<(), SubmitError> {
        self.submit(Submission::SetPinnedStatus {
            key: key.into(),
            status,
        })
        .await
    }

    /// Convenience: clear the wait queue.
    pub async fn clear_queue(&self) -> Result<(), SubmitError> {
        self.submit(Submission::ClearQueue).await
    }

    /// Convenience: flip the runtime enable switch.
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), SubmitError> {
        self.submit(Submission::SetEnabled(enabled)).await
    }
}

/// Owns the controller and drains submissions serially.
pub struct Mailbox {
    controller: AvalancheController,
    tx: mpsc::Sender<Submission>,
    rx: mpsc::Receiver<Submission>,
}

impl Mailbox {
    /// Wraps a controller with a bounded submission queue.
    pub fn new(controller: AvalancheController, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self { controller, tx, rx }
    }

    /// Returns a cloneable handle for producers.
    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle {
            tx: self.tx.clone(),
        }
    }

    /// Runs the drain loop until cancelled or all handles are dropped,
    /// then returns the controller for inspection or reuse.
    pub async fn run(self, token: CancellationToken) -> AvalancheController {
        let Self {
            mut controller,
            tx,
            mut rx,
        } = self;
        // Drop our own sender so `recv` sees closure once producers are gone.
        drop(tx);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                maybe = rx.recv() => match maybe {
                    Some(submission) => apply(&mut controller, submission),
                    None => break,
                },
            }
        }

        controller
    }
}

fn apply(controller: &mut AvalancheController, submission: Submission) {
    match submission {
        Submission::Update {
            candidate,
            action,
            label,
        } => controller.update(candidate, action, &label),
        Submission::Delete { key, action, label } => controller.delete(&key, action, &label),
        Submission::Duration {
            key,
            requested,
            reply,
        } => {
            // Receiver may have given up; dropped replies are fine.
            let _ = reply.send(controller.remaining_duration(&key, requested));
        }
        Submission::SetPinnedStatus { key, status } => {
            controller.set_requested_pinned_status(&key, status);
        }
        Submission::ClearQueue => controller.clear_queue(),
        Submission::SetEnabled(enabled) => controller.set_enabled(enabled),
    }
}
