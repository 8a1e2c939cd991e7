//! # Controller core
//!
//! [`AvalancheController`] serializes bursts of near-simultaneous heads-up
//! requests into an ordered sequence: one candidate shows, the rest wait in
//! FIFO order with their deferred actions attached, and the dwell policy
//! decides how quickly the showing one makes way.
//!
//! ## Driving model
//! All operations are plain synchronous methods taking `&mut self` (or `&self`
//! for queries), so the "one serial caller" precondition is enforced by the
//! borrow checker rather than by locks or debug assertions. Hosts with
//! multiple producer threads should marshal calls through the
//! [`Mailbox`](crate::Mailbox) boundary.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use crate::candidate::{HunCandidate, PinnedStatus};
use crate::events::{DiagnosticsSink, Event, EventKind};
use crate::policy::{dwell_duration, NonTimeFieldsComparator, RankCandidates, RemainingDuration};

use super::config::ControllerConfig;
use super::queue::WaitQueue;

/// A deferred "show" or "tear down" callback, owned by the controller until it
/// either runs exactly once or is dropped unrun on cancellation.
pub type DeferredAction = Box<dyn FnOnce() + Send>;

/// Admission controller guaranteeing at most one visible heads-up banner.
///
/// Owns the showing slot, the wait queue, and the predecessor key used by the
/// display collaborator for transition continuity. Holds no timers and no
/// notion of current time: the collaborator reads
/// [`remaining_duration`](Self::remaining_duration), arms its own timer, and
/// calls [`delete`](Self::delete) on expiry.
pub struct AvalancheController {
    config: ControllerConfig,
    enabled: bool,
    comparator: Arc<dyn RankCandidates>,
    sink: Arc<dyn DiagnosticsSink>,

    showing: Option<HunCandidate>,
    queue: WaitQueue,
    /// Key of the most recently vacated showing candidate; "" = no predecessor.
    previous_key: String,
}

impl AvalancheController {
    /// Creates a controller with the default priority comparator.
    pub fn new(config: ControllerConfig, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            enabled: config.enabled,
            config,
            comparator: Arc::new(NonTimeFieldsComparator),
            sink,
            showing: None,
            queue: WaitQueue::new(),
            previous_key: String::new(),
        }
    }

    /// Replaces the priority comparator (a policy of the notification domain).
    pub fn with_comparator(mut self, comparator: Arc<dyn RankCandidates>) -> Self {
        self.comparator = comparator;
        self
    }

    // === Core operations ===

    /// Registers interest in showing `candidate`, attaching `action` as the
    /// callback to run when it is that candidate's turn.
    ///
    /// - Already showing: runs `action` immediately (in-place content update).
    /// - Already waiting: appends `action` to the candidate's list; queue
    ///   position is unchanged and nothing runs yet.
    /// - Untracked with both slot and queue empty: promotes directly and runs
    ///   `action` before returning.
    /// - Untracked otherwise: enqueued at the FIFO tail with `[action]`.
    ///
    /// A repeated `update` for a tracked key also refreshes the stored
    /// candidate's requested pinned status from the one passed in. `label` is
    /// a free-text cause string carried into diagnostics only.
    pub fn update(
        &mut self,
        candidate: HunCandidate,
        action: impl FnOnce() + Send + 'static,
        label: &str,
    ) {
        let key = candidate.key_arc();

        if !self.enabled {
            self.emit_update(&key, label, "disabled, run now");
            action();
            return;
        }

        if self.is_showing(&key) {
            let status = candidate.requested_pinned_status();
            if let Some(showing) = self.showing.as_mut() {
                showing.set_requested_pinned_status(status);
            }
            self.emit_update(&key, label, "already showing, run now");
            action();
        } else if let Some(entry) = self.queue.get_mut(&key) {
            entry
                .candidate
                .set_requested_pinned_status(candidate.requested_pinned_status());
            entry.actions.push(Box::new(action));
            self.emit_update(&key, label, "already waiting, action attached");
        } else if self.showing.is_none() && self.queue.is_empty() {
            self.showing = Some(candidate);
            self.emit_update(&key, label, "untracked, show now");
            action();
        } else {
            self.queue.push_back(candidate, Box::new(action));
            self.emit_update(&key, label, "untracked, wait");
        }
    }

    /// Withdraws `key` from consideration, running `action` only when removal
    /// actually needs caller-side work (untracked cleanup, or tearing down the
    /// visible banner).
    ///
    /// - Untracked: runs `action` immediately; no state changes.
    /// - Waiting: the queue entry is removed and its accumulated actions are
    ///   dropped unrun (a display that never happened is silently cancelled);
    ///   `action` itself does not run either.
    /// - Showing: runs `action`, vacates the slot, then promotes the queue
    ///   head if any — running **all** of its accumulated actions in
    ///   attachment order and recording this key as the predecessor. With an
    ///   empty queue the predecessor key resets to `""`.
    ///
    /// A deleted key is fully forgotten; a later `update` with the same key is
    /// brand new.
    pub fn delete(&mut self, key: &str, action: impl FnOnce() + Send + 'static, label: &str) {
        if self.queue.contains(key) {
            // Drop the waiting entry; its queued "show" actions are moot now.
            self.queue.remove(key);
            self.emit(Event::new(EventKind::Dropped, self.enabled).with_key(key.to_string()));
            self.emit_delete(key, label, "removed from waiting, actions dropped");
            return;
        }

        if self.is_showing(key) {
            self.emit_delete(key, label, "vacating showing slot");
            self.showing = None;
            action();

            match self.queue.pop_front() {
                Some(entry) => {
                    self.previous_key = key.to_string();
                    let promoted_key = entry.candidate.key_arc();
                    self.showing = Some(entry.candidate);
                    self.emit(
                        Event::new(EventKind::Promoted, self.enabled).with_key(promoted_key),
                    );
                    for queued_action in entry.actions {
                        queued_action();
                    }
                }
                None => {
                    self.previous_key.clear();
                }
            }
            return;
        }

        // Untracked: nothing for the scheduler to undo, but the caller still
        // performs its own cleanup.
        self.emit_delete(key, label, "untracked, run now");
        action();
    }

    /// Answers how long `key` should remain visible given what is waiting.
    ///
    /// Pure query: repeated calls with no intervening `update`/`delete` yield
    /// the same result. For a key that is not showing, or with nothing
    /// waiting, the requested duration comes back unchanged.
    pub fn remaining_duration(&self, key: &str, requested: Duration) -> RemainingDuration {
        let (decision_duration, reason) = match (&self.showing, self.queue.front()) {
            (Some(showing), Some(next)) if showing.key() == key => {
                let decision = dwell_duration(
                    showing,
                    Some(next),
                    requested,
                    self.config.respect_user_pinning,
                    self.comparator.as_ref(),
                );
                (decision.duration, decision.reason)
            }
            (Some(showing), None) if showing.key() == key => {
                (RemainingDuration::UpdatedDuration(requested), "nothing waiting")
            }
            _ => (RemainingDuration::UpdatedDuration(requested), "not showing"),
        };

        let mut event = Event::new(EventKind::Duration, self.enabled)
            .with_key(key.to_string())
            .with_duration_ms(decision_duration.as_millis() as u64)
            .with_outcome(reason);
        if let Some(next) = self.queue.front() {
            event = event.with_next_key(next.key_arc());
        }
        self.emit(event);

        decision_duration
    }

    /// Discards every waiting entry without running any actions. The showing
    /// slot is untouched.
    pub fn clear_queue(&mut self) {
        for key in self.queue.clear() {
            self.emit(Event::new(EventKind::Dropped, self.enabled).with_key(key));
        }
        self.emit(Event::new(EventKind::QueueCleared, self.enabled));
    }

    // === Runtime switch ===

    /// Enables or disables avalanche throttling at runtime.
    ///
    /// Disabling clears the wait queue (dropping its actions unrun); the
    /// showing slot keeps going through the normal `delete` path. While
    /// disabled, `update` runs its action immediately without tracking.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.emit(
            Event::new(EventKind::EnabledChanged, self.enabled)
                .with_outcome(if enabled { "enabled" } else { "disabled" }),
        );
        if !enabled {
            self.clear_queue();
        }
    }

    /// Whether avalanche throttling is currently enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // === Introspection for the display collaborator ===

    /// Key of the showing candidate, if any.
    pub fn showing_key(&self) -> Option<&str> {
        self.showing.as_ref().map(|c| c.key())
    }

    /// Key of the most recently vacated showing candidate, "" if none.
    ///
    /// Used by the display collaborator for transition continuity.
    pub fn previous_key(&self) -> &str {
        &self.previous_key
    }

    /// Whether `key` is waiting in the queue.
    pub fn is_waiting(&self, key: &str) -> bool {
        self.queue.contains(key)
    }

    /// Whether `key` is tracked at all (showing or waiting).
    pub fn is_tracked(&self, key: &str) -> bool {
        self.is_showing(key) || self.queue.contains(key)
    }

    /// Keys of all waiting candidates, in FIFO order.
    pub fn waiting_keys(&self) -> Vec<String> {
        self.queue.keys()
    }

    /// The waiting candidate with the given key, if any.
    pub fn waiting_candidate(&self, key: &str) -> Option<&HunCandidate> {
        self.queue.get(key)
    }

    /// All waiting candidates, in FIFO order.
    pub fn waiting_candidates(&self) -> Vec<&HunCandidate> {
        self.queue.candidates().collect()
    }

    /// Updates the requested pinned status of a tracked candidate in place.
    ///
    /// Returns `false` when the key is not tracked.
    pub fn set_requested_pinned_status(&mut self, key: &str, status: PinnedStatus) -> bool {
        if let Some(showing) = self.showing.as_mut() {
            if showing.key() == key {
                showing.set_requested_pinned_status(status);
                return true;
            }
        }
        if let Some(entry) = self.queue.get_mut(key) {
            entry.candidate.set_requested_pinned_status(status);
            return true;
        }
        false
    }

    /// Human-readable state snapshot for debug dumps.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "AvalancheController:");
        let _ = writeln!(out, "  enabled: {}", self.enabled);
        let _ = writeln!(
            out,
            "  showing: {}",
            self.showing_key().unwrap_or("<none>")
        );
        let _ = writeln!(out, "  previous: {:?}", self.previous_key);
        let _ = writeln!(out, "  waiting ({}):", self.queue.len());
        for candidate in self.queue.candidates() {
            let _ = writeln!(
                out,
                "    {} pinned={:?} fsi={}",
                candidate.key(),
                candidate.requested_pinned_status(),
                candidate.has_full_screen_intent(),
            );
        }
        out
    }

    // === Internals ===

    fn is_showing(&self, key: &str) -> bool {
        self.showing.as_ref().is_some_and(|c| c.key() == key)
    }

    fn emit(&self, event: Event) {
        self.sink.on_event(&event);
    }

    fn emit_update(&self, key: &Arc<str>, label: &str, outcome: &str) {
        self.emit(
            Event::new(EventKind::Update, self.enabled)
                .with_key(Arc::clone(key))
                .with_label(label.to_string())
                .with_outcome(outcome.to_string()),
        );
    }

    fn emit_delete(&self, key: &str, label: &str, outcome: &str) {
        self.emit(
            Event::new(EventKind::Delete, self.enabled)
                .with_key(key.to_string())
                .with_label(label.to_string())
                .with_outcome(outcome.to_string()),
        );
    }
}
