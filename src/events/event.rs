//! # Diagnostics event data model
//!
//! [`Event`] is a small value describing one controller transition or
//! decision. Fields beyond `kind`, `seq`, and `at` are optional and set with
//! `with_*` builder methods depending on the kind.
//!
//! ## Ordering guarantees
//! Each event carries a globally unique sequence number (`seq`) that increases
//! monotonically, so a sink that batches or reorders can restore the exact
//! emission order.
//!
//! ## Example
//! ```rust
//! use hunvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::Update, true)
//!     .with_key("notif|pkg|1")
//!     .with_label("showNotification")
//!     .with_outcome("untracked, show now");
//!
//! assert_eq!(ev.kind, EventKind::Update);
//! assert_eq!(ev.key.as_deref(), Some("notif|pkg|1"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of controller diagnostics events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An `update` call was handled.
    ///
    /// Sets:
    /// - `key`: candidate key
    /// - `label`: caller-supplied cause string
    /// - `outcome`: what the controller decided (shown / queued / appended)
    Update,

    /// A `delete` call was handled.
    ///
    /// Sets:
    /// - `key`: candidate key
    /// - `label`: caller-supplied cause string
    /// - `outcome`: what the controller decided (untracked / dequeued / vacated)
    Delete,

    /// A waiting candidate was promoted to the showing slot.
    ///
    /// Sets:
    /// - `key`: promoted candidate key
    Promoted,

    /// A waiting candidate was dropped without its actions running.
    ///
    /// Sets:
    /// - `key`: dropped candidate key
    Dropped,

    /// A dwell-duration query was answered.
    ///
    /// Sets:
    /// - `key`: showing candidate key
    /// - `duration_ms`: decided duration (0 for hide-immediately)
    /// - `outcome`: reason for the decision
    /// - `next_key`: queue head key, if any
    Duration,

    /// The wait queue was cleared administratively.
    QueueCleared,

    /// The runtime enable switch changed.
    ///
    /// Sets:
    /// - `outcome`: "enabled" or "disabled"
    EnabledChanged,
}

/// One controller diagnostics record.
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Whether avalanche throttling was enabled when the event fired.
    pub enabled: bool,

    /// Candidate key, if applicable.
    pub key: Option<Arc<str>>,
    /// Caller-supplied free-text cause string.
    pub label: Option<Arc<str>>,
    /// Human-readable outcome or reason.
    pub outcome: Option<Arc<str>>,
    /// Decided dwell duration in milliseconds (0 = hide immediately).
    pub duration_ms: Option<u64>,
    /// Key of the queue head, for duration decisions.
    pub next_key: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// next sequence number.
    pub fn new(kind: EventKind, enabled: bool) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            enabled,
            key: None,
            label: None,
            outcome: None,
            duration_ms: None,
            next_key: None,
        }
    }

    /// Attaches a candidate key.
    #[inline]
    pub fn with_key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attaches the caller-supplied cause string.
    #[inline]
    pub fn with_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a human-readable outcome.
    #[inline]
    pub fn with_outcome(mut self, outcome: impl Into<Arc<str>>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Attaches a decided dwell duration in milliseconds.
    #[inline]
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Attaches the queue head key.
    #[inline]
    pub fn with_next_key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.next_key = Some(key.into());
        self
    }
}
