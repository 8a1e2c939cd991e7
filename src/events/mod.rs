//! # Diagnostics events
//!
//! Every controller state transition produces an [`Event`] that is handed,
//! fire-and-forget, to a [`DiagnosticsSink`]. The sink is write-only from the
//! controller's point of view: it has no return value and must never block or
//! panic back into the caller.

mod event;
mod sink;

pub use event::{Event, EventKind};
pub use sink::{DiagnosticsSink, NullSink};

#[cfg(feature = "logging")]
pub use sink::LogSink;
