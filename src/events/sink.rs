//! # Diagnostics sink trait
//!
//! [`DiagnosticsSink`] is the extension point for routing controller events to
//! the host's logging facility.
//!
//! ## Contract
//! - Called synchronously from inside controller operations: implementations
//!   must be cheap and **must not block**, and must not panic back into the
//!   controller.
//! - One-way: there is no return value and no way to influence the controller.

use super::event::Event;

/// Write-only consumer of controller diagnostics events.
pub trait DiagnosticsSink: Send + Sync {
    /// Handles a single event. Fire-and-forget; must not block.
    fn on_event(&self, event: &Event);

    /// Human-readable sink name (for host-side bookkeeping).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn on_event(&self, _event: &Event) {}

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Sink that formats events through the `log` facade.
///
/// Enabled via the `logging` feature. Useful for demos and hosts that already
/// route `log` records somewhere non-blocking.
#[cfg(feature = "logging")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

#[cfg(feature = "logging")]
impl DiagnosticsSink for LogSink {
    fn on_event(&self, e: &Event) {
        use super::event::EventKind;

        let key = e.key.as_deref().unwrap_or("");
        match e.kind {
            EventKind::Update => log::info!(
                "{}\n=> AC[enabled:{}] update: {}\n=> {}",
                e.label.as_deref().unwrap_or(""),
                e.enabled,
                key,
                e.outcome.as_deref().unwrap_or(""),
            ),
            EventKind::Delete => log::info!(
                "{}\n=> AC[enabled:{}] delete: {}\n=> {}",
                e.label.as_deref().unwrap_or(""),
                e.enabled,
                key,
                e.outcome.as_deref().unwrap_or(""),
            ),
            EventKind::Promoted => log::info!("[AC] show next {key}"),
            EventKind::Dropped => log::info!("[AC] drop waiting {key}"),
            EventKind::Duration => log::info!(
                "[AC] {} | {} ms | {} {}",
                key,
                e.duration_ms.unwrap_or(0),
                e.outcome.as_deref().unwrap_or(""),
                e.next_key.as_deref().unwrap_or(""),
            ),
            EventKind::QueueCleared => log::info!("[AC] queue cleared"),
            EventKind::EnabledChanged => {
                log::info!("[AC] {}", e.outcome.as_deref().unwrap_or(""))
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
