//! # Example: avalanche throttling of a notification burst
//!
//! Drives the controller synchronously the way a display collaborator would:
//! post a burst, read dwell durations, and delete on (simulated) timeouts.

use std::sync::Arc;
use std::time::Duration;

use hunvisor::{
    AvalancheController, ControllerConfig, HunCandidate, NullSink, RemainingDuration,
};

const AUTO_DISMISS: Duration = Duration::from_millis(5000);

fn show(key: &'static str) -> impl FnOnce() + Send + 'static {
    move || println!("[view] inflate and show {key}")
}

fn tear_down(key: &'static str) -> impl FnOnce() + Send + 'static {
    move || println!("[view] tear down {key}")
}

fn main() {
    let mut controller =
        AvalancheController::new(ControllerConfig::default(), Arc::new(NullSink));

    // A burst of three notifications lands at once.
    controller.update(HunCandidate::new("mail-1"), show("mail-1"), "post");
    controller.update(HunCandidate::new("chat-2"), show("chat-2"), "post");
    controller.update(
        HunCandidate::new("call-3").with_full_screen_intent(true),
        show("call-3"),
        "post",
    );

    println!("showing: {:?}", controller.showing_key());
    println!("waiting: {:?}", controller.waiting_keys());

    // The collaborator arms its timer from the controller's answer.
    let dwell = controller.remaining_duration("mail-1", AUTO_DISMISS);
    println!("dwell for mail-1: {dwell:?}");
    assert_eq!(
        dwell,
        RemainingDuration::UpdatedDuration(Duration::from_millis(1000))
    );

    // Timer fires: chat-2 is promoted, then call-3.
    controller.delete("mail-1", tear_down("mail-1"), "timeout");
    println!(
        "showing: {:?} (previous: {:?})",
        controller.showing_key(),
        controller.previous_key()
    );

    // call-3 outranks chat-2, so chat-2's dwell shortens further.
    let dwell = controller.remaining_duration("chat-2", AUTO_DISMISS);
    println!("dwell for chat-2: {dwell:?}");

    controller.delete("chat-2", tear_down("chat-2"), "timeout");
    controller.delete("call-3", tear_down("call-3"), "user dismissed");

    println!("{}", controller.dump());
}
