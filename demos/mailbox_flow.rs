//! # Example: driving the controller through the mailbox boundary
//!
//! Producers on any thread clone a handle and submit; one loop applies the
//! submissions serially, preserving channel order.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use hunvisor::{AvalancheController, ControllerConfig, HunCandidate, Mailbox, NullSink};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let controller =
        AvalancheController::new(ControllerConfig::default(), Arc::new(NullSink));
    let mailbox = Mailbox::new(controller, 64);
    let handle = mailbox.handle();

    let token = CancellationToken::new();
    let worker = tokio::spawn(mailbox.run(token.clone()));

    handle
        .update(
            HunCandidate::new("mail-1"),
            || println!("[view] show mail-1"),
            "post",
        )
        .await
        .unwrap();
    handle
        .update(
            HunCandidate::new("call-2").with_full_screen_intent(true),
            || println!("[view] show call-2"),
            "post",
        )
        .await
        .unwrap();

    let dwell = handle
        .duration("mail-1", Duration::from_millis(5000))
        .await
        .unwrap();
    println!("dwell for mail-1: {dwell:?}");

    handle
        .delete("mail-1", || println!("[view] tear down mail-1"), "timeout")
        .await
        .unwrap();

    token.cancel();
    let controller = worker.await.unwrap();
    println!("showing after shutdown: {:?}", controller.showing_key());
}
