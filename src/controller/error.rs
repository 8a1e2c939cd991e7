use thiserror::Error;

/// Error returned by [`ControllerHandle`](crate::ControllerHandle) submissions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Submission queue is full (try again later or use async `submit`).
    #[error("submission queue full")]
    Full,

    /// Mailbox channel is closed (the mailbox loop has shut down).
    #[error("mailbox closed")]
    Closed,
}
