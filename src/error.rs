use thiserror::Error;

/// Failures when taking commands out of, or putting them into, a queue
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// There was no command to take
    #[error("queue is empty")]
    EmptyQueue,

    /// The other end of the channel has gone away
    #[error("command channel disconnected")]
    Disconnected,

    /// No command arrived within the allotted time
    #[error("timed out waiting for a command")]
    Timeout,
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, QueueError>;
