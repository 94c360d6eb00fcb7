use thiserror::Error;

/// Error surfaced by an observer's `update`.
///
/// The station treats these as diagnostics: a failure is logged and the
/// fan-out continues with the next observer, so one misbehaving subscriber
/// cannot block delivery to the others.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// An observer could not write to its output sink.
    #[error("sink write failed: {0}")]
    Sink(#[from] std::io::Error),
    /// A channel-backed observer whose receiving end is gone.
    #[error("subscriber channel disconnected")]
    ChannelClosed,
    /// Observer-specific failure.
    #[error("observer error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}
