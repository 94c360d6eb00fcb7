use std::sync::Arc;

use crate::{error::UpdateError, measurement::Measurement};

/// The subscriber capability: one operation, invoked with each new reading
/// on the thread that changed the state, in registration order.
///
/// `update` should return promptly. Delivery is synchronous, so a slow
/// observer stalls the fan-out for everyone registered after it; observers
/// that need to do real work should hand the reading off to a channel.
pub trait Observer: Send + Sync {
    /// Receive the current reading.
    ///
    /// Errors are logged by the station and do not stop the fan-out.
    fn update(&self, reading: Measurement) -> Result<(), UpdateError>;
}

/// An observer that forwards each reading to a callback.
pub struct CallbackObserver {
    callback: Box<dyn Fn(Measurement) + Send + Sync>,
}

impl CallbackObserver {
    pub fn new<F>(callback: F) -> Self
    where F: Fn(Measurement) + Send + Sync + 'static {
        Self { callback: Box::new(callback) }
    }
}

impl Observer for CallbackObserver {
    fn update(&self, reading: Measurement) -> Result<(), UpdateError> {
        (self.callback)(reading);
        Ok(())
    }
}

/// Conversion into a registrable observer handle, so closures and channel
/// senders can stand in for hand-written [`Observer`] implementations.
pub trait IntoObserver {
    fn into_observer(self) -> Arc<dyn Observer>;
}

impl<F> IntoObserver for F
where F: Fn(Measurement) + Send + Sync + 'static
{
    fn into_observer(self) -> Arc<dyn Observer> { Arc::new(CallbackObserver::new(self)) }
}

impl<O> IntoObserver for Arc<O>
where O: Observer + 'static
{
    fn into_observer(self) -> Arc<dyn Observer> { self }
}

impl Observer for std::sync::mpsc::Sender<Measurement> {
    fn update(&self, reading: Measurement) -> Result<(), UpdateError> {
        self.send(reading).map_err(|_| UpdateError::ChannelClosed)
    }
}

impl IntoObserver for std::sync::mpsc::Sender<Measurement> {
    fn into_observer(self) -> Arc<dyn Observer> { Arc::new(self) }
}

#[cfg(feature = "tokio")]
impl Observer for tokio::sync::mpsc::UnboundedSender<Measurement> {
    fn update(&self, reading: Measurement) -> Result<(), UpdateError> {
        self.send(reading).map_err(|_| UpdateError::ChannelClosed)
    }
}

#[cfg(feature = "tokio")]
impl IntoObserver for tokio::sync::mpsc::UnboundedSender<Measurement> {
    fn into_observer(self) -> Arc<dyn Observer> { Arc::new(self) }
}
