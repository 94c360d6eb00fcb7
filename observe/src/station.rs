use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use crate::{
    measurement::Measurement,
    observer::{IntoObserver, Observer},
    registry::{ObserverId, ObserverRegistry},
    subscription::SubscriptionGuard,
};

/// The subject: current reading plus the ordered observer registry, fanning
/// every state change out synchronously to all registered observers.
///
/// Fan-outs are serialized. A dedicated mutex covers "store the reading,
/// then notify everyone", so concurrent writers cannot interleave and every
/// observer sees readings in one consistent order. The registry lock is
/// never held while observer callbacks run, which makes it safe to register
/// and deregister from inside `update` (taking effect at the next fan-out).
/// Calling [`set_measurements`](Self::set_measurements) or
/// [`notify`](Self::notify) from inside `update` deadlocks.
pub struct WeatherStation {
    current: RwLock<Option<Measurement>>,
    registry: ObserverRegistry,
    fanout: Mutex<()>,
}

impl WeatherStation {
    /// A station with no reading yet and no observers.
    pub fn new() -> Self {
        Self { current: RwLock::new(None), registry: ObserverRegistry::new(), fanout: Mutex::new(()) }
    }

    /// Add `observer` to the registry. Only a weak handle is kept: the
    /// caller remains responsible for keeping the observer alive.
    ///
    /// Idempotent by identity, so re-registering the same handle keeps its
    /// original position and changes nothing. There are no error conditions.
    pub fn register(&self, observer: &Arc<dyn Observer>) {
        self.registry.insert(observer);
    }

    /// Remove `observer` from the registry. Once this returns the observer
    /// receives no further notifications.
    ///
    /// A no-op, not an error, when the observer was never registered or was
    /// already removed.
    pub fn deregister(&self, observer: &Arc<dyn Observer>) {
        self.registry.remove(observer);
    }

    /// Register a closure, channel sender, or other [`IntoObserver`] value,
    /// and keep it alive for the life of the returned guard.
    ///
    /// Dropping the guard deregisters the observer.
    pub fn subscribe<O>(&self, observer: O) -> SubscriptionGuard
    where O: IntoObserver {
        let observer = observer.into_observer();
        self.registry.insert(&observer);
        SubscriptionGuard::new(observer, self.registry.downgrade())
    }

    /// Store a new reading, then deliver it to every registered observer in
    /// registration order. Returns only after all observers have been
    /// updated.
    pub fn set_measurements(&self, temperature: f32, humidity: f32) {
        let reading = Measurement::new(temperature, humidity);
        let _fanout = self.fanout.lock().expect("fan-out lock poisoned");
        *self.current.write().expect("reading lock poisoned") = Some(reading);
        debug!("measurements updated to {reading}");
        self.fan_out(reading);
    }

    /// Re-deliver the current reading to every registered observer, in
    /// registration order.
    ///
    /// Idempotent with respect to state. Before the first reading there is
    /// nothing to deliver and no observer is invoked.
    pub fn notify(&self) {
        let _fanout = self.fanout.lock().expect("fan-out lock poisoned");
        let Some(reading) = *self.current.read().expect("reading lock poisoned") else {
            debug!("notify before the first reading, nothing to deliver");
            return;
        };
        self.fan_out(reading);
    }

    /// The most recent reading, if any has been recorded.
    pub fn measurement(&self) -> Option<Measurement> {
        *self.current.read().expect("reading lock poisoned")
    }

    /// Number of registered observers that are still alive.
    pub fn observer_count(&self) -> usize { self.registry.len() }

    fn fan_out(&self, reading: Measurement) {
        for observer in self.registry.snapshot() {
            if let Err(error) = observer.update(reading) {
                warn!("observer {} update failed, continuing fan-out: {error}", ObserverId::of(&observer));
            }
        }
    }
}

impl Default for WeatherStation {
    fn default() -> Self { Self::new() }
}
