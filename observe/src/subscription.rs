use std::sync::{Arc, Weak};

use tracing::debug;

use crate::{
    observer::Observer,
    registry::{remove_entry, Entries, ObserverId},
};

/// Keeps a closure- or channel-backed observer alive and registered.
///
/// The registry only ever holds a weak handle, so the guard is what owns the
/// observer. Dropping the guard deregisters it; when the station is already
/// gone the drop is a no-op.
#[must_use = "readings stop arriving when the guard is dropped"]
pub struct SubscriptionGuard {
    observer: Arc<dyn Observer>,
    entries: Weak<Entries>,
}

impl SubscriptionGuard {
    pub(crate) fn new(observer: Arc<dyn Observer>, entries: Weak<Entries>) -> Self {
        Self { observer, entries }
    }

    /// Identity of the observer this guard keeps registered.
    pub fn observer_id(&self) -> ObserverId { ObserverId::of(&self.observer) }

    /// Deregister now rather than at end of scope.
    pub fn cancel(self) {}
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            let id = ObserverId::of(&self.observer);
            remove_entry(&entries, id);
            debug!("subscription guard for {id} dropped");
        }
    }
}

impl std::fmt::Debug for SubscriptionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubscriptionGuard({})", self.observer_id())
    }
}
