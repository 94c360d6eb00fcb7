use std::sync::{Arc, RwLock, Weak};

use tracing::{debug, warn};

use crate::observer::Observer;

/// The registry's backing storage, shared weakly with subscription guards so
/// a guard outliving the station can still no-op cleanly.
pub(crate) type Entries = RwLock<Vec<Weak<dyn Observer>>>;

/// Identity of a registered observer: the address of its `Arc` allocation.
///
/// Compares the thin data pointer rather than the fat trait-object pointer,
/// so identity is stable even when the same allocation is reached through
/// duplicate vtables. An allocation's address stays reserved while any
/// `Arc` or `Weak` to it exists, and every entry holds a `Weak`, so a live
/// entry can never alias a reused address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(usize);

impl ObserverId {
    pub fn of(observer: &Arc<dyn Observer>) -> Self {
        Self(Arc::as_ptr(observer) as *const () as usize)
    }

    fn of_weak(observer: &Weak<dyn Observer>) -> Self {
        Self(Weak::as_ptr(observer) as *const () as usize)
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "O-{:x}", self.0) }
}

/// Ordered set of non-owning observer handles.
///
/// The registry never keeps an observer alive: entries are `Weak`, and the
/// lifetime of each observer belongs to whoever created it. Traversal yields
/// live observers in registration order; entries whose observer has been
/// dropped without deregistering are pruned as they are encountered.
pub struct ObserverRegistry {
    entries: Arc<Entries>,
}

impl ObserverRegistry {
    pub fn new() -> Self { Self { entries: Arc::new(RwLock::new(Vec::new())) } }

    /// Append a handle for `observer`.
    ///
    /// Idempotent by identity: re-inserting an already registered observer
    /// keeps its original position and changes nothing. Returns whether a
    /// new entry was added. Never fails.
    pub fn insert(&self, observer: &Arc<dyn Observer>) -> bool {
        let id = ObserverId::of(observer);
        let mut entries = self.entries.write().expect("registry lock poisoned");
        if entries.iter().any(|entry| ObserverId::of_weak(entry) == id) {
            debug!("observer {id} already registered, keeping original position");
            return false;
        }
        entries.push(Arc::downgrade(observer));
        debug!("observer {id} registered ({} total)", entries.len());
        true
    }

    /// Remove the entry matching `observer`'s identity.
    ///
    /// A no-op, not an error, when no such entry exists. Returns whether an
    /// entry was removed.
    pub fn remove(&self, observer: &Arc<dyn Observer>) -> bool {
        remove_entry(&self.entries, ObserverId::of(observer))
    }

    /// Upgrade every live entry, in registration order, pruning entries
    /// whose observer has been dropped without deregistering.
    pub fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        let mut entries = self.entries.write().expect("registry lock poisoned");
        let mut live = Vec::with_capacity(entries.len());
        entries.retain(|entry| match entry.upgrade() {
            Some(observer) => {
                live.push(observer);
                true
            }
            None => {
                warn!("observer {} dropped without deregistering, pruning", ObserverId::of_weak(entry));
                false
            }
        });
        live
    }

    /// Number of registered observers that are still alive.
    pub fn len(&self) -> usize {
        self.entries.read().expect("registry lock poisoned").iter().filter(|entry| entry.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Whether `observer` currently has an entry.
    pub fn contains(&self, observer: &Arc<dyn Observer>) -> bool {
        let id = ObserverId::of(observer);
        self.entries.read().expect("registry lock poisoned").iter().any(|entry| ObserverId::of_weak(entry) == id)
    }

    pub(crate) fn downgrade(&self) -> Weak<Entries> { Arc::downgrade(&self.entries) }
}

impl Default for ObserverRegistry {
    fn default() -> Self { Self::new() }
}

/// Shared removal path for [`ObserverRegistry::remove`] and dropped
/// subscription guards.
pub(crate) fn remove_entry(entries: &Entries, id: ObserverId) -> bool {
    let mut entries = entries.write().expect("registry lock poisoned");
    let before = entries.len();
    entries.retain(|entry| ObserverId::of_weak(entry) != id);
    let removed = entries.len() < before;
    if removed {
        debug!("observer {id} deregistered ({} remaining)", entries.len());
    }
    removed
}
