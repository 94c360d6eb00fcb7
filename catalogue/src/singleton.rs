//! Singleton, and the injection-first shape that usually replaces it.
//!
//! The classic formulation is a process-wide logger reached through a
//! global accessor. [`EventLog::global`] provides that, lazily initialized
//! and race-free. The preferred shape is [`AuditedCounter`]: the log
//! capability arrives through the constructor, so consumers stay testable
//! against a private log instead of sharing mutable process state.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// An append-only event log writing one line per event to an injected sink.
pub struct EventLog {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl EventLog {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self { sink: Mutex::new(Box::new(sink)) }
    }

    /// The process-wide instance, writing to stdout. Created on first use;
    /// every call returns the same instance.
    pub fn global() -> &'static EventLog {
        static INSTANCE: OnceLock<EventLog> = OnceLock::new();
        INSTANCE.get_or_init(|| EventLog::new(std::io::stdout()))
    }

    /// Append one line. Writes are best-effort; the log never fails its
    /// caller.
    pub fn log(&self, message: &str) {
        let mut sink = self.sink.lock().expect("log sink poisoned");
        let _ = writeln!(sink, "[log]: {message}");
    }
}

/// A counter that audits every increment to a log it was handed, not to the
/// global.
pub struct AuditedCounter {
    log: Arc<EventLog>,
    count: AtomicU64,
}

impl AuditedCounter {
    pub fn new(log: Arc<EventLog>) -> Self {
        Self { log, count: AtomicU64::new(0) }
    }

    pub fn increment(&self) -> u64 {
        let count = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        self.log.log(&format!("counter incremented to {count}"));
        count
    }

    pub fn count(&self) -> u64 { self.count.load(Ordering::Relaxed) }
}
