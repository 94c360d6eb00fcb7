//! Singleton pattern: one process-wide event log behind a lazy global
//! accessor, next to the injection-first consumer that usually beats it.

use std::sync::Arc;

use motif_catalogue::singleton::{AuditedCounter, EventLog};

fn main() {
    // the classic shape: every call site reaches the same instance
    EventLog::global().log("application started");
    EventLog::global().log("application still running");

    // the preferred shape: the capability arrives by constructor
    let log = Arc::new(EventLog::new(std::io::stdout()));
    let counter = AuditedCounter::new(log);
    counter.increment();
    counter.increment();
    println!("counter is at {}", counter.count());
}
