#![allow(unused)]

use std::sync::{Arc, Mutex};

use motif_observe::{CallbackObserver, Measurement, Observer, UpdateError};

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn log() -> Log { Arc::new(Mutex::new(Vec::new())) }

/// Observer appending `label:temperature/humidity` to `log` on each update.
pub fn probe(label: &'static str, log: &Log) -> Arc<dyn Observer> {
    let log = log.clone();
    Arc::new(CallbackObserver::new(move |reading: Measurement| {
        log.lock().unwrap().push(format!("{label}:{}/{}", reading.temperature, reading.humidity));
    }))
}

pub fn drain(log: &Log) -> Vec<String> { std::mem::take(&mut *log.lock().unwrap()) }

/// Observer that fails every update, for exercising the log-and-continue
/// policy.
pub struct Failing;

impl Observer for Failing {
    fn update(&self, _reading: Measurement) -> Result<(), UpdateError> {
        Err(UpdateError::Other("deliberate failure".into()))
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
