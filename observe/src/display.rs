use std::io::Write;
use std::sync::Mutex;

use crate::{error::UpdateError, measurement::Measurement, observer::Observer};

/// Renders each reading to its output sink as it arrives.
///
/// The sink is injected, so demos hand it stdout and tests hand it a buffer.
pub struct ConditionsDisplay<W: Write + Send> {
    sink: Mutex<W>,
}

impl<W: Write + Send> ConditionsDisplay<W> {
    pub fn new(sink: W) -> Self { Self { sink: Mutex::new(sink) } }
}

impl<W: Write + Send> Observer for ConditionsDisplay<W> {
    fn update(&self, reading: Measurement) -> Result<(), UpdateError> {
        let mut sink = self.sink.lock().expect("sink lock poisoned");
        writeln!(sink, "Current conditions: {reading}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RunningStats {
    count: u32,
    temperature_sum: f32,
    temperature_min: f32,
    temperature_max: f32,
    humidity_sum: f32,
}

impl RunningStats {
    fn record(&mut self, reading: Measurement) {
        if self.count == 0 {
            self.temperature_min = reading.temperature;
            self.temperature_max = reading.temperature;
        } else {
            self.temperature_min = self.temperature_min.min(reading.temperature);
            self.temperature_max = self.temperature_max.max(reading.temperature);
        }
        self.count += 1;
        self.temperature_sum += reading.temperature;
        self.humidity_sum += reading.humidity;
    }
}

/// Aggregates every reading it has seen and renders a summary line per
/// update.
pub struct StatisticsDisplay<W: Write + Send> {
    inner: Mutex<Inner<W>>,
}

struct Inner<W> {
    sink: W,
    stats: RunningStats,
}

impl<W: Write + Send> StatisticsDisplay<W> {
    pub fn new(sink: W) -> Self {
        Self { inner: Mutex::new(Inner { sink, stats: RunningStats::default() }) }
    }

    /// Number of readings aggregated so far.
    pub fn count(&self) -> u32 { self.inner.lock().expect("stats lock poisoned").stats.count }

    /// Mean temperature over all readings, `None` before the first.
    pub fn average_temperature(&self) -> Option<f32> {
        let stats = self.inner.lock().expect("stats lock poisoned").stats;
        (stats.count > 0).then(|| stats.temperature_sum / stats.count as f32)
    }

    /// Lowest and highest temperature seen, `None` before the first reading.
    pub fn temperature_range(&self) -> Option<(f32, f32)> {
        let stats = self.inner.lock().expect("stats lock poisoned").stats;
        (stats.count > 0).then_some((stats.temperature_min, stats.temperature_max))
    }

    /// Mean humidity over all readings, `None` before the first.
    pub fn average_humidity(&self) -> Option<f32> {
        let stats = self.inner.lock().expect("stats lock poisoned").stats;
        (stats.count > 0).then(|| stats.humidity_sum / stats.count as f32)
    }
}

impl<W: Write + Send> Observer for StatisticsDisplay<W> {
    fn update(&self, reading: Measurement) -> Result<(), UpdateError> {
        let mut inner = self.inner.lock().expect("stats lock poisoned");
        inner.stats.record(reading);
        let stats = inner.stats;
        writeln!(
            inner.sink,
            "Stats: avg temp {:.1}C, avg humidity {:.1}% ({} readings)",
            stats.temperature_sum / stats.count as f32,
            stats.humidity_sum / stats.count as f32,
            stats.count
        )?;
        Ok(())
    }
}
