use motif_observe::*;
mod common;
use std::sync::{Arc, OnceLock};

use common::{drain, log, probe, Failing};

#[test]
fn delivers_in_registration_order() {
    let station = WeatherStation::new();
    let log = log();
    let (a, b, c) = (probe("A", &log), probe("B", &log), probe("C", &log));

    station.register(&a);
    station.register(&b);
    station.register(&c);
    station.set_measurements(25.0, 65.0);

    assert_eq!(drain(&log), ["A:25/65", "B:25/65", "C:25/65"]);
}

#[test]
fn each_fanout_delivers_exactly_once_per_observer() {
    let station = WeatherStation::new();
    let log = log();
    let (a, b) = (probe("A", &log), probe("B", &log));

    station.register(&a);
    station.register(&b);
    station.set_measurements(25.0, 65.0);
    station.set_measurements(26.5, 70.0);

    assert_eq!(drain(&log), ["A:25/65", "B:25/65", "A:26.5/70", "B:26.5/70"]);
}

#[test]
fn deregistered_observer_stops_receiving() {
    common::init_tracing();
    let station = WeatherStation::new();
    let log = log();
    let (a, b) = (probe("A", &log), probe("B", &log));

    station.register(&a);
    station.register(&b);
    station.set_measurements(25.0, 65.0);
    assert_eq!(drain(&log), ["A:25/65", "B:25/65"]);

    station.deregister(&a);
    station.set_measurements(26.5, 70.0);
    assert_eq!(drain(&log), ["B:26.5/70"]);
}

#[test]
fn deregistering_a_stranger_changes_nothing() {
    let station = WeatherStation::new();
    let log = log();
    let (a, stranger) = (probe("A", &log), probe("stranger", &log));

    station.register(&a);
    station.deregister(&stranger);
    assert_eq!(station.observer_count(), 1);

    station.set_measurements(25.0, 65.0);
    assert_eq!(drain(&log), ["A:25/65"]);
}

#[test]
fn duplicate_registration_keeps_position_and_delivers_once() {
    let station = WeatherStation::new();
    let log = log();
    let (a, b) = (probe("A", &log), probe("B", &log));

    station.register(&a);
    station.register(&b);
    station.register(&a);

    assert_eq!(station.observer_count(), 2);
    station.set_measurements(25.0, 65.0);
    assert_eq!(drain(&log), ["A:25/65", "B:25/65"]);
}

#[test]
fn notify_redelivers_the_current_reading() {
    let station = WeatherStation::new();
    let log = log();
    let a = probe("A", &log);

    station.register(&a);
    station.set_measurements(25.0, 65.0);
    station.notify();
    station.notify();

    assert_eq!(drain(&log), ["A:25/65", "A:25/65", "A:25/65"]);
    assert_eq!(station.measurement(), Some(Measurement::new(25.0, 65.0)));
}

#[test]
fn notify_before_the_first_reading_delivers_nothing() {
    let station = WeatherStation::new();
    let log = log();
    let a = probe("A", &log);

    station.register(&a);
    station.notify();

    assert_eq!(station.measurement(), None);
    assert!(drain(&log).is_empty());
}

#[test]
fn failing_observer_does_not_stop_the_fanout() {
    common::init_tracing();
    let station = WeatherStation::new();
    let log = log();
    let failing: Arc<dyn Observer> = Arc::new(Failing);
    let b = probe("B", &log);

    station.register(&failing);
    station.register(&b);
    station.set_measurements(25.0, 65.0);

    assert_eq!(drain(&log), ["B:25/65"]);
}

#[test]
fn dropped_observer_is_skipped_and_pruned() {
    common::init_tracing();
    let station = WeatherStation::new();
    let log = log();
    let (a, b) = (probe("A", &log), probe("B", &log));

    station.register(&a);
    station.register(&b);
    drop(a);

    station.set_measurements(25.0, 65.0);
    assert_eq!(drain(&log), ["B:25/65"]);
    assert_eq!(station.observer_count(), 1);
}

#[test]
fn observer_can_deregister_itself_during_update() {
    let station = Arc::new(WeatherStation::new());
    let log = log();
    let slot: Arc<OnceLock<Arc<dyn Observer>>> = Arc::new(OnceLock::new());

    let one_shot: Arc<dyn Observer> = {
        let station = station.clone();
        let slot = slot.clone();
        let log = log.clone();
        Arc::new(CallbackObserver::new(move |reading: Measurement| {
            log.lock().unwrap().push(format!("once:{}/{}", reading.temperature, reading.humidity));
            if let Some(me) = slot.get() {
                station.deregister(me);
            }
        }))
    };
    let _ = slot.set(one_shot.clone());

    station.register(&one_shot);
    station.set_measurements(25.0, 65.0);
    station.set_measurements(26.5, 70.0);

    assert_eq!(drain(&log), ["once:25/65"]);
    assert_eq!(station.observer_count(), 0);
}

#[test]
fn registration_during_update_takes_effect_next_fanout() {
    let station = Arc::new(WeatherStation::new());
    let log = log();
    let late = probe("C", &log);

    let registrar: Arc<dyn Observer> = {
        let station = station.clone();
        let late = late.clone();
        let log = log.clone();
        Arc::new(CallbackObserver::new(move |reading: Measurement| {
            log.lock().unwrap().push(format!("B:{}/{}", reading.temperature, reading.humidity));
            station.register(&late);
        }))
    };
    let a = probe("A", &log);

    station.register(&a);
    station.register(&registrar);
    station.set_measurements(20.0, 50.0);
    assert_eq!(drain(&log), ["A:20/50", "B:20/50"]);

    station.set_measurements(21.0, 55.0);
    assert_eq!(drain(&log), ["A:21/55", "B:21/55", "C:21/55"]);
}

#[test]
fn concurrent_writers_are_serialized() {
    let station = Arc::new(WeatherStation::new());
    let log = log();
    let (x, y) = (probe("X", &log), probe("Y", &log));

    station.register(&x);
    station.register(&y);

    let writers: Vec<_> = (0..4)
        .map(|writer| {
            let station = station.clone();
            std::thread::spawn(move || {
                for n in 0..25 {
                    station.set_measurements(writer as f32, n as f32);
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let entries = drain(&log);
    assert_eq!(entries.len(), 200);
    for fanout in entries.chunks(2) {
        let x_reading = fanout[0].strip_prefix("X:").unwrap();
        let y_reading = fanout[1].strip_prefix("Y:").unwrap();
        assert_eq!(x_reading, y_reading, "fan-outs interleaved");
    }
}
