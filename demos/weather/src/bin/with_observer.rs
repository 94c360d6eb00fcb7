//! Weather station with the observer pattern: displays plug in and unplug
//! without the station knowing any of them by name.

use std::sync::Arc;

use motif_observe::{ConditionsDisplay, Measurement, Observer, StatisticsDisplay, WeatherStation};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let station = WeatherStation::new();

    let conditions: Arc<dyn Observer> = Arc::new(ConditionsDisplay::new(std::io::stdout()));
    let statistics = Arc::new(StatisticsDisplay::new(std::io::stdout()));
    let statistics_observer: Arc<dyn Observer> = statistics.clone();

    station.register(&conditions);
    station.register(&statistics_observer);

    // closures subscribe too; the guard keeps this one registered
    let alert = station.subscribe(|reading: Measurement| {
        if reading.humidity > 68.0 {
            println!("Humidity alert: {reading}");
        }
    });

    station.set_measurements(25.0, 65.0);
    station.set_measurements(26.5, 70.0);

    // the conditions display unplugs; everyone else keeps receiving
    station.deregister(&conditions);
    station.set_measurements(24.0, 60.0);

    drop(alert);
    if let Some(average) = statistics.average_temperature() {
        println!("Session average temperature: {average:.1}C over {} readings", statistics.count());
    }
}
