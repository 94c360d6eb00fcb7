//! The same weather station without the observer pattern: the station owns
//! its displays and names each one at every update site. Adding a display
//! means editing the station; removing one at runtime is not expressible.

struct ConditionsDisplay;

impl ConditionsDisplay {
    fn update(&self, temperature: f32, humidity: f32) {
        println!("Current conditions: {temperature}C, {humidity}% humidity");
    }
}

struct StatisticsDisplay {
    count: u32,
    temperature_sum: f32,
}

impl StatisticsDisplay {
    fn update(&mut self, temperature: f32, _humidity: f32) {
        self.count += 1;
        self.temperature_sum += temperature;
        println!("Stats: avg temp {:.1}C ({} readings)", self.temperature_sum / self.count as f32, self.count);
    }
}

struct WeatherData {
    conditions: ConditionsDisplay,
    statistics: StatisticsDisplay,
}

impl WeatherData {
    fn set_measurements(&mut self, temperature: f32, humidity: f32) {
        // every display is hard-wired here, one call per field
        self.conditions.update(temperature, humidity);
        self.statistics.update(temperature, humidity);
    }
}

fn main() {
    let mut station = WeatherData {
        conditions: ConditionsDisplay,
        statistics: StatisticsDisplay { count: 0, temperature_sum: 0.0 },
    };

    station.set_measurements(25.0, 65.0);
    station.set_measurements(26.5, 70.0);
    station.set_measurements(24.0, 60.0);
}
