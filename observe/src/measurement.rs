/// A single weather reading.
///
/// Passed by value to every observer on each fan-out; it has no identity
/// beyond its contents, so observers may hold on to it freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Percent relative humidity.
    pub humidity: f32,
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32) -> Self { Self { temperature, humidity } }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}C, {}% humidity", self.temperature, self.humidity)
    }
}
