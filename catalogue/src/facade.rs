//! Facade: one entry point orchestrating a fixed subsystem sequence.
//!
//! Call sites ask for "watch a movie" and never learn that three devices
//! have to be driven in a particular order. Each operation returns the
//! ordered transcript of subsystem actions, so the sequencing is printable
//! and assertable.

pub struct Amplifier;

impl Amplifier {
    pub fn on(&self) -> &'static str { "Amplifier on" }
    pub fn off(&self) -> &'static str { "Amplifier off" }
}

pub struct DvdPlayer;

impl DvdPlayer {
    pub fn on(&self) -> &'static str { "DVD player on" }
    pub fn play(&self) -> &'static str { "Playing DVD" }
    pub fn off(&self) -> &'static str { "DVD player off" }
}

pub struct Projector;

impl Projector {
    pub fn on(&self) -> &'static str { "Projector on" }
    pub fn off(&self) -> &'static str { "Projector off" }
}

/// The one type call sites use instead of driving the subsystems
/// themselves.
pub struct HomeTheaterFacade {
    amplifier: Amplifier,
    dvd: DvdPlayer,
    projector: Projector,
}

impl HomeTheaterFacade {
    pub fn new(amplifier: Amplifier, dvd: DvdPlayer, projector: Projector) -> Self {
        Self { amplifier, dvd, projector }
    }

    /// Power-up sequence. Returns the transcript of subsystem actions in
    /// the order they ran.
    pub fn watch_movie(&self) -> Vec<String> {
        vec![
            "Get ready to watch a movie...".to_string(),
            self.amplifier.on().to_string(),
            self.projector.on().to_string(),
            self.dvd.on().to_string(),
            self.dvd.play().to_string(),
        ]
    }

    /// Shutdown sequence, the reverse of power-up.
    pub fn end_movie(&self) -> Vec<String> {
        vec![
            "Shutting the theater down...".to_string(),
            self.dvd.off().to_string(),
            self.projector.off().to_string(),
            self.amplifier.off().to_string(),
        ]
    }
}
