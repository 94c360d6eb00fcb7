//! The same movie night without a facade: every call site drives the three
//! devices itself and must remember the order on both ends.

struct Amplifier;

impl Amplifier {
    fn on(&self) {
        println!("Amplifier on");
    }
    fn off(&self) {
        println!("Amplifier off");
    }
}

struct DvdPlayer;

impl DvdPlayer {
    fn on(&self) {
        println!("DVD player on");
    }
    fn play(&self) {
        println!("Playing DVD");
    }
    fn off(&self) {
        println!("DVD player off");
    }
}

struct Projector;

impl Projector {
    fn on(&self) {
        println!("Projector on");
    }
    fn off(&self) {
        println!("Projector off");
    }
}

fn main() {
    let amplifier = Amplifier;
    let dvd = DvdPlayer;
    let projector = Projector;

    // power-up, in exactly this order
    println!("Get ready to watch a movie...");
    amplifier.on();
    projector.on();
    dvd.on();
    dvd.play();

    // and the reverse on the way out
    println!("Shutting the theater down...");
    dvd.off();
    projector.off();
    amplifier.off();
}
