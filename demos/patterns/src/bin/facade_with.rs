//! Facade pattern: one call starts the movie, one call ends it, and the
//! subsystem choreography stays behind the facade.

use motif_catalogue::facade::{Amplifier, DvdPlayer, HomeTheaterFacade, Projector};

fn main() {
    let theater = HomeTheaterFacade::new(Amplifier, DvdPlayer, Projector);

    for line in theater.watch_movie() {
        println!("{line}");
    }
    for line in theater.end_movie() {
        println!("{line}");
    }
}
