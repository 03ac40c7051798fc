//! Facade: one home-theater object drives the amplifier, tuner, DVD player and
//! projector in the right order.
//!
//! Run with: cargo run --bin facade_home_theater

use pattern_demos::{console, telemetry};
use tracing::debug;

mod subsystems {
    #[derive(Debug, Default)]
    pub struct Amplifier {
        pub on: bool,
        pub volume: u8,
    }

    impl Amplifier {
        pub fn on(&mut self) -> String {
            self.on = true;
            "Amplifier on".to_string()
        }

        pub fn off(&mut self) -> String {
            self.on = false;
            "Amplifier off".to_string()
        }

        pub fn set_volume(&mut self, level: u8) -> String {
            self.volume = level;
            format!("Amplifier volume set to {level}")
        }
    }

    #[derive(Debug, Default)]
    pub struct Tuner {
        pub on: bool,
        pub frequency: Option<f64>,
    }

    impl Tuner {
        pub fn on(&mut self) -> String {
            self.on = true;
            "Tuner on".to_string()
        }

        pub fn off(&mut self) -> String {
            self.on = false;
            self.frequency = None;
            "Tuner off".to_string()
        }

        pub fn set_frequency(&mut self, frequency: f64) -> String {
            self.frequency = Some(frequency);
            format!("Tuner frequency set to {frequency} MHz")
        }
    }

    #[derive(Debug, Default)]
    pub struct DvdPlayer {
        pub on: bool,
        pub movie: Option<String>,
    }

    impl DvdPlayer {
        pub fn on(&mut self) -> String {
            self.on = true;
            "DVD Player on".to_string()
        }

        pub fn off(&mut self) -> String {
            self.on = false;
            "DVD Player off".to_string()
        }

        pub fn play(&mut self, movie: &str) -> String {
            self.movie = Some(movie.to_string());
            format!("Playing movie: {movie}")
        }

        pub fn stop(&mut self) -> String {
            self.movie = None;
            "DVD Player stopped".to_string()
        }
    }

    #[derive(Debug, Default)]
    pub struct Projector {
        pub on: bool,
        pub widescreen: bool,
    }

    impl Projector {
        pub fn on(&mut self) -> String {
            self.on = true;
            "Projector on".to_string()
        }

        pub fn off(&mut self) -> String {
            self.on = false;
            self.widescreen = false;
            "Projector off".to_string()
        }

        pub fn wide_screen_mode(&mut self) -> String {
            self.widescreen = true;
            "Projector in widescreen mode".to_string()
        }
    }
}

use subsystems::{Amplifier, DvdPlayer, Projector, Tuner};

const MOVIE_VOLUME: u8 = 5;

/// Simple entry points over the subsystems. The subsystems stay reachable
/// for callers that need finer control.
struct HomeTheaterFacade<'a> {
    amp: &'a mut Amplifier,
    tuner: &'a mut Tuner,
    dvd: &'a mut DvdPlayer,
    projector: &'a mut Projector,
}

impl<'a> HomeTheaterFacade<'a> {
    fn new(
        amp: &'a mut Amplifier,
        tuner: &'a mut Tuner,
        dvd: &'a mut DvdPlayer,
        projector: &'a mut Projector,
    ) -> Self {
        Self {
            amp,
            tuner,
            dvd,
            projector,
        }
    }

    fn watch_movie(&mut self, movie: &str) -> Vec<String> {
        debug!(movie, "starting movie");
        vec![
            "Get ready to watch a movie...".to_string(),
            self.amp.on(),
            self.amp.set_volume(MOVIE_VOLUME),
            self.projector.on(),
            self.projector.wide_screen_mode(),
            self.dvd.on(),
            self.dvd.play(movie),
        ]
    }

    fn end_movie(&mut self) -> Vec<String> {
        vec![
            "Shutting movie theater down...".to_string(),
            self.dvd.stop(),
            self.dvd.off(),
            self.projector.off(),
            self.amp.off(),
        ]
    }

    fn listen_to_radio(&mut self, frequency: f64) -> Vec<String> {
        debug!(frequency, "tuning radio");
        vec![
            "Tuning in the airwaves...".to_string(),
            self.tuner.on(),
            self.tuner.set_frequency(frequency),
            self.amp.on(),
            self.amp.set_volume(MOVIE_VOLUME),
        ]
    }

    fn end_radio(&mut self) -> Vec<String> {
        vec![
            "Shutting down the tuner...".to_string(),
            self.tuner.off(),
            self.amp.off(),
        ]
    }
}

fn main() {
    telemetry::init_logging();

    let mut amp = Amplifier::default();
    let mut tuner = Tuner::default();
    let mut dvd = DvdPlayer::default();
    let mut projector = Projector::default();

    let mut home_theater = HomeTheaterFacade::new(&mut amp, &mut tuner, &mut dvd, &mut projector);

    console::section("Movie night");
    console::print_lines(home_theater.watch_movie("Inception"));
    println!();
    console::print_lines(home_theater.end_movie());

    console::next_section("Radio");
    console::print_lines(home_theater.listen_to_radio(93.9));
    println!();
    console::print_lines(home_theater.end_radio());

    println!();
    println!(
        "All off: {}",
        !(amp.on || tuner.on || dvd.on || projector.on)
    );
}
