//! Adapter: make turkeys usable wherever ducks are expected, and back.
//!
//! Run with: cargo run --bin adapter_duck

use pattern_demos::{console, telemetry};
use tracing::debug;

// =============================================================================
// Target interfaces
// =============================================================================

trait Duck {
    fn quack(&self) -> String;
    fn fly(&self) -> String;
}

trait Turkey {
    fn gobble(&self) -> String;
    fn fly(&self) -> String;
}

struct WildDuck;

impl Duck for WildDuck {
    fn quack(&self) -> String {
        "Quack Quack".to_string()
    }

    fn fly(&self) -> String {
        "I'm flying".to_string()
    }
}

struct WildTurkey;

impl Turkey for WildTurkey {
    fn gobble(&self) -> String {
        "Gobble Gobble".to_string()
    }

    fn fly(&self) -> String {
        "I'm flying a short distance".to_string()
    }
}

// =============================================================================
// Adapters (generic, so the wrapped type is known at compile time)
// =============================================================================

struct TurkeyAdapter<T> {
    turkey: T,
}

impl<T: Turkey> TurkeyAdapter<T> {
    fn new(turkey: T) -> Self {
        Self { turkey }
    }
}

impl<T: Turkey> Duck for TurkeyAdapter<T> {
    fn quack(&self) -> String {
        self.turkey.gobble()
    }

    fn fly(&self) -> String {
        self.turkey.fly()
    }
}

struct DuckAdapter<D> {
    duck: D,
}

impl<D: Duck> DuckAdapter<D> {
    fn new(duck: D) -> Self {
        Self { duck }
    }
}

impl<D: Duck> Turkey for DuckAdapter<D> {
    fn gobble(&self) -> String {
        self.duck.quack()
    }

    fn fly(&self) -> String {
        self.duck.fly()
    }
}

fn test_duck(duck: &dyn Duck) -> Vec<String> {
    vec![duck.quack(), duck.fly()]
}

fn test_turkey(turkey: &dyn Turkey) -> Vec<String> {
    vec![turkey.gobble(), turkey.fly()]
}

fn main() {
    telemetry::init_logging();

    console::section("The duck");
    console::print_lines(test_duck(&WildDuck));

    console::next_section("The turkey, adapted to a duck");
    let turkey_adapter = TurkeyAdapter::new(WildTurkey);
    debug!("wrapped WildTurkey in TurkeyAdapter");
    console::print_lines(test_duck(&turkey_adapter));

    console::next_section("The duck, adapted to a turkey");
    let duck_adapter = DuckAdapter::new(WildDuck);
    console::print_lines(test_turkey(&duck_adapter));

    console::next_section("A flock of ducks");
    let flock: Vec<Box<dyn Duck>> = vec![
        Box::new(WildDuck),
        Box::new(TurkeyAdapter::new(WildTurkey)),
    ];
    for duck in &flock {
        console::print_lines(test_duck(duck.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wild_duck() {
        assert_eq!(test_duck(&WildDuck), vec!["Quack Quack", "I'm flying"]);
    }

    #[test]
    fn test_turkey_adapter_delegates_to_turkey() {
        let adapter = TurkeyAdapter::new(WildTurkey);
        assert_eq!(adapter.quack(), WildTurkey.gobble());
        assert_eq!(adapter.fly(), "I'm flying a short distance");
    }

    #[test]
    fn test_duck_adapter_delegates_to_duck() {
        let adapter = DuckAdapter::new(WildDuck);
        assert_eq!(adapter.gobble(), "Quack Quack");
        assert_eq!(adapter.fly(), WildDuck.fly());
    }

    #[test]
    fn test_adapters_compose() {
        // A turkey dressed as a duck dressed as a turkey is still a turkey.
        let round_trip = DuckAdapter::new(TurkeyAdapter::new(WildTurkey));
        assert_eq!(test_turkey(&round_trip), test_turkey(&WildTurkey));
    }

    #[test]
    fn test_heterogeneous_flock() {
        let flock: Vec<Box<dyn Duck>> = vec![
            Box::new(WildDuck),
            Box::new(TurkeyAdapter::new(WildTurkey)),
        ];
        let quacks: Vec<String> = flock.iter().map(|d| d.quack()).collect();
        assert_eq!(quacks, vec!["Quack Quack", "Gobble Gobble"]);
    }
}
