//! Strategy: ducks delegate flying and quacking to behavior objects that can
//! be swapped while the program runs.
//!
//! Run with: cargo run --bin strategy_duck

use pattern_demos::{console, telemetry};
use tracing::debug;

// =============================================================================
// Behaviors
// =============================================================================

trait FlyBehavior {
    fn fly(&self) -> String;
}

trait QuackBehavior {
    fn quack(&self) -> String;
}

struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> String {
        "Flying with Wings".to_string()
    }
}

struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> String {
        "Can't fly".to_string()
    }
}

struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> String {
        "Flying with a Rocket".to_string()
    }
}

struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self) -> String {
        "Quacking Simply".to_string()
    }
}

struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self) -> String {
        "Squeaking".to_string()
    }
}

struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self) -> String {
        "<< Silence >>".to_string()
    }
}

// Any closure producing a sound works as a quack behavior.
impl<F> QuackBehavior for F
where
    F: Fn() -> String,
{
    fn quack(&self) -> String {
        self()
    }
}

// =============================================================================
// Context
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DuckKind {
    Mallard,
    Rubber,
    Model,
}

impl DuckKind {
    fn name(self) -> &'static str {
        match self {
            DuckKind::Mallard => "Mallard",
            DuckKind::Rubber => "Rubber",
            DuckKind::Model => "Model",
        }
    }
}

struct Duck {
    kind: DuckKind,
    fly_behavior: Box<dyn FlyBehavior>,
    quack_behavior: Box<dyn QuackBehavior>,
}

impl Duck {
    fn new(kind: DuckKind, fly_behavior: Box<dyn FlyBehavior>, quack_behavior: Box<dyn QuackBehavior>) -> Self {
        Self {
            kind,
            fly_behavior,
            quack_behavior,
        }
    }

    fn mallard() -> Self {
        Self::new(DuckKind::Mallard, Box::new(FlyWithWings), Box::new(Quack))
    }

    fn rubber() -> Self {
        Self::new(DuckKind::Rubber, Box::new(FlyNoWay), Box::new(Squeak))
    }

    fn model() -> Self {
        Self::new(DuckKind::Model, Box::new(FlyNoWay), Box::new(Quack))
    }

    fn display(&self) -> String {
        format!("Display a {} duck", self.kind.name())
    }

    fn swim(&self) -> String {
        "Swimming".to_string()
    }

    fn perform_fly(&self) -> String {
        self.fly_behavior.fly()
    }

    fn perform_quack(&self) -> String {
        self.quack_behavior.quack()
    }

    fn set_fly_behavior(&mut self, fly_behavior: Box<dyn FlyBehavior>) {
        debug!(duck = self.kind.name(), "fly behavior replaced");
        self.fly_behavior = fly_behavior;
    }

    fn set_quack_behavior(&mut self, quack_behavior: Box<dyn QuackBehavior>) {
        debug!(duck = self.kind.name(), "quack behavior replaced");
        self.quack_behavior = quack_behavior;
    }

    fn show_off(&self) -> Vec<String> {
        vec![
            self.display(),
            self.swim(),
            self.perform_fly(),
            self.perform_quack(),
        ]
    }
}

fn main() {
    telemetry::init_logging();

    console::section("Ducks");
    let mallard = Duck::mallard();
    console::print_lines(mallard.show_off());

    let rubber = Duck::rubber();
    console::print_lines(rubber.show_off());

    let mut model = Duck::model();
    console::print_lines(model.show_off());

    console::next_section("Behaviors swapped at runtime");
    model.set_fly_behavior(Box::new(FlyRocketPowered));
    println!("{}", model.perform_fly());

    model.set_quack_behavior(Box::new(MuteQuack));
    println!("{}", model.perform_quack());

    let mut decoy = Duck::rubber();
    decoy.set_quack_behavior(Box::new(|| "Honk honk".to_string()));
    println!("{}", decoy.perform_quack());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_behaviors() {
        assert_eq!(
            Duck::mallard().show_off(),
            vec!["Display a Mallard duck", "Swimming", "Flying with Wings", "Quacking Simply"]
        );
        assert_eq!(
            Duck::rubber().show_off(),
            vec!["Display a Rubber duck", "Swimming", "Can't fly", "Squeaking"]
        );
        assert_eq!(
            Duck::model().show_off(),
            vec!["Display a Model duck", "Swimming", "Can't fly", "Quacking Simply"]
        );
    }

    #[test]
    fn test_fly_behavior_swaps_at_runtime() {
        let mut model = Duck::model();
        assert_eq!(model.perform_fly(), "Can't fly");
        model.set_fly_behavior(Box::new(FlyRocketPowered));
        assert_eq!(model.perform_fly(), "Flying with a Rocket");
        assert_eq!(model.perform_quack(), "Quacking Simply");
    }

    #[test]
    fn test_quack_behavior_swaps_at_runtime() {
        let mut mallard = Duck::mallard();
        mallard.set_quack_behavior(Box::new(MuteQuack));
        assert_eq!(mallard.perform_quack(), "<< Silence >>");
        assert_eq!(mallard.perform_fly(), "Flying with Wings");
    }

    #[test]
    fn test_closure_as_quack_behavior() {
        let sound = String::from("Quack?");
        let mut duck = Duck::rubber();
        duck.set_quack_behavior(Box::new(move || sound.clone()));
        assert_eq!(duck.perform_quack(), "Quack?");
    }
}
