//! Strategy: characters fight with whatever weapon they currently hold.
//!
//! Run with: cargo run --bin strategy_adventure

use pattern_demos::{console, telemetry};
use std::fmt;
use tracing::debug;

trait WeaponBehavior {
    fn use_weapon(&self) -> &'static str;
}

struct SwordBehavior;
struct AxeBehavior;
struct KnifeBehavior;
struct BowAndArrowBehavior;

impl WeaponBehavior for SwordBehavior {
    fn use_weapon(&self) -> &'static str {
        "Swinging a sword!"
    }
}

impl WeaponBehavior for AxeBehavior {
    fn use_weapon(&self) -> &'static str {
        "Swinging an axe!"
    }
}

impl WeaponBehavior for KnifeBehavior {
    fn use_weapon(&self) -> &'static str {
        "Cutting with a knife!"
    }
}

impl WeaponBehavior for BowAndArrowBehavior {
    fn use_weapon(&self) -> &'static str {
        "Shooting an arrow with a bow!"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    King,
    Queen,
    Troll,
    Knight,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::King => "King",
            Role::Queen => "Queen",
            Role::Troll => "Troll",
            Role::Knight => "Knight",
        };
        f.write_str(name)
    }
}

/// A character always holds exactly one weapon.
struct Character {
    role: Role,
    weapon: Box<dyn WeaponBehavior>,
}

impl Character {
    fn new(role: Role, weapon: impl WeaponBehavior + 'static) -> Self {
        Self {
            role,
            weapon: Box::new(weapon),
        }
    }

    fn set_weapon(&mut self, weapon: impl WeaponBehavior + 'static) {
        debug!(role = %self.role, "weapon changed");
        self.weapon = Box::new(weapon);
    }

    fn fight(&self) -> String {
        format!("{} fighting: {}", self.role, self.weapon.use_weapon())
    }
}

fn main() {
    telemetry::init_logging();

    console::section("Battle");
    let king = Character::new(Role::King, SwordBehavior);
    let queen = Character::new(Role::Queen, BowAndArrowBehavior);
    let troll = Character::new(Role::Troll, AxeBehavior);
    let mut knight = Character::new(Role::Knight, KnifeBehavior);

    for character in [&king, &queen, &troll, &knight] {
        println!("{}", character.fight());
    }

    console::next_section("Changing weapon at runtime");
    knight.set_weapon(SwordBehavior);
    println!("{}", knight.fight());
}
