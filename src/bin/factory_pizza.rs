//! Abstract Factory: each regional pizza store gets its ingredients from its
//! own ingredient factory, while the ordering workflow stays the same.
//!
//! Run with: cargo run --bin factory_pizza

use itertools::Itertools;
use pattern_demos::{console, telemetry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum PizzaError {
    #[error("unknown pizza type '{0}'")]
    UnknownKind(String),

    #[error("{store} does not make {kind} pizza")]
    NotOnMenu { store: &'static str, kind: PizzaKind },
}

// =============================================================================
// Ingredient families
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dough {
    ThinCrust,
    ThickCrust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sauce {
    Marinara,
    PlumTomato,
    Bruschetta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cheese {
    Reggiano,
    Mozzarella,
    Goat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Veggie {
    Garlic,
    Onion,
    Mushroom,
    RedPepper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pepperoni {
    Sliced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clams {
    Fresh,
    Frozen,
}

impl fmt::Display for Dough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dough::ThinCrust => "Thin Crust Dough",
            Dough::ThickCrust => "Thick Crust Dough",
        })
    }
}

impl fmt::Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sauce::Marinara => "Marinara Sauce",
            Sauce::PlumTomato => "Plum Tomato Sauce",
            Sauce::Bruschetta => "Bruschetta Sauce",
        })
    }
}

impl fmt::Display for Cheese {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cheese::Reggiano => "Reggiano Cheese",
            Cheese::Mozzarella => "Mozzarella Cheese",
            Cheese::Goat => "Goat Cheese",
        })
    }
}

impl fmt::Display for Veggie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Veggie::Garlic => "Garlic",
            Veggie::Onion => "Onion",
            Veggie::Mushroom => "Mushroom",
            Veggie::RedPepper => "Red Pepper",
        })
    }
}

impl fmt::Display for Pepperoni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pepperoni::Sliced => "Sliced Pepperoni",
        })
    }
}

impl fmt::Display for Clams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Clams::Fresh => "Fresh Clams",
            Clams::Frozen => "Frozen Clams",
        })
    }
}

// =============================================================================
// Abstract factory and its regional families
// =============================================================================

trait PizzaIngredientFactory {
    fn create_dough(&self) -> Dough;
    fn create_sauce(&self) -> Sauce;
    fn create_cheese(&self) -> Cheese;
    fn create_clams(&self) -> Clams;

    fn create_veggies(&self) -> Vec<Veggie> {
        vec![Veggie::Garlic, Veggie::Onion, Veggie::Mushroom, Veggie::RedPepper]
    }

    fn create_pepperoni(&self) -> Pepperoni {
        Pepperoni::Sliced
    }
}

struct NyPizzaIngredientFactory;

impl PizzaIngredientFactory for NyPizzaIngredientFactory {
    fn create_dough(&self) -> Dough {
        Dough::ThinCrust
    }

    fn create_sauce(&self) -> Sauce {
        Sauce::Marinara
    }

    fn create_cheese(&self) -> Cheese {
        Cheese::Reggiano
    }

    fn create_clams(&self) -> Clams {
        Clams::Fresh
    }
}

struct ChicagoPizzaIngredientFactory;

impl PizzaIngredientFactory for ChicagoPizzaIngredientFactory {
    fn create_dough(&self) -> Dough {
        Dough::ThickCrust
    }

    fn create_sauce(&self) -> Sauce {
        Sauce::PlumTomato
    }

    fn create_cheese(&self) -> Cheese {
        Cheese::Mozzarella
    }

    fn create_clams(&self) -> Clams {
        Clams::Frozen
    }
}

struct CaliforniaPizzaIngredientFactory;

impl PizzaIngredientFactory for CaliforniaPizzaIngredientFactory {
    fn create_dough(&self) -> Dough {
        Dough::ThinCrust
    }

    fn create_sauce(&self) -> Sauce {
        Sauce::Bruschetta
    }

    fn create_cheese(&self) -> Cheese {
        Cheese::Goat
    }

    fn create_clams(&self) -> Clams {
        Clams::Fresh
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PizzaKind {
    Cheese,
    Clam,
    Veggie,
    Pepperoni,
}

impl PizzaKind {
    fn label(self) -> &'static str {
        match self {
            PizzaKind::Cheese => "Cheese",
            PizzaKind::Clam => "Clam",
            PizzaKind::Veggie => "Veggie",
            PizzaKind::Pepperoni => "Pepperoni",
        }
    }
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for PizzaKind {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheese" => Ok(PizzaKind::Cheese),
            "clam" => Ok(PizzaKind::Clam),
            "veggie" => Ok(PizzaKind::Veggie),
            "pepperoni" => Ok(PizzaKind::Pepperoni),
            other => Err(PizzaError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Pizza {
    name: String,
    kind: PizzaKind,
    dough: Option<Dough>,
    sauce: Option<Sauce>,
    cheese: Option<Cheese>,
    veggies: Vec<Veggie>,
    pepperoni: Option<Pepperoni>,
    clams: Option<Clams>,
}

impl Pizza {
    fn new(name: String, kind: PizzaKind) -> Self {
        Self {
            name,
            kind,
            dough: None,
            sauce: None,
            cheese: None,
            veggies: Vec::new(),
            pepperoni: None,
            clams: None,
        }
    }

    /// Pulls the ingredients this kind of pizza needs from the factory.
    fn prepare(&mut self, factory: &dyn PizzaIngredientFactory) -> String {
        self.dough = Some(factory.create_dough());
        self.sauce = Some(factory.create_sauce());
        self.cheese = Some(factory.create_cheese());
        match self.kind {
            PizzaKind::Cheese => {}
            PizzaKind::Clam => self.clams = Some(factory.create_clams()),
            PizzaKind::Veggie => self.veggies = factory.create_veggies(),
            PizzaKind::Pepperoni => self.pepperoni = Some(factory.create_pepperoni()),
        }
        format!("Preparing {}", self.name)
    }

    fn bake(&self) -> String {
        format!("Baking {}", self.name)
    }

    fn cut(&self) -> String {
        format!("Cutting diagonally {}", self.name)
    }

    fn box_up(&self) -> String {
        format!("Boxing {}", self.name)
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.name)?;
        if let Some(dough) = self.dough {
            writeln!(f, "Dough: {dough}")?;
        }
        if let Some(sauce) = self.sauce {
            writeln!(f, "Sauce: {sauce}")?;
        }
        if let Some(cheese) = self.cheese {
            writeln!(f, "Cheese: {cheese}")?;
        }
        if !self.veggies.is_empty() {
            writeln!(f, "Veggies: {}", self.veggies.iter().join(", "))?;
        }
        if let Some(pepperoni) = self.pepperoni {
            writeln!(f, "Pepperoni: {pepperoni}")?;
        }
        if let Some(clams) = self.clams {
            writeln!(f, "Clams: {clams}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Stores
// =============================================================================

struct Order {
    pizza: Pizza,
    steps: Vec<String>,
}

trait PizzaStore {
    fn style(&self) -> &'static str;
    fn menu(&self) -> &'static [PizzaKind];
    fn ingredient_factory(&self) -> &dyn PizzaIngredientFactory;

    fn create_pizza(&self, kind: &str) -> Result<Pizza, PizzaError> {
        let kind: PizzaKind = kind.parse()?;
        if !self.menu().contains(&kind) {
            return Err(PizzaError::NotOnMenu {
                store: self.style(),
                kind,
            });
        }
        Ok(Pizza::new(format!("{} {} Pizza", self.style(), kind.label()), kind))
    }

    /// The fixed ordering workflow shared by every store.
    fn order_pizza(&self, kind: &str) -> Result<Order, PizzaError> {
        let mut pizza = self.create_pizza(kind).inspect_err(|err| {
            warn!(store = self.style(), %err, "order rejected");
        })?;
        debug!(store = self.style(), pizza = %pizza.name, "order accepted");

        let steps = vec![
            pizza.prepare(self.ingredient_factory()),
            pizza.bake(),
            pizza.cut(),
            pizza.box_up(),
        ];
        Ok(Order { pizza, steps })
    }
}

struct NyPizzaStore {
    factory: NyPizzaIngredientFactory,
}

impl PizzaStore for NyPizzaStore {
    fn style(&self) -> &'static str {
        "New York Style"
    }

    fn menu(&self) -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Clam, PizzaKind::Veggie]
    }

    fn ingredient_factory(&self) -> &dyn PizzaIngredientFactory {
        &self.factory
    }
}

struct ChicagoPizzaStore {
    factory: ChicagoPizzaIngredientFactory,
}

impl PizzaStore for ChicagoPizzaStore {
    fn style(&self) -> &'static str {
        "Chicago Style"
    }

    fn menu(&self) -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Pepperoni]
    }

    fn ingredient_factory(&self) -> &dyn PizzaIngredientFactory {
        &self.factory
    }
}

struct CaliforniaPizzaStore {
    factory: CaliforniaPizzaIngredientFactory,
}

impl PizzaStore for CaliforniaPizzaStore {
    fn style(&self) -> &'static str {
        "California Style"
    }

    fn menu(&self) -> &'static [PizzaKind] {
        &[PizzaKind::Cheese, PizzaKind::Pepperoni]
    }

    fn ingredient_factory(&self) -> &dyn PizzaIngredientFactory {
        &self.factory
    }
}

fn serve(customer: &str, store: &dyn PizzaStore, kind: &str) {
    match store.order_pizza(kind) {
        Ok(order) => {
            console::print_lines(&order.steps);
            println!("{customer} ordered a {}", order.pizza.name);
            print!("{}", order.pizza);
            println!();
        }
        Err(err) => console::report_error(&err),
    }
}

fn main() {
    telemetry::init_logging();

    let ny_store = NyPizzaStore {
        factory: NyPizzaIngredientFactory,
    };
    let chicago_store = ChicagoPizzaStore {
        factory: ChicagoPizzaIngredientFactory,
    };
    let california_store = CaliforniaPizzaStore {
        factory: CaliforniaPizzaIngredientFactory,
    };

    console::section("Orders");
    serve("Ethan", &ny_store, "cheese");
    serve("Joel", &chicago_store, "cheese");
    serve("Alex", &california_store, "pepperoni");
    serve("Sam", &ny_store, "veggie");

    console::section("Rejected orders");
    serve("Riley", &ny_store, "pepperoni");
    serve("Jordan", &chicago_store, "hawaiian");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> (NyPizzaStore, ChicagoPizzaStore, CaliforniaPizzaStore) {
        (
            NyPizzaStore {
                factory: NyPizzaIngredientFactory,
            },
            ChicagoPizzaStore {
                factory: ChicagoPizzaIngredientFactory,
            },
            CaliforniaPizzaStore {
                factory: CaliforniaPizzaIngredientFactory,
            },
        )
    }

    #[test]
    fn test_ny_cheese_order() {
        let (ny, _, _) = stores();
        let order = ny.order_pizza("cheese").unwrap();
        assert_eq!(order.pizza.name, "New York Style Cheese Pizza");
        assert_eq!(
            order.steps,
            vec![
                "Preparing New York Style Cheese Pizza",
                "Baking New York Style Cheese Pizza",
                "Cutting diagonally New York Style Cheese Pizza",
                "Boxing New York Style Cheese Pizza",
            ]
        );
        assert_eq!(order.pizza.dough, Some(Dough::ThinCrust));
        assert_eq!(order.pizza.sauce, Some(Sauce::Marinara));
        assert_eq!(order.pizza.cheese, Some(Cheese::Reggiano));
        assert!(order.pizza.clams.is_none());
    }

    #[test]
    fn test_regional_factories_differ() {
        let (ny, chicago, california) = stores();
        let ny_cheese = ny.order_pizza("cheese").unwrap().pizza;
        let chicago_cheese = chicago.order_pizza("cheese").unwrap().pizza;
        let california_cheese = california.order_pizza("cheese").unwrap().pizza;

        assert_eq!(chicago_cheese.dough, Some(Dough::ThickCrust));
        assert_eq!(chicago_cheese.cheese, Some(Cheese::Mozzarella));
        assert_eq!(california_cheese.sauce, Some(Sauce::Bruschetta));
        assert_eq!(california_cheese.cheese, Some(Cheese::Goat));
        assert_ne!(ny_cheese.sauce, chicago_cheese.sauce);
    }

    #[test]
    fn test_kind_specific_ingredients() {
        let (ny, chicago, _) = stores();
        let clam = ny.order_pizza("clam").unwrap().pizza;
        assert_eq!(clam.clams, Some(Clams::Fresh));

        let veggie = ny.order_pizza("veggie").unwrap().pizza;
        assert_eq!(veggie.veggies.len(), 4);

        let pepperoni = chicago.order_pizza("pepperoni").unwrap().pizza;
        assert_eq!(pepperoni.name, "Chicago Style Pepperoni Pizza");
        assert_eq!(pepperoni.pepperoni, Some(Pepperoni::Sliced));
        assert!(pepperoni.clams.is_none());
    }

    #[test]
    fn test_unknown_and_off_menu_kinds() {
        let (ny, chicago, _) = stores();
        assert_eq!(
            chicago.order_pizza("Hawaiian").map(|o| o.pizza),
            Err(PizzaError::UnknownKind("hawaiian".to_string()))
        );
        assert_eq!(
            ny.create_pizza("pepperoni"),
            Err(PizzaError::NotOnMenu {
                store: "New York Style",
                kind: PizzaKind::Pepperoni
            })
        );
    }

    #[test]
    fn test_display_lists_present_ingredients() {
        let (ny, _, _) = stores();
        let veggie = ny.order_pizza("veggie").unwrap().pizza;
        let text = veggie.to_string();
        assert!(text.starts_with("---- New York Style Veggie Pizza ----\n"));
        assert!(text.contains("Dough: Thin Crust Dough\n"));
        assert!(text.contains("Veggies: Garlic, Onion, Mushroom, Red Pepper\n"));
        assert!(!text.contains("Clams:"));
    }

    #[test]
    fn test_unprepared_pizza_has_no_ingredients() {
        let (ny, _, _) = stores();
        let pizza = ny.create_pizza("cheese").unwrap();
        assert_eq!(pizza.to_string(), "---- New York Style Cheese Pizza ----\n");
    }

    #[test]
    fn test_parse_kind_is_case_insensitive() {
        assert_eq!(" Clam ".parse::<PizzaKind>(), Ok(PizzaKind::Clam));
        assert!("".parse::<PizzaKind>().is_err());
    }
}
