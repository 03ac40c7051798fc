//! Template Method: the brewing recipe is fixed, and each beverage only fills
//! in the steps that differ.
//!
//! Run with: cargo run --bin template_method_beverage

use pattern_demos::{console, telemetry};
use tracing::debug;

trait CaffeineBeverage {
    fn name(&self) -> &'static str;
    fn brew(&self) -> String;
    fn add_condiments(&self) -> String;

    fn boil_water(&self) -> String {
        "Boiling water".to_string()
    }

    fn pour_in_cup(&self) -> String {
        "Pouring in cup".to_string()
    }

    /// Hook: beverages that are served plain return `false`.
    fn customer_wants_condiments(&self) -> bool {
        true
    }
}

/// The recipe itself. The blanket impl below is the only implementation, so
/// no beverage can reorder the steps.
trait Recipe {
    fn prepare(&self) -> Vec<String>;
}

impl<T: CaffeineBeverage + ?Sized> Recipe for T {
    fn prepare(&self) -> Vec<String> {
        debug!(beverage = self.name(), "preparing");
        let mut steps = vec![self.boil_water(), self.brew()];
        if self.customer_wants_condiments() {
            steps.push(self.add_condiments());
        }
        steps.push(self.pour_in_cup());
        steps
    }
}

struct Coffee;

impl CaffeineBeverage for Coffee {
    fn name(&self) -> &'static str {
        "Coffee"
    }

    fn brew(&self) -> String {
        "Dripping Coffee through filter".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding Sugar and Milk".to_string()
    }
}

struct Tea;

impl CaffeineBeverage for Tea {
    fn name(&self) -> &'static str {
        "Tea"
    }

    fn brew(&self) -> String {
        "Steeping the tea".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding Lemon".to_string()
    }
}

/// Coffee served without sugar or milk.
struct BlackCoffee;

impl CaffeineBeverage for BlackCoffee {
    fn name(&self) -> &'static str {
        "Black Coffee"
    }

    fn brew(&self) -> String {
        Coffee.brew()
    }

    fn add_condiments(&self) -> String {
        Coffee.add_condiments()
    }

    fn customer_wants_condiments(&self) -> bool {
        false
    }
}

fn main() {
    telemetry::init_logging();

    let beverages: [&dyn CaffeineBeverage; 3] = [&Coffee, &Tea, &BlackCoffee];
    for (i, beverage) in beverages.iter().enumerate() {
        if i == 0 {
            console::section(beverage.name());
        } else {
            console::next_section(beverage.name());
        }
        console::print_lines(beverage.prepare());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_recipe() {
        assert_eq!(
            Coffee.prepare(),
            vec![
                "Boiling water",
                "Dripping Coffee through filter",
                "Adding Sugar and Milk",
                "Pouring in cup",
            ]
        );
    }

    #[test]
    fn test_tea_recipe() {
        assert_eq!(
            Tea.prepare(),
            vec!["Boiling water", "Steeping the tea", "Adding Lemon", "Pouring in cup"]
        );
    }

    #[test]
    fn test_hook_skips_condiments() {
        let steps = BlackCoffee.prepare();
        assert_eq!(
            steps,
            vec!["Boiling water", "Dripping Coffee through filter", "Pouring in cup"]
        );
    }

    #[test]
    fn test_prepare_through_trait_object() {
        let tea: Box<dyn CaffeineBeverage> = Box::new(Tea);
        assert_eq!(tea.prepare().len(), 4);
        assert_eq!(tea.prepare()[0], "Boiling water");
    }
}
