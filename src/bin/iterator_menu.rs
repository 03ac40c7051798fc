//! Iterator: three menus store their items differently, and the waitress walks
//! all of them through the same iterator interface.
//!
//! Run with: cargo run --bin iterator_menu

use pattern_demos::{console, telemetry};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum MenuError {
    #[error("Menu is full! Cannot add item to menu.")]
    Full,

    #[error("no menu named '{0}'")]
    MissingMenu(String),
}

const BREAKFAST: &str = "Pancake House";
const LUNCH: &str = "Cafe";
const DINNER: &str = "Diner";

#[derive(Debug, Clone, PartialEq)]
struct MenuItem {
    name: String,
    description: String,
    vegetarian: bool,
    price: f64,
}

impl MenuItem {
    fn new(name: &str, description: &str, vegetarian: bool, price: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            vegetarian,
            price,
        }
    }

    fn line(&self) -> String {
        format!("{}, {} -- {}", self.name, self.price, self.description)
    }
}

trait Menu {
    fn name(&self) -> &str;
    fn create_iterator(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_>;
}

// =============================================================================
// Pancake house: fixed-size array
// =============================================================================

const MAX_ITEMS: usize = 6;

struct PancakeHouseMenu {
    items: [Option<MenuItem>; MAX_ITEMS],
    count: usize,
}

impl PancakeHouseMenu {
    fn empty() -> Self {
        Self {
            items: Default::default(),
            count: 0,
        }
    }

    fn new() -> Result<Self, MenuError> {
        let mut menu = Self::empty();
        menu.add_item("K&B's Pancake Breakfast", "Pancakes with scrambled eggs, and toast", true, 2.99)?;
        menu.add_item("Regular Pancake Breakfast", "Pancakes with fried eggs, sausage", false, 2.99)?;
        menu.add_item("Blueberry Pancakes", "Pancakes made with fresh blueberries", true, 3.49)?;
        menu.add_item(
            "Waffles",
            "Waffles with your choice of blueberries or strawberries",
            true,
            3.59,
        )?;
        Ok(menu)
    }

    fn add_item(&mut self, name: &str, description: &str, vegetarian: bool, price: f64) -> Result<(), MenuError> {
        let slot = self.items.get_mut(self.count).ok_or(MenuError::Full)?;
        *slot = Some(MenuItem::new(name, description, vegetarian, price));
        self.count += 1;
        Ok(())
    }
}

/// Walks the filled prefix of the pancake array.
struct PancakeHouseMenuIterator<'a> {
    items: &'a [Option<MenuItem>],
    position: usize,
}

impl<'a> Iterator for PancakeHouseMenuIterator<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?.as_ref()?;
        self.position += 1;
        Some(item)
    }
}

impl Menu for PancakeHouseMenu {
    fn name(&self) -> &str {
        BREAKFAST
    }

    fn create_iterator(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_> {
        Box::new(PancakeHouseMenuIterator {
            items: &self.items[..self.count],
            position: 0,
        })
    }
}

// =============================================================================
// Diner: growable vector
// =============================================================================

struct DinerMenu {
    items: Vec<MenuItem>,
}

impl DinerMenu {
    fn new() -> Self {
        let mut menu = Self { items: Vec::new() };
        menu.add_item(
            "Vegetarian BLT",
            "Fakin' Bacon with lettuce & tomato on whole wheat",
            true,
            2.99,
        );
        menu.add_item("BLT", "Bacon with lettuce & tomato on whole wheat", false, 2.99);
        menu.add_item("Soup of the day", "Soup of the day, with a side of potato salad", false, 3.29);
        menu.add_item(
            "Hotdog",
            "A hot dog, with sauerkraut, relish, onions, topped with cheese",
            false,
            3.05,
        );
        menu
    }

    fn add_item(&mut self, name: &str, description: &str, vegetarian: bool, price: f64) {
        self.items.push(MenuItem::new(name, description, vegetarian, price));
    }
}

impl Menu for DinerMenu {
    fn name(&self) -> &str {
        DINNER
    }

    fn create_iterator(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_> {
        Box::new(self.items.iter())
    }
}

// =============================================================================
// Cafe: map keyed by item name
// =============================================================================

struct CafeMenu {
    items: BTreeMap<String, MenuItem>,
}

impl CafeMenu {
    fn new() -> Self {
        let mut menu = Self {
            items: BTreeMap::new(),
        };
        menu.add_item("Cappuccino", "Espresso with steamed milk foam", true, 3.50);
        menu.add_item("Espresso", "Strong black coffee", true, 2.75);
        menu.add_item("Turkey Sandwich", "Turkey sandwich with lettuce and tomato", false, 5.25);
        menu
    }

    fn add_item(&mut self, name: &str, description: &str, vegetarian: bool, price: f64) {
        self.items
            .insert(name.to_string(), MenuItem::new(name, description, vegetarian, price));
    }
}

impl Menu for CafeMenu {
    fn name(&self) -> &str {
        LUNCH
    }

    fn create_iterator(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_> {
        Box::new(self.items.values())
    }
}

// =============================================================================
// Client
// =============================================================================

struct Waitress {
    menus: Vec<Box<dyn Menu>>,
}

impl Waitress {
    fn new(menus: Vec<Box<dyn Menu>>) -> Self {
        Self { menus }
    }

    fn menu(&self, name: &str) -> Result<&dyn Menu, MenuError> {
        self.menus
            .iter()
            .find(|menu| menu.name() == name)
            .map(|menu| &**menu)
            .ok_or_else(|| MenuError::MissingMenu(name.to_string()))
    }

    fn print_menu(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for menu in &self.menus {
            lines.push(format!("{} Menu:", menu.name()));
            lines.extend(menu.create_iterator().map(MenuItem::line));
            lines.push(String::new());
        }
        lines
    }

    fn print_vegetarian_menu(&self) -> Vec<String> {
        let mut lines = vec!["Vegetarian Menu:".to_string()];
        lines.extend(
            self.menus
                .iter()
                .flat_map(|menu| menu.create_iterator())
                .filter(|item| item.vegetarian)
                .map(MenuItem::line),
        );
        lines
    }

    fn print_named(&self, title: &str, menu_name: &str) -> Result<Vec<String>, MenuError> {
        let menu = self.menu(menu_name)?;
        debug!(menu = menu_name, "printing meal menu");
        let mut lines = vec![format!("{title} Menu:")];
        lines.extend(menu.create_iterator().map(MenuItem::line));
        Ok(lines)
    }

    fn print_breakfast_menu(&self) -> Result<Vec<String>, MenuError> {
        self.print_named("Breakfast", BREAKFAST)
    }

    fn print_lunch_menu(&self) -> Result<Vec<String>, MenuError> {
        self.print_named("Lunch", LUNCH)
    }

    fn print_dinner_menu(&self) -> Result<Vec<String>, MenuError> {
        self.print_named("Dinner", DINNER)
    }

    /// True when any menu carries a vegetarian item with this name.
    fn is_item_vegetarian(&self, name: &str) -> bool {
        self.menus.iter().any(|menu| {
            menu.create_iterator()
                .any(|item| item.name == name && item.vegetarian)
        })
    }
}

fn main() -> Result<(), MenuError> {
    telemetry::init_logging();

    let mut pancake_house = PancakeHouseMenu::new()?;
    pancake_house.add_item("Buttermilk Pancakes", "A short stack with maple syrup", true, 3.19)?;
    pancake_house.add_item("French Toast", "Brioche with cinnamon sugar", true, 3.29)?;
    if let Err(err) = pancake_house.add_item("Crepes", "Thin pancakes with lemon", true, 3.39) {
        console::report_error(&err);
    }

    let waitress = Waitress::new(vec![
        Box::new(pancake_house),
        Box::new(DinerMenu::new()),
        Box::new(CafeMenu::new()),
    ]);

    console::section("All menus");
    console::print_lines(waitress.print_menu());

    console::section("Vegetarian");
    console::print_lines(waitress.print_vegetarian_menu());
    println!();

    let item_name = "Vegetarian BLT";
    let verdict = if waitress.is_item_vegetarian(item_name) {
        "vegetarian."
    } else {
        "not vegetarian."
    };
    println!("{item_name} is {verdict}");

    console::next_section("Meals");
    console::print_lines(waitress.print_breakfast_menu()?);
    println!();
    console::print_lines(waitress.print_lunch_menu()?);
    println!();
    console::print_lines(waitress.print_dinner_menu()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waitress() -> Waitress {
        Waitress::new(vec![
            Box::new(PancakeHouseMenu::new().unwrap()),
            Box::new(DinerMenu::new()),
            Box::new(CafeMenu::new()),
        ])
    }

    #[test]
    fn test_pancake_iterator_walks_filled_prefix() {
        let menu = PancakeHouseMenu::new().unwrap();
        let names: Vec<&str> = menu.create_iterator().map(|item| item.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "K&B's Pancake Breakfast",
                "Regular Pancake Breakfast",
                "Blueberry Pancakes",
                "Waffles",
            ]
        );
    }

    #[test]
    fn test_pancake_menu_capacity() {
        let mut menu = PancakeHouseMenu::new().unwrap();
        assert!(menu.add_item("Fifth", "", true, 1.0).is_ok());
        assert!(menu.add_item("Sixth", "", true, 1.0).is_ok());
        assert_eq!(menu.add_item("Seventh", "", true, 1.0), Err(MenuError::Full));
        assert_eq!(menu.create_iterator().count(), MAX_ITEMS);
        assert_eq!(
            MenuError::Full.to_string(),
            "Menu is full! Cannot add item to menu."
        );
    }

    #[test]
    fn test_empty_pancake_menu_yields_nothing() {
        assert_eq!(PancakeHouseMenu::empty().create_iterator().count(), 0);
    }

    #[test]
    fn test_diner_iterator_keeps_insertion_order() {
        let menu = DinerMenu::new();
        let first = menu.create_iterator().next().unwrap();
        assert_eq!(first.name, "Vegetarian BLT");
        assert_eq!(menu.create_iterator().last().unwrap().name, "Hotdog");
    }

    #[test]
    fn test_cafe_iterator_is_ordered_by_name() {
        let menu = CafeMenu::new();
        let names: Vec<&str> = menu.create_iterator().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Cappuccino", "Espresso", "Turkey Sandwich"]);
    }

    #[test]
    fn test_item_line_format() {
        let item = MenuItem::new("Cappuccino", "Espresso with steamed milk foam", true, 3.50);
        assert_eq!(item.line(), "Cappuccino, 3.5 -- Espresso with steamed milk foam");
    }

    #[test]
    fn test_print_menu_headers_in_registration_order() {
        let lines = waitress().print_menu();
        let headers: Vec<&String> = lines.iter().filter(|line| line.ends_with(" Menu:")).collect();
        assert_eq!(headers, vec!["Pancake House Menu:", "Diner Menu:", "Cafe Menu:"]);
        // 4 + 4 + 3 items, one header and one blank line per menu
        assert_eq!(lines.len(), 11 + 6);
    }

    #[test]
    fn test_vegetarian_menu() {
        let lines = waitress().print_vegetarian_menu();
        assert_eq!(lines[0], "Vegetarian Menu:");
        assert_eq!(lines.len(), 1 + 3 + 1 + 2);
        assert!(!lines.iter().any(|line| line.starts_with("BLT,")));
    }

    #[test]
    fn test_is_item_vegetarian() {
        let waitress = waitress();
        assert!(waitress.is_item_vegetarian("Vegetarian BLT"));
        assert!(!waitress.is_item_vegetarian("Hotdog"));
        assert!(!waitress.is_item_vegetarian("Unicorn Steak"));
    }

    #[test]
    fn test_meal_menus() {
        let waitress = waitress();
        let breakfast = waitress.print_breakfast_menu().unwrap();
        assert_eq!(breakfast[0], "Breakfast Menu:");
        assert_eq!(breakfast.len(), 5);

        let lunch = waitress.print_lunch_menu().unwrap();
        assert_eq!(lunch[1], "Cappuccino, 3.5 -- Espresso with steamed milk foam");

        let dinner = waitress.print_dinner_menu().unwrap();
        assert_eq!(dinner.len(), 5);
    }

    #[test]
    fn test_missing_menu_is_an_error() {
        let waitress = Waitress::new(vec![Box::new(DinerMenu::new())]);
        assert_eq!(
            waitress.print_breakfast_menu(),
            Err(MenuError::MissingMenu("Pancake House".to_string()))
        );
        assert!(waitress.print_dinner_menu().is_ok());
    }
}
