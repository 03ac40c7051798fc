//! Composite: menus that contain menu items and other menus, treated uniformly.
//!
//! Run with: cargo run --bin composite_menu

use pattern_demos::{console, telemetry};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum MenuError {
    #[error("unsupported operation '{operation}' on {component}")]
    Unsupported {
        operation: &'static str,
        component: String,
    },

    #[error("index {index} out of range for menu '{menu}' with {len} entries")]
    IndexOutOfRange { menu: String, index: usize, len: usize },
}

// =============================================================================
// Leaf and composite
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct MenuItem {
    name: String,
    description: String,
    vegetarian: bool,
    price: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Menu {
    name: String,
    description: String,
    children: Vec<MenuComponent>,
}

#[derive(Debug, Clone, PartialEq)]
enum MenuComponent {
    Item(MenuItem),
    Menu(Menu),
}

impl MenuComponent {
    fn item(name: &str, description: &str, vegetarian: bool, price: f64) -> Self {
        MenuComponent::Item(MenuItem {
            name: name.to_string(),
            description: description.to_string(),
            vegetarian,
            price,
        })
    }

    fn menu(name: &str, description: &str) -> Self {
        MenuComponent::Menu(Menu {
            name: name.to_string(),
            description: description.to_string(),
            children: Vec::new(),
        })
    }

    /// Builder-style `add` for assembling a tree in one expression.
    fn with(mut self, child: MenuComponent) -> Result<Self, MenuError> {
        self.add(child)?;
        Ok(self)
    }

    fn name(&self) -> &str {
        match self {
            MenuComponent::Item(item) => &item.name,
            MenuComponent::Menu(menu) => &menu.name,
        }
    }

    fn description(&self) -> &str {
        match self {
            MenuComponent::Item(item) => &item.description,
            MenuComponent::Menu(menu) => &menu.description,
        }
    }

    fn unsupported(&self, operation: &'static str) -> MenuError {
        let component = match self {
            MenuComponent::Item(item) => format!("menu item '{}'", item.name),
            MenuComponent::Menu(menu) => format!("menu '{}'", menu.name),
        };
        debug!(operation, %component, "unsupported composite operation");
        MenuError::Unsupported {
            operation,
            component,
        }
    }

    fn is_vegetarian(&self) -> Result<bool, MenuError> {
        match self {
            MenuComponent::Item(item) => Ok(item.vegetarian),
            MenuComponent::Menu(_) => Err(self.unsupported("is_vegetarian")),
        }
    }

    fn price(&self) -> Result<f64, MenuError> {
        match self {
            MenuComponent::Item(item) => Ok(item.price),
            MenuComponent::Menu(_) => Err(self.unsupported("price")),
        }
    }

    fn add(&mut self, child: MenuComponent) -> Result<(), MenuError> {
        match self {
            MenuComponent::Menu(menu) => {
                menu.children.push(child);
                Ok(())
            }
            MenuComponent::Item(_) => Err(self.unsupported("add")),
        }
    }

    /// Removes the first direct child with the given name.
    fn remove(&mut self, name: &str) -> Result<Option<MenuComponent>, MenuError> {
        match self {
            MenuComponent::Menu(menu) => Ok(menu
                .children
                .iter()
                .position(|c| c.name() == name)
                .map(|index| menu.children.remove(index))),
            MenuComponent::Item(_) => Err(self.unsupported("remove")),
        }
    }

    fn child(&self, index: usize) -> Result<&MenuComponent, MenuError> {
        match self {
            MenuComponent::Menu(menu) => {
                menu.children
                    .get(index)
                    .ok_or_else(|| MenuError::IndexOutOfRange {
                        menu: menu.name.clone(),
                        index,
                        len: menu.children.len(),
                    })
            }
            MenuComponent::Item(_) => Err(self.unsupported("child")),
        }
    }

    fn render(&self) -> Vec<String> {
        match self {
            MenuComponent::Item(item) => {
                let marker = if item.vegetarian { " (v)" } else { "" };
                vec![
                    format!("  {}{}, {}", item.name, marker, item.price),
                    format!("     -- {}", item.description),
                ]
            }
            MenuComponent::Menu(menu) => {
                let mut lines = vec![
                    String::new(),
                    format!("{}, {}", menu.name, menu.description),
                    "---------------------".to_string(),
                ];
                lines.extend(menu.children.iter().flat_map(MenuComponent::render));
                lines
            }
        }
    }

    /// Depth-first, pre-order walk over every descendant. A leaf has none.
    fn iter(&self) -> CompositeIter<'_> {
        let mut stack = Vec::new();
        if let MenuComponent::Menu(menu) = self {
            stack.push(menu.children.iter());
        }
        CompositeIter { stack }
    }
}

// =============================================================================
// External iterator over the tree
// =============================================================================

struct CompositeIter<'a> {
    stack: Vec<std::slice::Iter<'a, MenuComponent>>,
}

impl<'a> Iterator for CompositeIter<'a> {
    type Item = &'a MenuComponent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(component) => {
                    if let MenuComponent::Menu(menu) = component {
                        self.stack.push(menu.children.iter());
                    }
                    return Some(component);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

// =============================================================================
// Client
// =============================================================================

struct Waitress {
    menus: MenuComponent,
}

impl Waitress {
    fn new(menus: MenuComponent) -> Self {
        Self { menus }
    }

    fn print_menu(&self) -> Vec<String> {
        self.menus.render()
    }

    fn print_vegetarian_menu(&self) -> Vec<String> {
        let mut lines = vec![
            "VEGETARIAN MENU".to_string(),
            "----".to_string(),
        ];
        for component in self.menus.iter() {
            // Menus cannot answer is_vegetarian; only leaves are listed.
            if let Ok(true) = component.is_vegetarian() {
                lines.extend(component.render());
            }
        }
        lines
    }
}

fn build_menus() -> Result<MenuComponent, MenuError> {
    let pancake_house = MenuComponent::menu("Pancake House", "Breakfast").with(
        MenuComponent::item("Fruit Bowl", "A bowl of fresh fruit", true, 3.99),
    )?;

    let dessert = MenuComponent::menu("Dessert Menu", "Dessert of course!").with(
        MenuComponent::item(
            "Apple Pie",
            "Apple pie with a flaky crust, topped with vanilla ice cream",
            true,
            1.59,
        ),
    )?;

    let diner = MenuComponent::menu("Diner", "Lunch")
        .with(MenuComponent::item(
            "Pasta",
            "Spaghetti with Marinara Sauce, and a slice of sourdough bread",
            true,
            3.89,
        ))?
        .with(dessert)?;

    let cafe = MenuComponent::menu("Cafe", "Evenings").with(MenuComponent::item(
        "Veggie Burger and Air Fries",
        "Veggie burger on a whole wheat bun, lettuce, tomato, and fries",
        true,
        6.95,
    ))?;

    MenuComponent::menu("All Menus", "All available menus")
        .with(pancake_house)?
        .with(diner)?
        .with(cafe)
}

fn main() -> Result<(), MenuError> {
    telemetry::init_logging();

    let waitress = Waitress::new(build_menus()?);

    console::section("Full menu");
    console::print_lines(waitress.print_menu());

    console::next_section("Vegetarian menu");
    console::print_lines(waitress.print_vegetarian_menu());

    console::next_section("Unsupported operations");
    let diner = waitress.menus.child(1)?;
    if let Err(err) = diner.price() {
        console::report_error(&err);
    }
    if let Err(err) = waitress.menus.child(10) {
        console::report_error(&err);
    }
    let mut pasta = diner.child(0)?.clone();
    if let Err(err) = pasta.add(MenuComponent::item("Garlic Bread", "Toasted", true, 1.25)) {
        console::report_error(&err);
    }

    console::next_section("Dessert removed from the diner");
    let mut menus = waitress.menus;
    if let MenuComponent::Menu(all) = &mut menus {
        if let Some(diner) = all.children.get_mut(1) {
            if let Some(removed) = diner.remove("Dessert Menu")? {
                println!("Removed {}", removed.name());
            }
        }
    }
    let names: Vec<&str> = menus.iter().map(MenuComponent::name).collect();
    println!("{}", names.join(", "));

    println!("\nExiting");
    Ok(())
}
