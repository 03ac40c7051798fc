//! Decorator: condiments wrap a beverage and add to its description and cost.
//!
//! Run with: cargo run --bin decorator_beverage

use pattern_demos::{console, telemetry};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Size {
    #[default]
    Unknown,
    Tall,
    Grande,
    Venti,
}

trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> f64;

    fn size(&self) -> Size {
        Size::Unknown
    }
}

impl Beverage for Box<dyn Beverage> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn size(&self) -> Size {
        (**self).size()
    }
}

// =============================================================================
// Concrete components
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Roast {
    Espresso,
    HouseBlend,
    Decaf,
    DarkRoast,
}

impl Roast {
    fn name(self) -> &'static str {
        match self {
            Roast::Espresso => "Espresso",
            Roast::HouseBlend => "House Blend Coffee",
            Roast::Decaf => "Decaf Coffee",
            Roast::DarkRoast => "Dark Roast Coffee",
        }
    }

    fn price(self) -> f64 {
        match self {
            Roast::Espresso => 1.99,
            Roast::HouseBlend => 0.89,
            Roast::Decaf => 1.05,
            Roast::DarkRoast => 0.99,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coffee {
    roast: Roast,
    size: Size,
}

impl Coffee {
    fn new(roast: Roast) -> Self {
        Self {
            roast,
            size: Size::default(),
        }
    }

    fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl Beverage for Coffee {
    fn description(&self) -> String {
        self.roast.name().to_string()
    }

    fn cost(&self) -> f64 {
        self.roast.price()
    }

    fn size(&self) -> Size {
        self.size
    }
}

// =============================================================================
// Decorators
// =============================================================================

struct Mocha<B> {
    beverage: B,
}

impl<B: Beverage> Beverage for Mocha<B> {
    fn description(&self) -> String {
        format!("{}, Mocha", self.beverage.description())
    }

    fn cost(&self) -> f64 {
        0.20 + self.beverage.cost()
    }

    fn size(&self) -> Size {
        self.beverage.size()
    }
}

struct Whip<B> {
    beverage: B,
}

impl<B: Beverage> Beverage for Whip<B> {
    fn description(&self) -> String {
        format!("{}, Whip", self.beverage.description())
    }

    fn cost(&self) -> f64 {
        0.10 + self.beverage.cost()
    }

    fn size(&self) -> Size {
        self.beverage.size()
    }
}

struct SteamedMilk<B> {
    beverage: B,
}

impl<B: Beverage> Beverage for SteamedMilk<B> {
    fn description(&self) -> String {
        format!("{}, Steamed Milk", self.beverage.description())
    }

    fn cost(&self) -> f64 {
        0.10 + self.beverage.cost()
    }

    fn size(&self) -> Size {
        self.beverage.size()
    }
}

/// Soy is priced by cup size.
struct Soy<B> {
    beverage: B,
}

impl<B: Beverage> Beverage for Soy<B> {
    fn description(&self) -> String {
        format!("{}, Soy", self.beverage.description())
    }

    fn cost(&self) -> f64 {
        let soy = match self.beverage.size() {
            Size::Tall => 0.10,
            Size::Grande => 0.15,
            Size::Venti => 0.20,
            Size::Unknown => 0.0,
        };
        soy + self.beverage.cost()
    }

    fn size(&self) -> Size {
        self.beverage.size()
    }
}

// =============================================================================
// Extension trait for chaining condiments
// =============================================================================

trait CondimentExt: Beverage + Sized {
    fn mocha(self) -> Mocha<Self> {
        Mocha { beverage: self }
    }

    fn whip(self) -> Whip<Self> {
        Whip { beverage: self }
    }

    fn soy(self) -> Soy<Self> {
        Soy { beverage: self }
    }

    fn steamed_milk(self) -> SteamedMilk<Self> {
        SteamedMilk { beverage: self }
    }

    fn boxed(self) -> Box<dyn Beverage>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<B: Beverage> CondimentExt for B {}

fn receipt(beverage: &dyn Beverage) -> String {
    format!("{} {}", beverage.description(), console::money(beverage.cost()))
}

fn main() {
    telemetry::init_logging();

    console::section("Orders");
    let beverage1 = Coffee::new(Roast::Espresso);
    println!("{}", receipt(&beverage1));

    // Re-wrapping one variable, one condiment at a time.
    let mut beverage2: Box<dyn Beverage> = Box::new(Coffee::new(Roast::DarkRoast));
    beverage2 = Box::new(Mocha { beverage: beverage2 });
    beverage2 = Box::new(Mocha { beverage: beverage2 });
    beverage2 = Box::new(Whip { beverage: beverage2 });
    println!("{}", receipt(&*beverage2));

    let beverage3 = Coffee::new(Roast::HouseBlend)
        .with_size(Size::Venti)
        .soy()
        .mocha()
        .whip();
    debug!(size = ?beverage3.size(), "house blend sized");
    println!("{}", receipt(&beverage3));

    console::next_section("Soy by size");
    for size in [Size::Tall, Size::Grande, Size::Venti] {
        let latte = Coffee::new(Roast::Decaf).with_size(size).steamed_milk().soy();
        println!("{:?}: {}", size, receipt(&latte));
    }

    console::next_section("Mixed order");
    let order: Vec<Box<dyn Beverage>> = vec![
        Coffee::new(Roast::Espresso).whip().boxed(),
        Coffee::new(Roast::Decaf).steamed_milk().boxed(),
        Coffee::new(Roast::DarkRoast).mocha().mocha().boxed(),
    ];
    for beverage in &order {
        println!("{}", receipt(&**beverage));
    }
    let total: f64 = order.iter().map(|b| b.cost()).sum();
    println!("Total: {}", console::money(total));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plain_espresso() {
        let espresso = Coffee::new(Roast::Espresso);
        assert_eq!(espresso.description(), "Espresso");
        assert!(close(espresso.cost(), 1.99));
        assert_eq!(espresso.size(), Size::Unknown);
    }

    #[test]
    fn test_double_mocha_whip_dark_roast() {
        let beverage = Coffee::new(Roast::DarkRoast).mocha().mocha().whip();
        assert_eq!(beverage.description(), "Dark Roast Coffee, Mocha, Mocha, Whip");
        assert!(close(beverage.cost(), 1.49));
        assert_eq!(receipt(&beverage), "Dark Roast Coffee, Mocha, Mocha, Whip $1.49");
    }

    #[test]
    fn test_venti_soy_house_blend() {
        let beverage = Coffee::new(Roast::HouseBlend)
            .with_size(Size::Venti)
            .soy()
            .mocha()
            .whip();
        assert_eq!(beverage.description(), "House Blend Coffee, Soy, Mocha, Whip");
        assert!(close(beverage.cost(), 0.89 + 0.20 + 0.20 + 0.10));
    }

    #[test]
    fn test_decorators_report_inner_size() {
        // Soy sits outside mocha here and must still see the venti size.
        let beverage = Coffee::new(Roast::Decaf).with_size(Size::Venti).mocha().soy();
        assert_eq!(beverage.size(), Size::Venti);
        assert!(close(beverage.cost(), 1.05 + 0.20 + 0.20));
    }

    #[test]
    fn test_soy_without_size_is_free() {
        let beverage = Coffee::new(Roast::Decaf).soy();
        assert!(close(beverage.cost(), 1.05));
    }

    #[test]
    fn test_dynamic_wrapping_matches_static() {
        let mut dynamic: Box<dyn Beverage> = Box::new(Coffee::new(Roast::DarkRoast));
        dynamic = Box::new(Mocha { beverage: dynamic });
        dynamic = Box::new(Whip { beverage: dynamic });

        let fixed = Coffee::new(Roast::DarkRoast).mocha().whip();
        assert_eq!(dynamic.description(), fixed.description());
        assert!(close(dynamic.cost(), fixed.cost()));
    }

    fn condiment_strategy() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..4, 0..10)
    }

    proptest! {
        #[test]
        fn prop_cost_is_base_plus_condiments(condiments in condiment_strategy(), size_index in 0usize..4) {
            let size = [Size::Unknown, Size::Tall, Size::Grande, Size::Venti][size_index];
            let soy_price = [0.0, 0.10, 0.15, 0.20][size_index];

            let mut beverage = Coffee::new(Roast::HouseBlend).with_size(size).boxed();
            let mut expected = 0.89;
            for condiment in &condiments {
                beverage = match condiment {
                    0 => { expected += 0.20; beverage.mocha().boxed() }
                    1 => { expected += 0.10; beverage.whip().boxed() }
                    2 => { expected += 0.10; beverage.steamed_milk().boxed() }
                    _ => { expected += soy_price; beverage.soy().boxed() }
                };
            }

            prop_assert!((beverage.cost() - expected).abs() < 1e-9);
            prop_assert_eq!(beverage.size(), size);
            prop_assert_eq!(beverage.description().matches(", ").count(), condiments.len());
        }
    }
}
