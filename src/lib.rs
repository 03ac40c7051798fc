//! # Pattern Demos
//!
//! Runnable programs, one per classical design pattern, each built around a
//! small toy domain.
//!
//! ## Structural
//! - Adapter (ducks and turkeys)
//! - Composite (nested menus)
//! - Decorator (coffee condiments)
//! - Facade (home theater)
//!
//! ## Creational
//! - Abstract Factory (regional pizza stores, maze parts)
//! - Singleton (chocolate boiler shared across threads)
//!
//! ## Behavioral
//! - Command (remote control with undo)
//! - Iterator (three menus with different storage)
//! - Observer (weather station displays)
//! - Strategy (duck behaviors, adventure weapons)
//! - Template Method (caffeine beverages)
//!
//! Run individual programs with:
//! ```bash
//! cargo run --bin decorator_beverage
//! RUST_LOG=debug cargo run --bin singleton_chocolate_boiler
//! ```
//!
//! This library only holds what every program shares: console formatting
//! and logging setup.

pub mod console;
pub mod telemetry;
