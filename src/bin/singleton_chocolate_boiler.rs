//! Singleton: one chocolate boiler per process, shared by every thread.
//!
//! Run with: cargo run --bin singleton_chocolate_boiler

use pattern_demos::{console, telemetry};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const WORKERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoilerState {
    empty: bool,
    boiled: bool,
}

/// How long each step keeps the boiler busy.
#[derive(Debug, Clone, Copy)]
struct Timings {
    startup: Duration,
    fill: Duration,
    boil: Duration,
    drain: Duration,
}

impl Timings {
    const FACTORY: Timings = Timings {
        startup: Duration::from_millis(100),
        fill: Duration::from_millis(50),
        boil: Duration::from_millis(100),
        drain: Duration::from_millis(50),
    };

    #[cfg(test)]
    const INSTANT: Timings = Timings {
        startup: Duration::ZERO,
        fill: Duration::ZERO,
        boil: Duration::ZERO,
        drain: Duration::ZERO,
    };
}

struct ChocolateBoiler {
    state: Mutex<BoilerState>,
    timings: Timings,
}

impl ChocolateBoiler {
    fn new(timings: Timings) -> Self {
        println!("Creating Chocolate Boiler");
        thread::sleep(timings.startup);
        let boiler = Self {
            state: Mutex::new(BoilerState {
                empty: true,
                boiled: false,
            }),
            timings,
        };
        println!("Chocolate Boiler created");
        boiler
    }

    /// The process-wide boiler, created on first use.
    fn instance() -> &'static ChocolateBoiler {
        static INSTANCE: OnceLock<ChocolateBoiler> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            info!("initializing the shared boiler");
            ChocolateBoiler::new(Timings::FACTORY)
        })
    }

    fn state(&self) -> MutexGuard<'_, BoilerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fill(&self) -> bool {
        let mut state = self.state();
        if !state.empty {
            debug!("fill skipped, boiler is full");
            return false;
        }
        state.empty = false;
        state.boiled = false;
        println!("Filling the boiler with a chocolate mixture");
        thread::sleep(self.timings.fill);
        true
    }

    fn boil(&self) -> bool {
        let mut state = self.state();
        if state.empty || state.boiled {
            debug!(?state, "boil skipped");
            return false;
        }
        state.boiled = true;
        println!("Boiling the chocolate mixture");
        thread::sleep(self.timings.boil);
        true
    }

    fn drain(&self) -> bool {
        let mut state = self.state();
        if state.empty || !state.boiled {
            debug!(?state, "drain skipped");
            return false;
        }
        state.empty = true;
        state.boiled = false;
        println!("Draining the boiled chocolate and milk");
        thread::sleep(self.timings.drain);
        true
    }

    fn is_empty(&self) -> bool {
        self.state().empty
    }

    fn is_boiled(&self) -> bool {
        self.state().boiled
    }
}

fn use_boiler() {
    println!("Thread {:?} is using the boiler.", thread::current().id());
    let boiler = ChocolateBoiler::instance();
    boiler.fill();
    boiler.boil();
    boiler.drain();
}

fn main() {
    telemetry::init_logging();

    console::section("Five workers, one boiler");
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(use_boiler);
        }
    });

    let boiler = ChocolateBoiler::instance();
    println!();
    println!(
        "Final state: empty = {}, boiled = {}",
        boiler.is_empty(),
        boiler.is_boiled()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_shared() {
        let a = ChocolateBoiler::instance();
        let b = thread::spawn(|| ChocolateBoiler::instance() as *const ChocolateBoiler as usize)
            .join()
            .unwrap();
        assert!(std::ptr::eq(a, ChocolateBoiler::instance()));
        assert_eq!(a as *const ChocolateBoiler as usize, b);
    }

    #[test]
    fn test_full_cycle() {
        let boiler = ChocolateBoiler::new(Timings::INSTANT);
        assert!(boiler.is_empty());
        assert!(boiler.fill());
        assert!(!boiler.is_empty() && !boiler.is_boiled());
        assert!(boiler.boil());
        assert!(boiler.is_boiled());
        assert!(boiler.drain());
        assert!(boiler.is_empty() && !boiler.is_boiled());
    }

    #[test]
    fn test_out_of_order_steps_are_refused() {
        let boiler = ChocolateBoiler::new(Timings::INSTANT);
        assert!(!boiler.boil());
        assert!(!boiler.drain());
        assert!(boiler.fill());
        assert!(!boiler.fill());
        assert!(!boiler.drain());
        assert!(boiler.boil());
        assert!(!boiler.boil());
    }

    #[test]
    fn test_concurrent_cycles_keep_state_consistent() {
        let boiler = ChocolateBoiler::new(Timings::INSTANT);
        let mut fills = 0;
        let mut drains = 0;
        thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let mut counts = (0, 0);
                        for _ in 0..50 {
                            counts.0 += usize::from(boiler.fill());
                            boiler.boil();
                            counts.1 += usize::from(boiler.drain());
                            let state = *boiler.state();
                            assert!(!(state.empty && state.boiled));
                        }
                        counts
                    })
                })
                .collect();
            for handle in handles {
                let (f, d) = handle.join().unwrap();
                fills += f;
                drains += d;
            }
        });

        // Every drain follows exactly one fill.
        let still_full = usize::from(!boiler.is_empty());
        assert_eq!(fills, drains + still_full);
    }
}
