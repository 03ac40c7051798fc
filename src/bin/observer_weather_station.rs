//! Observer: weather displays subscribe to a weather station and redraw on
//! every new measurement.
//!
//! Run with: cargo run --bin observer_weather_station

use pattern_demos::{console, telemetry};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Measurements {
    temperature: f64,
    humidity: f64,
    pressure: f64,
}

trait DisplayElement {
    fn display(&self) -> String;
}

trait Observer: DisplayElement {
    fn update(&mut self, measurements: &Measurements);
}

type SharedObserver = Arc<Mutex<dyn Observer + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ObserverId(u64);

trait Subject {
    fn register_observer(&mut self, observer: SharedObserver) -> ObserverId;
    fn remove_observer(&mut self, id: ObserverId) -> bool;
    /// Pushes the current measurements and collects what each display shows.
    fn notify_observers(&self) -> Vec<String>;
}

#[derive(Default)]
struct WeatherData {
    observers: Vec<(ObserverId, SharedObserver)>,
    next_id: u64,
    measurements: Measurements,
}

impl WeatherData {
    fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) -> Vec<String> {
        self.measurements = Measurements {
            temperature,
            humidity,
            pressure,
        };
        debug!(measurements = ?self.measurements, observers = self.observers.len(), "measurements changed");
        self.notify_observers()
    }
}

impl Subject for WeatherData {
    fn register_observer(&mut self, observer: SharedObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        debug!(?id, "observer registered");
        id
    }

    fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        let removed = before != self.observers.len();
        debug!(?id, removed, "observer removal requested");
        removed
    }

    fn notify_observers(&self) -> Vec<String> {
        self.observers
            .iter()
            .map(|(_, observer)| {
                let mut observer = observer.lock().unwrap_or_else(PoisonError::into_inner);
                observer.update(&self.measurements);
                observer.display()
            })
            .collect()
    }
}

// =============================================================================
// Displays
// =============================================================================

#[derive(Debug, Default)]
struct CurrentConditionsDisplay {
    temperature: f64,
    humidity: f64,
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, measurements: &Measurements) {
        self.temperature = measurements.temperature;
        self.humidity = measurements.humidity;
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) -> String {
        format!(
            "Current conditions: {}F degrees and {}% humidity",
            self.temperature, self.humidity
        )
    }
}

#[derive(Debug)]
struct StatisticsDisplay {
    max_temp: f64,
    min_temp: f64,
    temp_sum: f64,
    readings: u32,
}

impl Default for StatisticsDisplay {
    fn default() -> Self {
        Self {
            max_temp: -1000.0,
            min_temp: 1000.0,
            temp_sum: 0.0,
            readings: 0,
        }
    }
}

impl StatisticsDisplay {
    fn average(&self) -> f64 {
        if self.readings == 0 {
            0.0
        } else {
            self.temp_sum / f64::from(self.readings)
        }
    }
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, measurements: &Measurements) {
        let temp = measurements.temperature;
        self.temp_sum += temp;
        self.readings += 1;
        self.max_temp = self.max_temp.max(temp);
        self.min_temp = self.min_temp.min(temp);
    }
}

impl DisplayElement for StatisticsDisplay {
    fn display(&self) -> String {
        format!(
            "Avg/Max/Min temperature = {}/{}/{}",
            self.average(),
            self.max_temp,
            self.min_temp
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outlook {
    Improving,
    Same,
    Cooler,
}

#[derive(Debug)]
struct ForecastDisplay {
    current_pressure: f64,
    last_pressure: f64,
}

impl Default for ForecastDisplay {
    fn default() -> Self {
        Self {
            current_pressure: 29.92,
            last_pressure: 29.92,
        }
    }
}

impl ForecastDisplay {
    fn outlook(&self) -> Outlook {
        if self.current_pressure > self.last_pressure {
            Outlook::Improving
        } else if self.current_pressure < self.last_pressure {
            Outlook::Cooler
        } else {
            Outlook::Same
        }
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, measurements: &Measurements) {
        self.last_pressure = self.current_pressure;
        self.current_pressure = measurements.pressure;
    }
}

impl DisplayElement for ForecastDisplay {
    fn display(&self) -> String {
        let text = match self.outlook() {
            Outlook::Improving => "Improving weather on the way!",
            Outlook::Same => "More of the same",
            Outlook::Cooler => "Watch out for cooler, rainy weather",
        };
        format!("Forecast: {text}")
    }
}

#[derive(Debug, Default)]
struct HeatIndexDisplay {
    heat_index: f64,
}

/// Heat index polynomial over temperature (F) and relative humidity (%).
fn compute_heat_index(t: f64, rh: f64) -> f64 {
    16.923 + (0.185212 * t) + (5.37941 * rh) - (0.100254 * t * rh)
        + (0.00941695 * (t * t))
        + (0.00728898 * (rh * rh))
        + (0.000345372 * (t * t * rh))
        - (0.000814971 * (t * rh * rh))
        + (0.0000102102 * (t * t * rh * rh))
        - (0.000038646 * (t * t * t))
        + (0.0000291583 * (rh * rh * rh))
        + (0.00000142721 * (t * t * t * rh))
        + (0.000000197483 * (t * rh * rh * rh))
        - (0.0000000218429 * (t * t * t * rh * rh))
        + (0.000000000843296 * (t * t * rh * rh * rh))
        - (0.0000000000481975 * (t * t * t * rh * rh * rh))
}

impl Observer for HeatIndexDisplay {
    fn update(&mut self, measurements: &Measurements) {
        self.heat_index = compute_heat_index(measurements.temperature, measurements.humidity);
    }
}

impl DisplayElement for HeatIndexDisplay {
    fn display(&self) -> String {
        format!("Heat index is {:.2}", self.heat_index)
    }
}

fn main() {
    telemetry::init_logging();

    let mut weather_data = WeatherData::default();

    let current: SharedObserver = Arc::new(Mutex::new(CurrentConditionsDisplay::default()));
    let statistics: SharedObserver = Arc::new(Mutex::new(StatisticsDisplay::default()));
    let forecast: SharedObserver = Arc::new(Mutex::new(ForecastDisplay::default()));
    let heat_index: SharedObserver = Arc::new(Mutex::new(HeatIndexDisplay::default()));

    weather_data.register_observer(current);
    weather_data.register_observer(statistics);
    let forecast_id = weather_data.register_observer(forecast);
    weather_data.register_observer(heat_index);

    console::section("Four displays");
    for (temperature, humidity, pressure) in [(80.0, 65.0, 30.4), (82.0, 70.0, 29.2), (78.0, 90.0, 29.2)] {
        console::print_lines(weather_data.set_measurements(temperature, humidity, pressure));
        println!();
    }

    console::section("Forecast display removed");
    let removed = weather_data.remove_observer(forecast_id);
    info!(removed, "forecast display unsubscribed");
    console::print_lines(weather_data.set_measurements(62.0, 90.0, 28.1));
}
